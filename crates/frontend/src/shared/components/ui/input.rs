use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional)]
    label: Option<&'static str>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional)]
    placeholder: &'static str,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional)]
    input_type: &'static str,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional)]
    id: Option<&'static str>,
    /// Minimum value for numeric inputs
    #[prop(optional)]
    min: Option<&'static str>,
) -> impl IntoView {
    let input_t = if input_type.is_empty() { "text" } else { input_type };

    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=id>
                    {l}
                </label>
            })}
            <input
                id=id
                class="form__input"
                type=input_t
                min=min
                prop:value=move || value.get()
                placeholder=placeholder
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
