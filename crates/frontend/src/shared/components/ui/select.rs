use leptos::prelude::*;

/// Select component with label support
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional)]
    label: Option<&'static str>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// ID for the select element
    #[prop(optional)]
    id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {label.map(|l| view! {
                <label class="form__label" for=id>
                    {l}
                </label>
            })}
            <select
                id=id
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val prop:selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
