use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional)]
    variant: &'static str,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    view! {
        <button
            type="button"
            class=format!("button {}", variant_class)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
