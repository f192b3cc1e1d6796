use leptos::prelude::*;

/// PageHeader component - reusable header for list pages
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional)]
    subtitle: Option<&'static str>,

    /// Header actions (buttons)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {subtitle.map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
