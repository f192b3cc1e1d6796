use crate::domain::a001_staff::ui::page::StaffPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <StaffPage />
    }
}
