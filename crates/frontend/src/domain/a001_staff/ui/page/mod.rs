pub mod view_model;

use self::view_model::StaffPageViewModel;
use crate::domain::a001_staff::ui::details::StaffDetails;
use crate::domain::a001_staff::ui::list::StaffList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use leptos::prelude::*;

/// Staff screen: edit form on top, filterable list below
#[component]
#[allow(non_snake_case)]
pub fn StaffPage() -> impl IntoView {
    let vm = StaffPageViewModel::new();
    vm.load();

    view! {
        <PageFrame page_id="a001_staff--list" category=PAGE_CAT_LIST>
            <PageHeader title="Сотрудники" subtitle="Отделения, доступные позиции и стаж">
                <Button variant="secondary" on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.fetch_list())>
                    {icon("refresh")}
                    {"Обновить"}
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || vm.load_error.get().map(|e| view! { <div class="error">{e}</div> })}
                <StaffDetails vm=vm />
                <StaffList vm=vm />
            </div>
        </PageFrame>
    }
}
