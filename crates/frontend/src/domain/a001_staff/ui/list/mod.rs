pub mod state;

use crate::domain::a001_staff::ui::page::view_model::StaffPageViewModel;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn StaffList(vm: StaffPageViewModel) -> impl IntoView {
    let filter_value = Signal::derive(move || vm.department_filter.get());
    let filter_options = Signal::derive(move || vm.filter_options());

    view! {
        <div class="staff-list">
            <div class="filter-panel-content">
                {icon("filter")}
                <Select
                    label="Отделение"
                    id="staff-department-filter"
                    value=filter_value
                    options=filter_options
                    on_change=Callback::new(move |v: String| vm.department_filter.set(v))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Имя"}</th>
                            <th class="table__header-cell">{"Отделения"}</th>
                            <th class="table__header-cell">{"Позиции"}</th>
                            <th class="table__header-cell">{"Стаж"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = vm.visible_items();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="4">
                                            {"Нет сотрудников"}
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|staff| {
                                    let row_id = staff.id.clone();
                                    let is_editing = move || {
                                        row_id.is_some() && vm.session.with(|s| s.editing_id == row_id)
                                    };
                                    let departments = staff.departments.join(", ");
                                    let positions = staff.available_positions.join(", ");
                                    let name = staff.name.clone();
                                    let experience = format!("{} г.", staff.experience);
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=is_editing
                                            on:click=move |_| vm.begin_edit(staff.clone())
                                        >
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell">{departments}</td>
                                            <td class="table__cell">{positions}</td>
                                            <td class="table__cell">{experience}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
