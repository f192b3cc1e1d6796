use super::model::position_options;
use crate::domain::a001_staff::ui::page::view_model::StaffPageViewModel;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Create / edit form. The department and position lists grow a new row
/// as soon as the last one gets a value.
#[component]
#[allow(non_snake_case)]
pub fn StaffDetails(vm: StaffPageViewModel) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    let department_rows = move || 0..vm.session.with(|s| s.draft.departments.len());
    let position_rows = move || 0..vm.session.with(|s| s.draft.available_positions.len());

    view! {
        <div class="details-container staff-details">
            <div class="details-header" node_ref=vm.form_ref>
                <h2>
                    {move || if vm.is_edit_mode() { "Редактирование сотрудника" } else { "Новый сотрудник" }}
                </h2>
            </div>

            {move || vm.session.with(|s| s.save_error.clone()).map(|e| view! { <div class="error">{e}</div> })}

            <form on:submit=on_submit>
                <Input
                    label="Имя"
                    id="staff-name"
                    value=Signal::derive(move || vm.session.with(|s| s.draft.name.clone()))
                    on_input=Callback::new(move |v: String| vm.set_name(v))
                    placeholder="Введите имя"
                    required=true
                />

                <div class="form__group">
                    <label class="form__label">{"Отделения"}</label>
                    <For
                        each=department_rows
                        key=|i| *i
                        children=move |i: usize| {
                            view! {
                                <input
                                    type="text"
                                    class="form__input form__input--row"
                                    placeholder="Отделение"
                                    prop:value=move || vm.session.with(|s| s.draft.departments.get(i).cloned().unwrap_or_default())
                                    on:input=move |ev| vm.set_department(i, event_target_value(&ev))
                                />
                            }
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">{"Доступные позиции"}</label>
                    <For
                        each=position_rows
                        key=|i| *i
                        children=move |i: usize| {
                            let current = Signal::derive(move || {
                                vm.session.with(|s| s.draft.available_positions.get(i).cloned().unwrap_or_default())
                            });
                            let options = Signal::derive(move || {
                                vm.positions.with(|catalog| position_options(catalog, &current.get()))
                            });
                            view! {
                                <Select
                                    value=current
                                    options=options
                                    on_change=Callback::new(move |v: String| vm.set_position(i, v))
                                />
                            }
                        }
                    />
                </div>

                <Input
                    label="Стаж (лет)"
                    id="staff-experience"
                    input_type="number"
                    min="0"
                    value=Signal::derive(move || vm.session.with(|s| s.draft.experience.to_string()))
                    on_input=Callback::new(move |v: String| vm.set_experience(v))
                    required=true
                />

                <div class="details-actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.is_saving.get()
                    >
                        {move || if vm.is_edit_mode() { icon("save") } else { icon("plus") }}
                        {move || match (vm.is_saving.get(), vm.is_edit_mode()) {
                            (true, _) => "Сохранение...",
                            (false, true) => "Сохранить",
                            (false, false) => "Создать",
                        }}
                    </button>
                    <Show when=move || vm.is_edit_mode()>
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| vm.cancel_edit()
                        >
                            {icon("x")}
                            {"Очистить"}
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
