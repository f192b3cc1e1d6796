use contracts::domain::a001_staff::aggregate::Staff;
use contracts::domain::a002_position::aggregate::PositionOption;
use leptos::html;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::domain::a001_staff::api;
use crate::domain::a001_staff::ui::details::model::{EditSession, SubmitCommand};
use crate::domain::a001_staff::ui::list::state::{
    filter_by_department, filter_select_options, StaffListState,
};
use crate::domain::a002_position::api::fetch_positions;

/// State of the staff page: loaded records, the edit form and the filter
#[derive(Clone, Copy)]
pub struct StaffPageViewModel {
    pub list: RwSignal<StaffListState>,
    pub positions: RwSignal<Vec<PositionOption>>,
    pub session: RwSignal<EditSession>,
    pub department_filter: RwSignal<String>,
    /// Error of the last list or catalog load
    pub load_error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    /// Header of the edit form, scrolled to when a row is picked
    pub form_ref: NodeRef<html::Div>,
}

impl StaffPageViewModel {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(StaffListState::default()),
            positions: RwSignal::new(Vec::new()),
            session: RwSignal::new(EditSession::default()),
            department_filter: RwSignal::new(String::new()),
            load_error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            form_ref: NodeRef::new(),
        }
    }

    /// Initial load: staff list and position catalog, independently
    pub fn load(&self) {
        self.fetch_list();
        self.fetch_positions();
    }

    pub fn fetch_list(&self) {
        let seq = self
            .list
            .try_update(StaffListState::begin_fetch)
            .unwrap_or_default();

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_staff().await {
                Ok(list) => {
                    let count = list.len();
                    let applied = this
                        .list
                        .try_update(|state| state.apply_fetched(seq, list))
                        .unwrap_or(false);
                    if applied {
                        log::debug!("staff list loaded: {} records", count);
                        this.load_error.set(None);
                    } else {
                        log::debug!("stale staff list response #{} dropped", seq);
                    }
                }
                Err(e) => this.load_failed(format!("Ошибка загрузки сотрудников: {}", e)),
            }
        });
    }

    fn fetch_positions(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_positions().await {
                Ok(list) => {
                    log::debug!("position catalog loaded: {} entries", list.len());
                    this.positions.set(list);
                }
                Err(e) => this.load_failed(format!("Ошибка загрузки позиций: {}", e)),
            }
        });
    }

    pub fn is_edit_mode(&self) -> bool {
        self.session.with(EditSession::is_edit_mode)
    }

    pub fn visible_items(&self) -> Vec<Staff> {
        let filter = self.department_filter.get();
        self.list
            .with(|state| filter_by_department(&state.items, &filter))
    }

    pub fn filter_options(&self) -> Vec<(String, String)> {
        self.list.with(|state| filter_select_options(&state.items))
    }

    pub fn set_name(&self, value: String) {
        self.session.update(|s| s.draft.name = value);
    }

    pub fn set_department(&self, index: usize, value: String) {
        self.session.update(|s| s.draft.set_department(index, &value));
    }

    pub fn set_position(&self, index: usize, value: String) {
        self.session.update(|s| s.draft.set_position(index, &value));
    }

    pub fn set_experience(&self, raw: String) {
        self.session.update(|s| s.draft.set_experience_input(&raw));
    }

    /// Load a record into the form and bring the form into view
    pub fn begin_edit(&self, staff: Staff) {
        self.session.update(|s| s.begin_edit(&staff));
        self.scroll_form_into_view();
    }

    pub fn cancel_edit(&self) {
        self.session.update(EditSession::cancel);
    }

    fn scroll_form_into_view(&self) {
        let Some(header) = self.form_ref.get_untracked() else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        header.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn load_failed(&self, message: String) {
        log::error!("{}", message);
        self.load_error.set(Some(message));
    }

    fn save_failed(&self, message: String) {
        log::error!("{}", message);
        self.session.update(|s| s.on_failed(message));
    }

    /// Validate the draft and send it as create or update
    pub fn save_command(&self) {
        if self.is_saving.get_untracked() {
            return;
        }

        let command = match self.session.with_untracked(EditSession::submit) {
            Ok(c) => c,
            Err(msg) => {
                self.session.update(|s| s.on_failed(msg.to_string()));
                return;
            }
        };

        self.is_saving.set(true);
        self.session.update(|s| s.save_error = None);

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match &command {
                SubmitCommand::Create(dto) => match api::create_staff(dto).await {
                    Ok(created) => {
                        log::info!("staff created: {:?}", created.id);
                        this.list.update(|state| state.apply_created(created));
                        this.session.update(|s| s.on_saved(&command));
                    }
                    Err(e) => this.save_failed(format!("Ошибка создания: {}", e)),
                },
                SubmitCommand::Update(dto) => match api::update_staff(dto).await {
                    Ok(()) => {
                        log::info!("staff updated: {:?}", dto.id);
                        this.session.update(|s| s.on_saved(&command));
                        this.fetch_list();
                    }
                    Err(e) => this.save_failed(format!("Ошибка сохранения: {}", e)),
                },
            }
            this.is_saving.set(false);
        });
    }
}
