use contracts::domain::a001_staff::aggregate::{Staff, StaffDto};
use contracts::domain::a002_position::aggregate::PositionOption;

use crate::shared::dynamic_rows::{clean_blank, clean_trimmed, edit_row, with_sentinel};

/// Form state of the staff editor.
///
/// `departments` and `available_positions` always end with one blank
/// sentinel row (see [`crate::shared::dynamic_rows`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffDraft {
    pub name: String,
    pub departments: Vec<String>,
    pub available_positions: Vec<String>,
    pub experience: u32,
}

impl Default for StaffDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            departments: with_sentinel(&[]),
            available_positions: with_sentinel(&[]),
            experience: 0,
        }
    }
}

impl StaffDraft {
    /// Draft for editing an existing record
    pub fn from_staff(staff: &Staff) -> Self {
        Self {
            name: staff.name.clone(),
            departments: with_sentinel(&staff.departments),
            available_positions: with_sentinel(&staff.available_positions),
            experience: staff.experience,
        }
    }

    pub fn set_department(&mut self, index: usize, value: &str) {
        self.departments = edit_row(&self.departments, index, value);
    }

    pub fn set_position(&mut self, index: usize, value: &str) {
        self.available_positions = edit_row(&self.available_positions, index, value);
    }

    pub fn set_experience_input(&mut self, raw: &str) {
        self.experience = parse_experience(raw);
    }

    /// Payload with sentinel and blank rows removed
    pub fn to_dto(&self, id: Option<String>) -> StaffDto {
        StaffDto {
            id,
            name: self.name.clone(),
            departments: clean_trimmed(&self.departments),
            available_positions: clean_blank(&self.available_positions),
            experience: self.experience,
        }
    }
}

/// What a submit should send to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitCommand {
    Create(StaffDto),
    Update(StaffDto),
}

/// Choose create or update from the id being edited and build the payload
pub fn build_submit(
    draft: &StaffDraft,
    editing_id: Option<&str>,
) -> Result<SubmitCommand, &'static str> {
    let dto = draft.to_dto(editing_id.map(str::to_string));
    dto.validate()?;
    Ok(match editing_id {
        Some(_) => SubmitCommand::Update(dto),
        None => SubmitCommand::Create(dto),
    })
}

/// The form: draft, the id being edited and the error of the last save
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    pub draft: StaffDraft,
    /// Id of the record being edited, `None` while creating
    pub editing_id: Option<String>,
    pub save_error: Option<String>,
}

impl EditSession {
    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Load a record into the form
    pub fn begin_edit(&mut self, staff: &Staff) {
        self.draft = StaffDraft::from_staff(staff);
        self.editing_id = staff.id.clone();
        self.save_error = None;
    }

    /// Drop the draft without saving
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn submit(&self) -> Result<SubmitCommand, &'static str> {
        build_submit(&self.draft, self.editing_id.as_deref())
    }

    /// Reset the form after `command` succeeded, unless the user has since
    /// switched to another record.
    pub fn on_saved(&mut self, command: &SubmitCommand) {
        let (SubmitCommand::Create(dto) | SubmitCommand::Update(dto)) = command;
        if self.editing_id == dto.id {
            *self = Self::default();
        }
    }

    /// Keep the draft and the editing id so the user can resubmit
    pub fn on_failed(&mut self, message: String) {
        self.save_error = Some(message);
    }
}

/// Coerce the experience input to whole years.
///
/// Empty or unparsable input counts as 0, fractions are truncated.
pub fn parse_experience(raw: &str) -> u32 {
    let raw = raw.trim();
    if let Ok(years) = raw.parse::<u32>() {
        return years;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Options for one position row: a blank choice, then the catalog names.
///
/// A value that is no longer in the catalog is kept so editing a record
/// does not silently drop it.
pub fn position_options(catalog: &[PositionOption], current: &str) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "— выберите позицию —".to_string())];
    for position in catalog {
        if options.iter().any(|(value, _)| value == &position.name) {
            continue;
        }
        options.push((position.name.clone(), position.name.clone()));
    }
    if !current.is_empty() && !options.iter().any(|(value, _)| value == current) {
        options.push((current.to_string(), current.to_string()));
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn position(id: &str, name: &str) -> PositionOption {
        PositionOption {
            id: id.to_string(),
            name: name.to_string(),
            departments: None,
        }
    }

    #[test]
    fn test_empty_draft() {
        let draft = StaffDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.departments, strings(&[""]));
        assert_eq!(draft.available_positions, strings(&[""]));
        assert_eq!(draft.experience, 0);
    }

    #[test]
    fn test_from_staff_appends_sentinel() {
        let staff = Staff {
            id: Some("42".to_string()),
            name: "佐藤".to_string(),
            departments: vec![],
            available_positions: strings(&["採血", "受付"]),
            experience: 7,
        };
        let draft = StaffDraft::from_staff(&staff);
        assert_eq!(draft.departments, strings(&[""]));
        assert_eq!(draft.available_positions, strings(&["採血", "受付", ""]));
        assert_eq!(draft.experience, 7);
    }

    #[test]
    fn test_create_scenario() {
        let mut draft = StaffDraft::default();
        draft.name = "田中".to_string();
        draft.set_department(0, "病理");
        draft.set_position(0, "採血");
        draft.set_experience_input("3");
        assert_eq!(draft.departments, strings(&["病理", ""]));

        let command = build_submit(&draft, None).unwrap();
        assert_eq!(
            command,
            SubmitCommand::Create(StaffDto {
                id: None,
                name: "田中".to_string(),
                departments: strings(&["病理"]),
                available_positions: strings(&["採血"]),
                experience: 3,
            })
        );
    }

    #[test]
    fn test_update_scenario() {
        let staff = Staff {
            id: Some("42".to_string()),
            name: "田中".to_string(),
            departments: strings(&["病理"]),
            available_positions: strings(&["採血"]),
            experience: 3,
        };
        let mut draft = StaffDraft::from_staff(&staff);
        draft.name = "佐藤".to_string();

        match build_submit(&draft, Some("42")).unwrap() {
            SubmitCommand::Update(dto) => {
                assert_eq!(dto.id.as_deref(), Some("42"));
                assert_eq!(dto.name, "佐藤");
                assert_eq!(dto.departments, strings(&["病理"]));
                assert_eq!(dto.available_positions, strings(&["採血"]));
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_cleaning_drops_gaps_and_trims_departments() {
        let mut draft = StaffDraft::default();
        draft.name = "鈴木".to_string();
        draft.departments = strings(&["", " 病理 ", "   ", "検体", ""]);
        draft.available_positions = strings(&["採血", "", "受付", ""]);

        let dto = draft.to_dto(None);
        assert_eq!(dto.departments, strings(&["病理", "検体"]));
        assert_eq!(dto.available_positions, strings(&["採血", "受付"]));
    }

    #[test]
    fn test_submit_requires_name() {
        let draft = StaffDraft::default();
        assert!(build_submit(&draft, None).is_err());
    }

    fn saved_staff(id: &str, name: &str) -> Staff {
        Staff {
            id: Some(id.to_string()),
            name: name.to_string(),
            departments: strings(&["病理"]),
            available_positions: strings(&["採血"]),
            experience: 3,
        }
    }

    #[test]
    fn test_create_success_resets_form() {
        let mut session = EditSession::default();
        session.draft.name = "田中".to_string();
        session.draft.set_department(0, "病理");
        session.draft.set_position(0, "採血");
        session.draft.set_experience_input("3");

        let command = session.submit().unwrap();
        session.on_saved(&command);

        assert_eq!(session, EditSession::default());
        assert_eq!(session.draft.departments, strings(&[""]));
        assert_eq!(session.draft.available_positions, strings(&[""]));
    }

    #[test]
    fn test_update_success_clears_editing_id() {
        let mut session = EditSession::default();
        session.begin_edit(&saved_staff("42", "田中"));
        session.draft.name = "佐藤".to_string();

        let command = session.submit().unwrap();
        assert!(matches!(&command, SubmitCommand::Update(dto) if dto.name == "佐藤"));
        session.on_saved(&command);

        assert_eq!(session.editing_id, None);
        assert!(!session.is_edit_mode());
        assert_eq!(session.draft, StaffDraft::default());
    }

    #[test]
    fn test_failure_keeps_draft_and_editing_id() {
        let mut session = EditSession::default();
        session.begin_edit(&saved_staff("42", "田中"));
        session.draft.name = "佐藤".to_string();
        let before = session.draft.clone();

        session.on_failed("сервер вернул HTTP 500".to_string());

        assert_eq!(session.draft, before);
        assert_eq!(session.editing_id.as_deref(), Some("42"));
        assert_eq!(session.save_error.as_deref(), Some("сервер вернул HTTP 500"));

        // the retried save goes out as the same update
        assert!(matches!(session.submit(), Ok(SubmitCommand::Update(_))));
    }

    #[test]
    fn test_edit_started_during_save_survives_success() {
        let mut session = EditSession::default();
        session.draft.name = "田中".to_string();
        let command = session.submit().unwrap();

        // user picks another row before the create response arrives
        session.begin_edit(&saved_staff("7", "鈴木"));
        session.on_saved(&command);

        assert_eq!(session.editing_id.as_deref(), Some("7"));
        assert_eq!(session.draft.name, "鈴木");
    }

    #[test]
    fn test_begin_edit_clears_save_error_only() {
        let mut session = EditSession::default();
        session.on_failed("Имя обязательно для заполнения".to_string());
        session.begin_edit(&saved_staff("1", "田中"));
        assert_eq!(session.save_error, None);

        session.on_failed("сервер вернул HTTP 500".to_string());
        session.cancel();
        assert_eq!(session, EditSession::default());
    }

    #[test]
    fn test_parse_experience() {
        assert_eq!(parse_experience("12"), 12);
        assert_eq!(parse_experience(" 4 "), 4);
        assert_eq!(parse_experience(""), 0);
        assert_eq!(parse_experience("abc"), 0);
        assert_eq!(parse_experience("-3"), 0);
        assert_eq!(parse_experience("2.9"), 2);
    }

    #[test]
    fn test_position_options() {
        let catalog = vec![position("1", "採血"), position("2", "受付"), position("3", "採血")];

        let options = position_options(&catalog, "");
        let values: Vec<&str> = options.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["", "採血", "受付"]);

        let options = position_options(&catalog, "夜勤");
        assert_eq!(options.last().map(|(v, _)| v.as_str()), Some("夜勤"));
        assert_eq!(options.len(), 4);
    }
}
