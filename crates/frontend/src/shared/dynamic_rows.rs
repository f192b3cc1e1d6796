//! Multi-value form fields that grow one row at a time.
//!
//! A row list always ends with exactly one blank "sentinel" row. Typing a
//! value into that last row appends a fresh sentinel, so the user can keep
//! adding entries. Rows are never removed while editing; blanks are dropped
//! only when the list is cleaned before saving.

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Persisted values plus the trailing sentinel row
pub fn with_sentinel(values: &[String]) -> Vec<String> {
    let mut rows = Vec::with_capacity(values.len() + 1);
    rows.extend(values.iter().cloned());
    rows.push(String::new());
    rows
}

/// Set `rows[index]` to `value`.
///
/// When the edited row is the last one and the new value is not blank,
/// a new empty row is appended. Out-of-range indexes leave the list as is.
pub fn edit_row(rows: &[String], index: usize, value: &str) -> Vec<String> {
    let mut next = rows.to_vec();
    let Some(slot) = next.get_mut(index) else {
        return next;
    };
    *slot = value.to_string();

    if index + 1 == rows.len() && !is_blank(value) {
        next.push(String::new());
    }
    next
}

/// Trim every row and drop the blank ones (free-text fields)
pub fn clean_trimmed(rows: &[String]) -> Vec<String> {
    rows.iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop blank rows, keeping the other values untouched (select fields)
pub fn clean_blank(rows: &[String]) -> Vec<String> {
    rows.iter().filter(|r| !is_blank(r)).cloned().collect()
}
