use contracts::domain::a001_staff::aggregate::Staff;

/// Loaded staff records plus the sequence number of the latest list request.
///
/// Only the response to the latest request may replace `items`; any local
/// change to the list invalidates requests that are still in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffListState {
    pub items: Vec<Staff>,
    seq: u64,
}

impl StaffListState {
    /// Register a new list request and return its sequence number
    pub fn begin_fetch(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Apply a list response; returns false when the response is stale
    pub fn apply_fetched(&mut self, seq: u64, list: Vec<Staff>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.items = list;
        true
    }

    /// Append the record returned by create
    pub fn apply_created(&mut self, created: Staff) {
        self.seq += 1;
        self.items.push(created);
    }
}

/// Records that belong to `department`; an empty filter keeps everything
pub fn filter_by_department(items: &[Staff], department: &str) -> Vec<Staff> {
    if department.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|s| s.has_department(department))
        .cloned()
        .collect()
}

/// Distinct departments of the loaded records, in first-seen order
pub fn department_options(items: &[Staff]) -> Vec<String> {
    let mut departments: Vec<String> = Vec::new();
    for department in items.iter().flat_map(|s| s.departments.iter()) {
        if department.trim().is_empty() || departments.contains(department) {
            continue;
        }
        departments.push(department.clone());
    }
    departments
}

/// Filter select options with the leading "all" entry
pub fn filter_select_options(items: &[Staff]) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Все отделения".to_string())];
    options.extend(department_options(items).into_iter().map(|d| (d.clone(), d)));
    options
}
