//! PageFrame — standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a001_staff--list"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_staff/` directory.

use leptos::prelude::*;

/// List of records with filters and an inline edit form.
pub const PAGE_CAT_LIST: &str = "list";

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_staff--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class="page"
            data-page-category=category
        >
            {children()}
        </div>
    }
}
