//! Page categories and ids.
//!
//! Every page root carries an `id` of the form `{module}--{category}`
//! (e.g. `"a101_project--list"`) and a `data-page-category` attribute, so a
//! DOM id pasted into a code search lands in the right module.

/// Table of records with search and column picker.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard (charts and report tables).
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD];

/// `{module}--{category}` with both parts non-empty and a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((module, category)) => !module.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("d100_project_reports--dashboard"));
        assert!(is_valid_page_id("a101_project--list"));
        assert!(!is_valid_page_id("a101_project"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a101_project--detail"));
    }
}
