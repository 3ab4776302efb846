//! PageFrame: root wrapper for every page.

use super::page_standard::{is_valid_page_id, PAGE_CAT_DASHBOARD};
use leptos::prelude::*;

/// Sets `id` and `data-page-category` on the page root.
///
/// Dashboards get the `page--dashboard` modifier; lists use the plain
/// `page` class.
#[component]
pub fn PageFrame(
    /// `{module}--{category}`, e.g. `"a101_project--list"`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("Page id '{}' does not follow {{module}}--{{category}}", page_id);
    }

    let class = if category == PAGE_CAT_DASHBOARD {
        "page page--dashboard"
    } else {
        "page"
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
