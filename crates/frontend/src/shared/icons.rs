use leptos::prelude::*;

/// Stroke paths (24×24 grid) for each icon name.
fn paths(name: &str) -> &'static [&'static str] {
    match name {
        "filter" => &["M22 3H2l8 9.46V19l4 2v-8.54L22 3z"],
        "chevron-down" => &["M6 9l6 6 6-6"],
        "x" => &["M18 6L6 18", "M6 6l12 12"],
        "columns" => &["M3 3h18v18H3z", "M9 3v18", "M15 3v18"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "edit" => &[
            "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
            "M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z",
        ],
        "trash" => &[
            "M3 6h18",
            "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6",
            "M10 11v6",
            "M14 11v6",
            "M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2",
        ],
        "refresh" => &["M23 4v6h-6", "M20.49 15a9 9 0 1 1-2.12-9.36L23 10"],
        "chart" => &["M18 20V10", "M12 20V4", "M6 20v-6"],
        "projects" => &[
            "M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z",
        ],
        "search" => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35"],
        _ => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let size = match name {
        "chevron-down" | "x" => "14",
        _ => "16",
    };
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(name).iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
