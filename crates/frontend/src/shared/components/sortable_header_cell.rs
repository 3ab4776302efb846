//! Sortable table header cell.

use crate::shared::column_visibility::{ColumnAlign, ColumnDef};
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortSpec};
use leptos::prelude::*;
use thaw::*;

/// Header cell that shows the sort indicator (▲▼) for its column and asks
/// for a new sort on click.
#[component]
pub fn SortableHeaderCell(
    column: &'static ColumnDef,
    /// Current sort, `None` while the list is unsorted
    #[prop(into)]
    sort: Signal<Option<SortSpec>>,
    /// Called with the column id
    on_sort: Callback<&'static str>,
) -> impl IntoView {
    let id = column.id;
    let min_width = f64::from(column.min_width);
    let header_style = match column.align {
        ColumnAlign::Right => "cursor: pointer; justify-content: flex-end; padding-right: 12px;",
        ColumnAlign::Left => "cursor: pointer; padding-right: 12px;",
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div class="table__sortable-header" style=header_style on:click=move |_| on_sort.run(id)>
                {column.label}
                <span class=move || sort.with(|s| get_sort_class(s.as_ref(), id))>
                    {move || sort.with(|s| get_sort_indicator(s.as_ref(), id))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
