use crate::dashboards::d100_project_reports::model::cell_text;
use crate::shared::column_visibility::{ColumnAlign, ColumnDef};
use crate::shared::components::SortableHeaderCell;
use crate::shared::list_utils::{sort_rows, SortSpec};
use contracts::shared::report::Row;
use leptos::prelude::*;
use thaw::*;

/// Read-only report table with client-side sorting.
#[component]
pub fn ReportTable(columns: &'static [ColumnDef], rows: Vec<Row>) -> impl IntoView {
    let sort = RwSignal::new(None::<SortSpec>);
    let source = StoredValue::new(rows);

    let sorted = Memo::new(move |_| {
        let spec = sort.get();
        source.with_value(|rows| match spec {
            Some(spec) => sort_rows(rows, &spec),
            None => rows.clone(),
        })
    });

    let on_sort = Callback::new(move |column: &'static str| {
        sort.update(|current| *current = Some(SortSpec::toggle(current.as_ref(), column)));
    });

    view! {
        <div class="table-wrapper">
            <Table>
                <TableHeader>
                    <TableRow>
                        {columns
                            .iter()
                            .map(|column| view! { <SortableHeaderCell column=column sort=sort on_sort=on_sort /> })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        sorted
                            .get()
                            .into_iter()
                            .map(|row| {
                                columns
                                    .iter()
                                    .map(|column| {
                                        let text = cell_text(column.id, row.get(column.id));
                                        let class = match column.align {
                                            ColumnAlign::Right => "table__cell--right",
                                            ColumnAlign::Left => "",
                                        };
                                        view! {
                                            <TableCell class=class>
                                                <TableCellLayout truncate=true>{text}</TableCellLayout>
                                            </TableCell>
                                        }
                                    })
                                    .collect_view()
                            })
                            .map(|cells| view! { <TableRow>{cells}</TableRow> })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
