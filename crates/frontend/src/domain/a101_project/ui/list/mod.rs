pub mod columns;
pub mod state;

use self::columns::{ProjectRow, PROJECT_COLUMNS};
use self::state::{create_state, ProjectListState};
use crate::domain::a101_project::api;
use crate::shared::column_visibility::{ColumnAlign, ColumnVisibility, ToggleOutcome};
use crate::shared::components::{ColumnPicker, SortableHeaderCell, ViewStateBlock};
use crate::shared::config::config;
use crate::shared::entity_dialog::EntityDialog;
use crate::shared::entity_form::{EntityDraft, EntityForm, EntityKind};
use crate::shared::icons::icon;
use crate::shared::kv_store::LocalStorageStore;
use crate::shared::list_utils::{filter_list, sort_rows, SortSpec};
use crate::shared::notify::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::report_fetcher::{RequestTracker, ViewState};
use crate::system::auth::context::use_auth;
use crate::system::auth::privileges::PROJECT_DELETE;
use contracts::domain::a101_project::ProjectPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const LOAD_ERROR: &str = "Failed to load projects";

#[component]
fn ProjectTable(
    rows: Vec<ProjectRow>,
    list_state: RwSignal<ProjectListState>,
    #[prop(into)] visible: Signal<Vec<String>>,
    on_edit: Callback<ProjectRow>,
    on_delete: Callback<ProjectRow>,
) -> impl IntoView {
    let source = StoredValue::new(rows);

    let shown = Signal::derive(move || {
        let ProjectListState { sort, search } = list_state.get();
        source.with_value(|rows| {
            let found = filter_list(rows, &search);
            match sort {
                Some(spec) => sort_rows(&found, &spec),
                None => found,
            }
        })
    });

    let columns = Memo::new(move |_| {
        visible.with(|ids| {
            PROJECT_COLUMNS
                .iter()
                .filter(|c| ids.iter().any(|id| id == c.id))
                .collect::<Vec<_>>()
        })
    });

    let sort = Signal::derive(move || list_state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |column: &'static str| {
        list_state.update(|s| s.sort = Some(SortSpec::toggle(s.sort.as_ref(), column)));
    });

    view! {
        <div class="table-wrapper">
            <Table>
                <TableHeader>
                    <TableRow>
                        {move || {
                            columns
                                .get()
                                .into_iter()
                                .map(|column| view! { <SortableHeaderCell column=column sort=sort on_sort=on_sort /> })
                                .collect_view()
                        }}
                        <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let columns = columns.get();
                        shown
                            .get()
                            .into_iter()
                            .map(|row| {
                                let cells = columns
                                    .iter()
                                    .map(|column| {
                                        let class = match column.align {
                                            ColumnAlign::Right => "table__cell--right",
                                            ColumnAlign::Left => "",
                                        };
                                        let text = row.cell_text(column.id);
                                        view! {
                                            <TableCell class=class>
                                                <TableCellLayout truncate=true>{text}</TableCellLayout>
                                            </TableCell>
                                        }
                                    })
                                    .collect_view();
                                let for_edit = row.clone();
                                let for_delete = row;
                                view! {
                                    <TableRow>
                                        {cells}
                                        <TableCell>
                                            <div class="table__actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| on_edit.run(for_edit.clone())
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| on_delete.run(for_delete.clone())
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
            <div class="table__footer">
                {move || format!("{} of {}", shown.with(|rows| rows.len()), source.with_value(|rows| rows.len()))}
            </div>
        </div>
    }
}

/// Project register: searchable, sortable table with a persisted column
/// selection and create/edit/delete actions.
#[component]
pub fn ProjectList() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();

    let state = RwSignal::new(ViewState::<Vec<ProjectRow>>::Idle);
    let tracker = StoredValue::new(RequestTracker::new());
    let list_state = create_state();
    let dialog = RwSignal::new(None::<EntityForm>);

    let visibility = StoredValue::new_local(ColumnVisibility::load(
        &PROJECT_COLUMNS,
        Box::new(LocalStorageStore),
        &config().storage.column_visibility_key,
    ));
    let visible = RwSignal::new(visibility.with_value(|v| v.visible_ids().to_vec()));

    let fetch = move || {
        let token = tracker.with_value(|t| t.issue());
        state.set(ViewState::Loading);
        spawn_local(async move {
            let result = api::list_projects()
                .await
                .map(|projects| projects.into_iter().map(ProjectRow::from).collect::<Vec<_>>());
            if !tracker.with_value(|t| t.is_current(token)) {
                log::debug!("Discarding stale project list {:?}", token);
                return;
            }
            state.set(ViewState::settle(result, LOAD_ERROR, Vec::is_empty));
        });
    };

    let on_toggle = Callback::new(move |(column, show): (&'static str, bool)| {
        let mut outcome = ToggleOutcome::Unchanged;
        visibility.update_value(|v| outcome = v.toggle(column, show));
        match outcome {
            ToggleOutcome::Changed => visible.set(visibility.with_value(|v| v.visible_ids().to_vec())),
            ToggleOutcome::RejectedLastColumn => {
                notifications.warning("At least one column must stay visible")
            }
            ToggleOutcome::Unchanged | ToggleOutcome::UnknownColumn => {}
        }
    });

    let on_reset = Callback::new(move |_: ()| {
        visibility.update_value(|v| v.reset_to_defaults());
        visible.set(visibility.with_value(|v| v.visible_ids().to_vec()));
    });

    let on_edit = Callback::new(move |row: ProjectRow| {
        let payload = ProjectPayload::from(&row.source);
        dialog.set(Some(EntityForm::Project(EntityDraft::edit(row.id(), payload))));
    });

    let on_delete = Callback::new(move |row: ProjectRow| {
        let allowed = auth.with_untracked(|a| a.privileges.require(PROJECT_DELETE));
        if let Err(e) = allowed {
            notifications.error(e.user_message("Not allowed to delete projects"));
            return;
        }

        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!(
                    "Delete project \"{}\"?",
                    row.source.project_name
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_project(row.id()).await {
                Ok(()) => {
                    notifications.success("Project deleted");
                    fetch();
                }
                Err(e) => {
                    log::error!("Failed to delete project {}: {}", row.id(), e);
                    notifications.error(e.user_message("Failed to delete project"));
                }
            }
        });
    });

    fetch();

    view! {
        <PageFrame page_id="a101_project--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("projects")}
                    <h1 class="page__title">"Projects"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dialog.set(Some(EntityForm::blank(EntityKind::Project)))
                    >
                        {icon("plus")}
                        " New project"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || state.with(|s| s.is_loading()))
                        on_click=move |_| fetch()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <div class="list-toolbar__search">
                        {icon("search")}
                        <input
                            type="search"
                            placeholder="Search projects (3+ characters)"
                            prop:value=move || list_state.with(|s| s.search.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                list_state.update(|s| s.search = text);
                            }
                        />
                    </div>
                    <ColumnPicker
                        columns=&PROJECT_COLUMNS
                        visible=visible
                        on_toggle=on_toggle
                        on_reset=on_reset
                    />
                </div>

                <ViewStateBlock
                    state=state
                    render={move |rows: Vec<ProjectRow>| {
                        view! {
                            <ProjectTable
                                rows=rows
                                list_state=list_state
                                visible=visible
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    }}
                    empty_text="No projects yet."
                />
            </div>

            {move || {
                dialog
                    .get()
                    .map(|form| {
                        view! {
                            <EntityDialog
                                initial=form
                                on_close=Callback::new(move |_| dialog.set(None))
                                on_saved=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
        </PageFrame>
    }
}
