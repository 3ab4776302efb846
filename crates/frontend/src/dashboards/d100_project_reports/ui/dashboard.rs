use super::report_table::ReportTable;
use crate::dashboards::d100_project_reports::api;
use crate::dashboards::d100_project_reports::model::{
    budget_matrix, ReportData, DEPARTMENT_COLUMNS, DETAIL_COLUMNS,
};
use crate::shared::charts::{BarChart, BarLayout, DonutChart};
use crate::shared::components::{FilterField, FilterPanel, ViewStateBlock};
use crate::shared::entity_form::PROJECT_STATUSES;
use crate::shared::filter_state::FilterState;
use crate::shared::icons::icon;
use crate::shared::metadata_cache::use_metadata;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::report_fetcher::{RequestTracker, ViewState};
use contracts::dashboards::d100_project_reports::ReportKind;
use contracts::shared::metadata::MetadataEntity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const LOAD_ERROR: &str = "Failed to load project report data";

const FILTER_FIELDS: &[FilterField] = &[
    FilterField::metadata("departmentId", MetadataEntity::Departments),
    FilterField::metadata("countyId", MetadataEntity::Counties),
    FilterField::metadata("subcountyId", MetadataEntity::Subcounties),
    FilterField::metadata("wardId", MetadataEntity::Wards),
    FilterField::metadata("financialYearId", MetadataEntity::FinancialYears),
    FilterField::metadata("categoryId", MetadataEntity::Categories),
    FilterField::fixed("status", "Status", PROJECT_STATUSES),
];

#[component]
fn ReportCard(kind: ReportKind, #[prop(optional)] wide: bool, children: Children) -> impl IntoView {
    let class = if wide {
        "report-card report-card--wide"
    } else {
        "report-card"
    };
    view! {
        <section class=class>
            <h3 class="report-card__title">{kind.title()}</h3>
            <div class="report-card__body">{children()}</div>
        </section>
    }
}

fn render_reports(data: ReportData) -> impl IntoView {
    let by_year = data.status_by_year;
    let budget = budget_matrix(&data.budget);

    view! {
        <div class="report-grid">
            <ReportCard kind=ReportKind::StatusSummary>
                <DonutChart slices=data.status />
            </ReportCard>
            <ReportCard kind=ReportKind::StatusByYear>
                <BarChart
                    categories=by_year.categories
                    series=by_year.series
                    values=by_year.values
                    layout=BarLayout::Stacked
                />
            </ReportCard>
            <ReportCard kind=ReportKind::BudgetByFinancialYear wide=true>
                <BarChart
                    categories=budget.categories
                    series=budget.series
                    values=budget.values
                    layout=BarLayout::Grouped
                    decimals=2
                />
            </ReportCard>
            <ReportCard kind=ReportKind::ProjectsByDepartment wide=true>
                <ReportTable columns=&DEPARTMENT_COLUMNS rows=data.departments />
            </ReportCard>
            <ReportCard kind=ReportKind::ProjectDetails wide=true>
                <ReportTable columns=&DETAIL_COLUMNS rows=data.details />
            </ReportCard>
        </div>
    }
}

/// Project reports dashboard: shared filters over five report views.
#[component]
pub fn ProjectReportsDashboard() -> impl IntoView {
    let metadata = use_metadata();
    let filters = RwSignal::new(FilterState::new());
    let state = RwSignal::new(ViewState::<ReportData>::Idle);
    let tracker = StoredValue::new(RequestTracker::new());

    // Reload whenever the filter snapshot changes; only the newest load may
    // write the view state.
    Effect::new(move |_| {
        let snapshot = filters.get();
        let token = tracker.with_value(|t| t.issue());
        state.set(ViewState::Loading);

        spawn_local(async move {
            let result = api::load_reports(&snapshot).await;
            if !tracker.with_value(|t| t.is_current(token)) {
                log::debug!("Discarding stale report response {:?}", token);
                return;
            }
            state.set(ViewState::settle(result, LOAD_ERROR, ReportData::is_empty));
        });
    });

    view! {
        <PageFrame page_id="d100_project_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("chart")}
                    <h1 class="page__title">"Project reports"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || state.with(|s| s.is_loading()))
                        on_click=move |_| filters.update(|_| {})
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel filters=filters fields=FILTER_FIELDS metadata=metadata />
                <ViewStateBlock
                    state=state
                    render=render_reports
                    empty_text="No projects match the selected filters."
                />
            </div>
        </PageFrame>
    }
}
