//! Application shell: context providers, section navigation and the
//! quick-create menu.

use crate::dashboards::ProjectReportsDashboard;
use crate::domain::a101_project::ui::ProjectList;
use crate::shared::entity_dialog::EntityDialog;
use crate::shared::entity_form::{EntityForm, EntityKind};
use crate::shared::icons::icon;
use crate::shared::metadata_cache::provide_metadata;
use crate::shared::notify::{NotificationService, ToastHost};
use crate::system::auth::context::{use_auth, AuthProvider};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Reports,
    Projects,
}

impl Section {
    const ALL: [Section; 2] = [Section::Reports, Section::Projects];

    fn title(self) -> &'static str {
        match self {
            Section::Reports => "Reports",
            Section::Projects => "Projects",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Section::Reports => "chart",
            Section::Projects => "projects",
        }
    }
}

/// Entities created from the header; projects have their own page.
const QUICK_CREATE: [EntityKind; 3] = [
    EntityKind::Employee,
    EntityKind::LeaveRequest,
    EntityKind::StrategicPlan,
];

#[component]
fn CreateMenu(on_pick: Callback<EntityKind>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="create-menu">
            <button class="create-menu__toggle" on:click=move |_| open.update(|o| *o = !*o)>
                {icon("plus")}
                " New…"
            </button>
            <Show when=move || open.get()>
                <ul class="create-menu__list">
                    {QUICK_CREATE
                        .iter()
                        .map(|&kind| {
                            view! {
                                <li>
                                    <button on:click=move |_| {
                                        open.set(false);
                                        on_pick.run(kind);
                                    }>{kind.label()}</button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let auth = use_auth();
    let active = RwSignal::new(Section::Reports);
    let dialog = RwSignal::new(None::<EntityForm>);

    let user_name = move || {
        auth.with(|a| match (&a.user, a.loaded) {
            (Some(user), _) => user.display_name().to_string(),
            (None, true) => "Guest (read-only)".to_string(),
            (None, false) => String::new(),
        })
    };

    view! {
        <div class="app">
            <header class="app__header">
                <span class="app__brand">"Development Projects"</span>
                <nav class="app__nav">
                    {Section::ALL
                        .iter()
                        .map(|&section| {
                            view! {
                                <button
                                    class="app__nav-item"
                                    class:app__nav-item--active=move || active.get() == section
                                    on:click=move |_| active.set(section)
                                >
                                    {icon(section.icon())}
                                    {section.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <CreateMenu on_pick=Callback::new(move |kind| dialog.set(Some(EntityForm::blank(kind)))) />
                <span class="app__user">{user_name}</span>
            </header>

            <main class="app__main">
                {move || match active.get() {
                    Section::Reports => view! { <ProjectReportsDashboard /> }.into_any(),
                    Section::Projects => view! { <ProjectList /> }.into_any(),
                }}
            </main>

            {move || {
                dialog
                    .get()
                    .map(|form| {
                        view! {
                            <EntityDialog
                                initial=form
                                on_close=Callback::new(move |_| dialog.set(None))
                                on_saved=Callback::new(|saved: serde_json::Value| log::debug!("Created {}", saved))
                            />
                        }
                    })
            }}

            <ToastHost />
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(NotificationService::new());
    provide_metadata();

    view! {
        <AuthProvider>
            <MainLayout />
        </AuthProvider>
    }
}
