use crate::shared::report_fetcher::ViewState;
use leptos::prelude::*;
use thaw::*;

/// Loading / error / empty / content switch for one data-driven view.
#[component]
pub fn ViewStateBlock<T, F, V>(
    #[prop(into)] state: Signal<ViewState<T>>,
    /// Renders the loaded data
    render: F,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let empty_text = empty_text.unwrap_or_else(|| "No data for the selected filters.".to_string());

    move || match state.get() {
        ViewState::Idle | ViewState::Loading => view! {
            <div class="view-state view-state--loading">
                <span class="view-state__spinner"></span>
                <span>"Loading…"</span>
            </div>
        }
        .into_any(),
        ViewState::Failed(message) => view! {
            <MessageBar intent=MessageBarIntent::Error>
                <div class="view-state view-state--error">{message}</div>
            </MessageBar>
        }
        .into_any(),
        ViewState::Empty => view! {
            <div class="view-state view-state--empty">{empty_text.clone()}</div>
        }
        .into_any(),
        ViewState::Ready(data) => render(data).into_any(),
    }
}
