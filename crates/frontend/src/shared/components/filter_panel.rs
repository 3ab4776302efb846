use crate::shared::filter_state::FilterState;
use crate::shared::icons::icon;
use crate::shared::metadata_cache::MetadataContext;
use contracts::shared::metadata::{MetadataEntity, RefItem};
use leptos::prelude::*;

/// One dropdown in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    /// Query parameter name, e.g. `departmentId`
    pub key: &'static str,
    pub label: &'static str,
    pub source: FilterSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    Metadata(MetadataEntity),
    Fixed(&'static [(&'static str, &'static str)]),
}

impl FilterField {
    pub const fn metadata(key: &'static str, entity: MetadataEntity) -> Self {
        Self {
            key,
            label: "",
            source: FilterSource::Metadata(entity),
        }
    }

    pub const fn fixed(
        key: &'static str,
        label: &'static str,
        options: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            key,
            label,
            source: FilterSource::Fixed(options),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.source {
            FilterSource::Metadata(entity) if self.label.is_empty() => entity.label(),
            _ => self.label,
        }
    }

    /// Display text for a selected value: the metadata name when known.
    pub fn value_label(&self, metadata: &MetadataContext, value: &str) -> String {
        match self.source {
            FilterSource::Metadata(entity) => metadata.label(entity, value),
            FilterSource::Fixed(options) => options
                .iter()
                .find(|(v, _)| *v == value)
                .map(|(_, label)| label.to_string())
                .unwrap_or_else(|| value.to_string()),
        }
    }
}

/// Chip text for every active filter, in field order.
pub fn active_chips(
    fields: &[FilterField],
    state: &FilterState,
    label_of: impl Fn(&FilterField, &str) -> String,
) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .filter_map(|field| {
            let value = state.get(field.key)?;
            if value.is_empty() {
                return None;
            }
            let text = value
                .values()
                .into_iter()
                .filter(|v| !v.trim().is_empty())
                .map(|v| label_of(field, v))
                .collect::<Vec<_>>()
                .join(", ");
            Some((field.key, format!("{}: {}", field.title(), text)))
        })
        .collect()
}

/// Collapsible panel of dropdown filters with active-filter chips.
///
/// Every change produces a new [`FilterState`] in `filters`; views that
/// depend on it refetch on their own.
#[component]
pub fn FilterPanel(
    filters: RwSignal<FilterState>,
    fields: &'static [FilterField],
    metadata: MetadataContext,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);
    let active_count = Signal::derive(move || filters.with(|f| f.active_count()));
    let title = title.unwrap_or_else(|| "Filters".to_string());

    let dropdown = move |field: FilterField| {
        let key = field.key;
        let options: Signal<Vec<RefItem>> = match field.source {
            FilterSource::Metadata(entity) => metadata.options(entity),
            FilterSource::Fixed(options) => Signal::derive(move || {
                options
                    .iter()
                    .map(|(id, name)| RefItem::new(*id, *name))
                    .collect()
            }),
        };
        view! {
            <div class="filter-panel__field">
                <label for=format!("filter-{}", key)>{field.title()}</label>
                <select
                    id=format!("filter-{}", key)
                    prop:value=move || filters.with(|f| f.get_str(key).to_string())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| {
                            *f = if value.is_empty() { f.without(key) } else { f.change(key, value) };
                        });
                    }
                >
                    <option value="">"All"</option>
                    <For
                        each=move || options.get()
                        key=|item| item.id.clone()
                        children=move |item| {
                            view! { <option value=item.id.clone()>{item.name.clone()}</option> }
                        }
                    />
                </select>
            </div>
        }
    };

    let chips = move || {
        // relabel once metadata arrives
        metadata.bag.track();
        let current = filters.get();
        active_chips(fields, &current, |field, value| field.value_label(&metadata, value))
            .into_iter()
            .map(|(key, label)| {
                view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| filters.update(|f| *f = f.without(key)))
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">{title}</span>
                    <Show when=move || { active_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_count.get()}</span>
                    </Show>
                </div>
                <Show when=move || { active_count.get() > 0 }>
                    <button
                        class="filter-panel__clear"
                        on:click=move |_| filters.update(|f| *f = f.clear())
                    >
                        "Clear all"
                    </button>
                </Show>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {fields.iter().map(|f| dropdown(*f)).collect_view()}
                </div>
                <div class="filter-panel__tags">{chips}</div>
            </div>
        </div>
    }
}

/// Removable chip for one active filter.
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
