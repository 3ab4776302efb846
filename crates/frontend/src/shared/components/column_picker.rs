use crate::shared::column_visibility::ColumnDef;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// "Columns" dropdown with one checkbox per configured column.
///
/// The last checked box is disabled; hiding it would leave an empty table.
#[component]
pub fn ColumnPicker(
    columns: &'static [ColumnDef],
    #[prop(into)] visible: Signal<Vec<String>>,
    on_toggle: Callback<(&'static str, bool)>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    let items = columns
        .iter()
        .map(|column| {
            let id = column.id;
            let checked = move || visible.with(|v| v.iter().any(|c| c == id));
            let locked = move || visible.with(|v| v.len() == 1 && v[0] == id);
            view! {
                <label class="column-picker__item">
                    <input
                        type="checkbox"
                        prop:checked=checked
                        disabled=locked
                        on:change=move |ev| on_toggle.run((id, event_target_checked(&ev)))
                    />
                    <span>{column.label}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="column-picker">
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Secondary
                on_click=move |_| open.update(|o| *o = !*o)
            >
                {icon("columns")}
                " Columns"
            </Button>
            <div
                class="column-picker__menu"
                style=move || if open.get() { "display: block;" } else { "display: none;" }
            >
                {items}
                <div class="column-picker__footer">
                    <button class="column-picker__reset" on:click=move |_| on_reset.run(())>
                        "Reset to defaults"
                    </button>
                </div>
            </div>
        </div>
    }
}
