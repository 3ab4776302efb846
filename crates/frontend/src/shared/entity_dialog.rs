//! Modal create/edit dialog for every [`EntityForm`] kind.

use crate::shared::entity_form::{EntityForm, FieldError, FieldKind, FormField};
use crate::shared::metadata_cache::use_metadata;
use crate::shared::notify::use_notifications;
use crate::system::auth::context::use_auth;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Date => "date",
        _ => "text",
    }
}

/// Renders one form control bound to `form[field.key]`.
fn field_control(form: RwSignal<EntityForm>, field: FormField) -> AnyView {
    let key = field.key;
    let value = move || form.with(|f| f.get_field(key).to_string());
    let on_input = move |ev: ev::Event| {
        let next = event_target_value(&ev);
        form.update(|f| {
            f.set_field(key, &next);
        });
    };

    match field.kind {
        FieldKind::TextArea => view! {
            <textarea id=key rows="3" prop:value=value on:input=on_input></textarea>
        }
        .into_any(),
        FieldKind::Reference(entity) => {
            let options = use_metadata().options(entity);
            view! {
                <select id=key prop:value=value on:change=on_input>
                    <option value="">{format!("Select {}", entity.label().to_lowercase())}</option>
                    <For
                        each=move || options.get()
                        key=|item| item.id.clone()
                        children=move |item| {
                            view! { <option value=item.id.clone()>{item.name.clone()}</option> }
                        }
                    />
                </select>
            }
            .into_any()
        }
        FieldKind::Choice(choices) => view! {
            <select id=key prop:value=value on:change=on_input>
                <option value="">"Select…"</option>
                {choices
                    .iter()
                    .map(|(v, label)| view! { <option value=*v>{*label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                id=key
                type=input_type(kind)
                inputmode=if kind == FieldKind::Number { "decimal" } else { "text" }
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    }
}

#[component]
pub fn EntityDialog(
    /// Initial form; a draft with an id edits, without one creates.
    initial: EntityForm,
    on_close: Callback<()>,
    /// Receives the entity returned by the backend.
    on_saved: Callback<Value>,
) -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();

    let fields = initial.fields();
    let title = initial.title();
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let saving = RwSignal::new(false);

    let error_for = move |key: &'static str| {
        move || {
            errors.with(|errs| {
                errs.iter()
                    .find(|e| e.key == key)
                    .map(|e| view! { <div class="form-group__error">{e.message.clone()}</div> })
            })
        }
    };

    let save = move |_: ev::MouseEvent| {
        if saving.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        let issues = current.validate_required();
        if !issues.is_empty() {
            errors.set(issues);
            return;
        }
        errors.set(Vec::new());

        let privileges = auth.with_untracked(|a| a.privileges.clone());
        saving.set(true);
        spawn_local(async move {
            let result = current.submit(&privileges).await;
            saving.set(false);
            let label = current.kind().label();
            match result {
                Ok(saved) => {
                    notifications.success(format!("{} saved", label));
                    on_saved.run(saved);
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Failed to save {}: {}", label.to_lowercase(), e);
                    notifications.error(e.user_message(&format!(
                        "Failed to save {}",
                        label.to_lowercase()
                    )));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal entity-dialog" role="dialog" aria-modal="true">
                <div class="details-header">
                    <h3>{title}</h3>
                </div>

                <div class="details-form">
                    {fields
                        .iter()
                        .map(|field| {
                            let field = *field;
                            view! {
                                <div class="form-group">
                                    <label for=field.key>
                                        {field.label}
                                        {field.required.then(|| view! { <span class="form-group__required">" *"</span> })}
                                    </label>
                                    {field_control(form, field)}
                                    {error_for(field.key)}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get())
                        on_click=save
                    >
                        {move || if saving.get() { "Saving…" } else { "Save" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                </div>
            </div>
        </div>
    }
}
