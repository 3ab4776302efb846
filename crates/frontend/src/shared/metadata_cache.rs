//! Reference data for dropdowns, loaded once per dashboard mount.

use crate::shared::api_utils::{self, ApiError};
use contracts::shared::metadata::{MetadataBag, MetadataEntity, RefItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::Arc;

const METADATA_PATH: &str = "/metadata/all";

/// Resolve a metadata request into a shared bag. A failure is logged and
/// turns into an empty bag; dropdowns then simply have no options.
pub async fn load_all_with<F>(request: F) -> Arc<MetadataBag>
where
    F: Future<Output = Result<MetadataBag, ApiError>>,
{
    match request.await {
        Ok(bag) => Arc::new(bag),
        Err(e) => {
            log::error!("Failed to load metadata: {}", e);
            Arc::new(MetadataBag::default())
        }
    }
}

/// `GET /metadata/all`
pub async fn load_all() -> Arc<MetadataBag> {
    load_all_with(api_utils::get::<MetadataBag>(METADATA_PATH)).await
}

/// Metadata shared through context. Views read it, nobody mutates it.
#[derive(Clone, Copy)]
pub struct MetadataContext {
    pub bag: RwSignal<Arc<MetadataBag>>,
    pub loaded: RwSignal<bool>,
}

impl MetadataContext {
    pub fn options(&self, entity: MetadataEntity) -> Signal<Vec<RefItem>> {
        let bag = self.bag;
        Signal::derive(move || bag.with(|b| b.items(entity).to_vec()))
    }

    /// Display label for an id, the id itself when unknown.
    pub fn label(&self, entity: MetadataEntity, id: &str) -> String {
        self.bag.with_untracked(|b| {
            b.label_for(entity, id)
                .map(str::to_string)
                .unwrap_or_else(|| id.to_string())
        })
    }
}

/// Provide [`MetadataContext`] and start the one-shot load.
pub fn provide_metadata() -> MetadataContext {
    let ctx = MetadataContext {
        bag: RwSignal::new(Arc::new(MetadataBag::default())),
        loaded: RwSignal::new(false),
    };
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        if started.get_value() {
            return;
        }
        started.set_value(true);
        spawn_local(async move {
            let bag = load_all().await;
            ctx.bag.set(bag);
            ctx.loaded.set(true);
        });
    });

    provide_context(ctx);
    ctx
}

pub fn use_metadata() -> MetadataContext {
    use_context::<MetadataContext>().expect("MetadataContext not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;

    #[test]
    fn test_failure_yields_empty_bag() {
        let bag = block_on(load_all_with(ready(Err(ApiError::Network(
            "connection refused".into(),
        )))));
        assert!(bag.is_empty());
        assert!(bag.items(MetadataEntity::Departments).is_empty());
    }

    #[test]
    fn test_success_is_shared_as_is() {
        let source = MetadataBag {
            counties: vec![RefItem::new("22", "Kiambu")],
            ..Default::default()
        };
        let bag = block_on(load_all_with(ready(Ok(source.clone()))));
        assert_eq!(*bag, source);
        let shared = Arc::clone(&bag);
        assert_eq!(shared.label_for(MetadataEntity::Counties, "22"), Some("Kiambu"));
    }
}
