use crate::shared::list_utils::SortSpec;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectListState {
    pub sort: Option<SortSpec>,
    pub search: String,
}

impl Default for ProjectListState {
    fn default() -> Self {
        Self {
            sort: Some(SortSpec::asc("projectName")),
            search: String::new(),
        }
    }
}

pub fn create_state() -> RwSignal<ProjectListState> {
    RwSignal::new(ProjectListState::default())
}
