//! Reference data used by filter dropdowns and form selects.
//!
//! The backend returns everything in one bag from `GET /metadata/all`.
//! Every list is optional on the wire: a missing key deserializes to an
//! empty list so dependent dropdowns simply render no options.

use super::serde_utils::string_or_number;
use serde::{Deserialize, Serialize};

/// Single `{id, name}` reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefItem {
    /// Ids arrive as numbers for most tables and as strings for a few
    /// (financial years like `"2023/2024"`), both are kept as text.
    #[serde(deserialize_with = "string_or_number", default)]
    pub id: String,
    #[serde(alias = "label", alias = "title", default)]
    pub name: String,
}

impl RefItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Reference entity kinds carried by [`MetadataBag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataEntity {
    Departments,
    Counties,
    Subcounties,
    Wards,
    FinancialYears,
    Programs,
    SubPrograms,
    Categories,
}

impl MetadataEntity {
    pub const ALL: [MetadataEntity; 8] = [
        MetadataEntity::Departments,
        MetadataEntity::Counties,
        MetadataEntity::Subcounties,
        MetadataEntity::Wards,
        MetadataEntity::FinancialYears,
        MetadataEntity::Programs,
        MetadataEntity::SubPrograms,
        MetadataEntity::Categories,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetadataEntity::Departments => "Department",
            MetadataEntity::Counties => "County",
            MetadataEntity::Subcounties => "Sub-county",
            MetadataEntity::Wards => "Ward",
            MetadataEntity::FinancialYears => "Financial year",
            MetadataEntity::Programs => "Program",
            MetadataEntity::SubPrograms => "Sub-program",
            MetadataEntity::Categories => "Category",
        }
    }
}

/// Read-only bag of reference lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataBag {
    #[serde(default)]
    pub departments: Vec<RefItem>,
    #[serde(default)]
    pub counties: Vec<RefItem>,
    #[serde(default)]
    pub subcounties: Vec<RefItem>,
    #[serde(default)]
    pub wards: Vec<RefItem>,
    #[serde(default)]
    pub financial_years: Vec<RefItem>,
    #[serde(default)]
    pub programs: Vec<RefItem>,
    #[serde(default)]
    pub sub_programs: Vec<RefItem>,
    #[serde(default)]
    pub categories: Vec<RefItem>,
}

impl MetadataBag {
    pub fn items(&self, entity: MetadataEntity) -> &[RefItem] {
        match entity {
            MetadataEntity::Departments => &self.departments,
            MetadataEntity::Counties => &self.counties,
            MetadataEntity::Subcounties => &self.subcounties,
            MetadataEntity::Wards => &self.wards,
            MetadataEntity::FinancialYears => &self.financial_years,
            MetadataEntity::Programs => &self.programs,
            MetadataEntity::SubPrograms => &self.sub_programs,
            MetadataEntity::Categories => &self.categories,
        }
    }

    /// Resolve an id to its display name.
    pub fn label_for(&self, entity: MetadataEntity, id: &str) -> Option<&str> {
        self.items(entity)
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        MetadataEntity::ALL
            .iter()
            .all(|entity| self.items(*entity).is_empty())
    }
}
