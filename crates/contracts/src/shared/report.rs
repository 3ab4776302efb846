use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat report row as returned by the reporting endpoints.
///
/// Values are scalars: string, number or null.
pub type Row = Map<String, Value>;

/// Canonical donut/pie input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutSlice {
    pub name: String,
    pub value: f64,
}

/// Budget vs. paid amount for one label (usually a financial year).
///
/// Amounts may be `NaN` when the backend sent something unparseable,
/// renderers show those as blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPoint {
    pub label: String,
    pub budget: f64,
    pub paid: f64,
}
