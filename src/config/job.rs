//! Job descriptor shape as it appears in the JSON config.
//!
//! JSON shape (single object or array of objects):
//! {
//!   "pathPattern": "data/**/*.csv",
//!   "measure": "Amount",               // or ["Salary", "Bonus"]
//!   "groupBy": "Year",                 // or ["Year", "Category"]
//!   "chartKind": "bar",                // "bar" | "line"
//!   "chartLabel": "Total income"       // optional display label
//! }

use serde::Deserialize;

/// A config field that is either a single name or an ordered list of names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// All names in config order.
    pub fn names(&self) -> &[String] {
        match self {
            OneOrMany::One(name) => std::slice::from_ref(name),
            OneOrMany::Many(names) => names,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            OneOrMany::One(name) => name.is_empty(),
            OneOrMany::Many(names) => names.is_empty(),
        }
    }
}

/// One aggregation-and-chart job.
///
/// Every field is optional at the serde level so a descriptor with missing
/// keys still loads; the pipeline warns and skips it instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    #[serde(default)]
    pub path_pattern: Option<String>,

    /// Source column(s) to sum.
    #[serde(default)]
    pub measure: Option<OneOrMany>,

    /// Grouping column(s); each one produces an independent chart.
    #[serde(default)]
    pub group_by: Option<OneOrMany>,

    #[serde(default)]
    pub chart_kind: Option<String>,

    /// Display name for the aggregated measure. Defaults to the measure name
    /// or the present names joined with " + ".
    #[serde(default)]
    pub chart_label: Option<String>,
}
