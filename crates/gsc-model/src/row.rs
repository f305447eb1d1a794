//! Typed rows and the column layout they were read from.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, MetricField};

/// One keyword, page or country record.
///
/// Metrics are `None` when the source cell was empty or could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub identifier: String,
    pub clicks: Option<f64>,
    pub impressions: Option<f64>,
    pub ctr: Option<f64>,
    pub position: Option<f64>,
    /// Values of columns outside the schema, in layout order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
}

impl MetricRow {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            clicks: None,
            impressions: None,
            ctr: None,
            position: None,
            extras: Vec::new(),
        }
    }

    /// Builds a fully populated row.
    pub fn from_values(
        identifier: impl Into<String>,
        clicks: f64,
        impressions: f64,
        ctr: f64,
        position: f64,
    ) -> Self {
        Self {
            clicks: Some(clicks),
            impressions: Some(impressions),
            ctr: Some(ctr),
            position: Some(position),
            ..Self::new(identifier)
        }
    }

    pub fn metric(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Clicks => self.clicks,
            MetricField::Impressions => self.impressions,
            MetricField::Ctr => self.ctr,
            MetricField::Position => self.position,
        }
    }

    pub fn set_metric(&mut self, field: MetricField, value: Option<f64>) {
        match field {
            MetricField::Clicks => self.clicks = value,
            MetricField::Impressions => self.impressions = value,
            MetricField::Ctr => self.ctr = value,
            MetricField::Position => self.position = value,
        }
    }

    /// True when at least one of the four metrics is known.
    pub fn has_any_metric(&self) -> bool {
        MetricField::ALL
            .into_iter()
            .any(|field| self.metric(field).is_some())
    }
}

/// Meaning of one source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Identifier,
    Metric(MetricField),
    /// Index into [`MetricRow::extras`].
    Extra(usize),
}

/// Normalized source columns and the role each one plays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub columns: Vec<String>,
    pub roles: Vec<ColumnRole>,
}

impl ColumnLayout {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnRole)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.roles.iter().copied())
    }

    pub fn extra_count(&self) -> usize {
        self.roles
            .iter()
            .filter(|role| matches!(role, ColumnRole::Extra(_)))
            .count()
    }
}

/// Rows of one table together with the layout they were read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSet {
    pub entity: EntityKind,
    pub layout: ColumnLayout,
    pub rows: Vec<MetricRow>,
}

impl RowSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
