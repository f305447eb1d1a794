//! Mapping normalized headers onto the expected columns.

use gsc_model::{ColumnLayout, ColumnRole, EntityKind, MetricField};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Expected columns for one entity kind.
///
/// Required: the entity identifier plus clicks, impressions, ctr and
/// position. Other columns are carried along as extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    pub entity: EntityKind,
}

impl ColumnSchema {
    pub fn new(entity: EntityKind) -> Self {
        Self { entity }
    }

    /// Canonical names of the required columns, identifier first.
    pub fn required_columns(&self) -> Vec<&'static str> {
        std::iter::once(self.entity.field_name())
            .chain(MetricField::ALL.into_iter().map(MetricField::field_name))
            .collect()
    }

    /// Resolve normalized headers into a layout.
    ///
    /// The first header matching a field wins; later duplicates become
    /// extras. Schema columns are renamed to their canonical names.
    pub fn resolve(&self, origin: &str, headers: &[String]) -> Result<ColumnLayout> {
        let mut layout = ColumnLayout::default();
        let mut has_identifier = false;
        let mut seen_metrics: Vec<MetricField> = Vec::new();
        let mut extras = 0usize;

        for header in headers {
            let role = if !has_identifier && self.entity.header_aliases().contains(&header.as_str())
            {
                has_identifier = true;
                ColumnRole::Identifier
            } else if let Some(field) = metric_for_header(header)
                .filter(|field| !seen_metrics.contains(field))
            {
                seen_metrics.push(field);
                ColumnRole::Metric(field)
            } else {
                extras += 1;
                ColumnRole::Extra(extras - 1)
            };
            let name = match role {
                ColumnRole::Identifier => self.entity.field_name().to_string(),
                ColumnRole::Metric(field) => field.field_name().to_string(),
                ColumnRole::Extra(_) => header.clone(),
            };
            debug!(origin, header = %header, column = %name, ?role, "column resolved");
            layout.columns.push(name);
            layout.roles.push(role);
        }

        let missing: Vec<String> = self
            .required_columns()
            .into_iter()
            .filter(|name| {
                !layout
                    .columns
                    .iter()
                    .zip(&layout.roles)
                    .any(|(column, role)| {
                        !matches!(role, ColumnRole::Extra(_)) && column.as_str() == *name
                    })
            })
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(TransformError::MissingColumns {
                origin: origin.to_string(),
                columns: missing,
            });
        }
        Ok(layout)
    }
}

fn metric_for_header(header: &str) -> Option<MetricField> {
    MetricField::ALL
        .into_iter()
        .find(|field| field.header_aliases().contains(&header))
}

/// Guess the entity kind from normalized headers.
pub fn detect_entity(headers: &[String]) -> Option<EntityKind> {
    EntityKind::ALL.into_iter().find(|kind| {
        headers
            .iter()
            .any(|header| kind.header_aliases().contains(&header.as_str()))
    })
}
