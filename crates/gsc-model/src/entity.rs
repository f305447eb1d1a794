//! Entity kinds and metric fields of a Search Console export.
//!
//! Header aliases are listed in their normalized form (trimmed, lower-case,
//! spaces replaced by underscores), which is what the ingest layer produces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// What a row describes: a search query, a landing page or a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Query,
    Page,
    Country,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Query, EntityKind::Page, EntityKind::Country];

    /// Canonical column name of the identifier field.
    pub fn field_name(self) -> &'static str {
        match self {
            EntityKind::Query => "query",
            EntityKind::Page => "page",
            EntityKind::Country => "country",
        }
    }

    /// Normalized headers accepted for the identifier column.
    ///
    /// The first entry is always the canonical name.
    pub fn header_aliases(self) -> &'static [&'static str] {
        match self {
            EntityKind::Query => &["query", "top_queries", "queries", "search_query"],
            EntityKind::Page => &["page", "top_pages", "pages", "url", "landing_page"],
            EntityKind::Country => &["country", "top_countries", "countries"],
        }
    }

    /// Sheet name used for this entity in a workbook export.
    pub fn sheet_name(self) -> &'static str {
        match self {
            EntityKind::Query => "Queries",
            EntityKind::Page => "Pages",
            EntityKind::Country => "Countries",
        }
    }

    pub fn from_sheet_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.sheet_name().eq_ignore_ascii_case(trimmed))
    }

    /// Metric used to rank the top rows for this entity.
    ///
    /// Countries are ranked by reach, everything else by traffic.
    pub fn ranking_field(self) -> MetricField {
        match self {
            EntityKind::Country => MetricField::Impressions,
            EntityKind::Query | EntityKind::Page => MetricField::Clicks,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for EntityKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.header_aliases().contains(&needle.as_str()))
            .ok_or_else(|| ModelError::UnknownEntity(value.to_string()))
    }
}

/// The four numeric columns every export carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricField {
    Clicks,
    Impressions,
    Ctr,
    Position,
}

impl MetricField {
    pub const ALL: [MetricField; 4] = [
        MetricField::Clicks,
        MetricField::Impressions,
        MetricField::Ctr,
        MetricField::Position,
    ];

    pub fn field_name(self) -> &'static str {
        match self {
            MetricField::Clicks => "clicks",
            MetricField::Impressions => "impressions",
            MetricField::Ctr => "ctr",
            MetricField::Position => "position",
        }
    }

    /// Normalized headers accepted for this metric; the first is canonical.
    pub fn header_aliases(self) -> &'static [&'static str] {
        match self {
            MetricField::Clicks => &["clicks", "url_clicks"],
            MetricField::Impressions => &["impressions"],
            MetricField::Ctr => &["ctr", "click_through_rate", "url_ctr"],
            MetricField::Position => &["position", "average_position", "avg_position", "avg._position"],
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
