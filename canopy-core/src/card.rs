//! Presentation-ready metric cards
//!
//! Every calculator ends in a [`MetricCard`]: a display value, a line of
//! supporting detail, and a three-level status the rendering layer maps to a
//! visual treatment. Cards are created fresh on every computation and never
//! diffed here.

use alloc::collections::BTreeMap;
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::quality::{META_SEPARATOR, NO_DATA};
use crate::errors::DegradedReason;

/// Card severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardStatus {
    Good,
    Warning,
    Critical,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// One rendered metric
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetricCard {
    pub value: String,
    pub meta: String,
    pub status: CardStatus,
}

impl MetricCard {
    pub fn new(value: impl Into<String>, meta: impl Into<String>, status: CardStatus) -> Self {
        Self {
            value: value.into(),
            meta: meta.into(),
            status,
        }
    }

    pub fn good(value: impl Into<String>, meta: impl Into<String>) -> Self {
        Self::new(value, meta, CardStatus::Good)
    }

    pub fn warning(value: impl Into<String>, meta: impl Into<String>) -> Self {
        Self::new(value, meta, CardStatus::Warning)
    }

    /// `"--"` with warning status and the given detail
    pub fn no_data(meta: impl Into<String>) -> Self {
        Self::warning(NO_DATA, meta)
    }

    /// Fallback card for a degraded state
    pub fn degraded(reason: DegradedReason) -> Self {
        log_debug!("card degraded: {:?}", reason);
        Self::no_data(reason.describe())
    }

    /// Whether the value is the no-data sentinel
    pub fn is_no_data(&self) -> bool {
        self.value == NO_DATA
    }
}

/// The seven cards, by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricKind {
    Photoperiod,
    Dif,
    Gdd,
    Targets,
    Stress,
    Quality,
    Alignment,
}

impl MetricKind {
    /// Every kind in display order
    pub const ALL: [MetricKind; 7] = [
        MetricKind::Photoperiod,
        MetricKind::Dif,
        MetricKind::Gdd,
        MetricKind::Targets,
        MetricKind::Stress,
        MetricKind::Quality,
        MetricKind::Alignment,
    ];

    /// Key used by the rendering layer
    pub fn key(&self) -> &'static str {
        match self {
            Self::Photoperiod => "photoperiod",
            Self::Dif => "dif",
            Self::Gdd => "gdd",
            Self::Targets => "targets",
            Self::Stress => "stress",
            Self::Quality => "quality",
            Self::Alignment => "alignment",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// Output of one computation pass
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InsightCards {
    pub photoperiod: MetricCard,
    pub dif: MetricCard,
    pub gdd: MetricCard,
    pub targets: MetricCard,
    pub stress: MetricCard,
    pub quality: MetricCard,
    pub alignment: MetricCard,
}

impl InsightCards {
    pub fn get(&self, kind: MetricKind) -> &MetricCard {
        match kind {
            MetricKind::Photoperiod => &self.photoperiod,
            MetricKind::Dif => &self.dif,
            MetricKind::Gdd => &self.gdd,
            MetricKind::Targets => &self.targets,
            MetricKind::Stress => &self.stress,
            MetricKind::Quality => &self.quality,
            MetricKind::Alignment => &self.alignment,
        }
    }

    /// Cards in display order
    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, &MetricCard)> {
        MetricKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Cards keyed by name
    pub fn to_map(&self) -> BTreeMap<&'static str, MetricCard> {
        self.iter().map(|(kind, card)| (kind.key(), card.clone())).collect()
    }

    /// Worst status across all cards
    pub fn worst_status(&self) -> CardStatus {
        self.iter()
            .map(|(_, card)| card.status)
            .max()
            .unwrap_or(CardStatus::Good)
    }
}

/// Join present meta fields with the card separator
pub fn join_meta<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut meta = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !meta.is_empty() {
            meta.push_str(META_SEPARATOR);
        }
        meta.push_str(part);
    }
    meta
}
