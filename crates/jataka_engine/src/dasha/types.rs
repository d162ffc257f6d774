//! Core types for dasha (planetary period) hierarchies.

use jataka_math::DAYS_PER_YEAR;
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// The 5 hierarchical dasha levels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    /// Create from a raw depth value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }

    /// Depth as a raw value (Mahadasha = 0).
    pub const fn depth(self) -> u8 {
        self as u8
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub lord: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u8,
}

impl DashaPeriod {
    /// Duration in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration in mean years.
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Whether a given JD falls inside this period.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// Seed for a dasha tree root: starting lord and remaining duration,
/// typically derived from the birth Moon's nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaSeed {
    pub lord: Graha,
    pub start_jd: f64,
    pub duration_years: f64,
}
