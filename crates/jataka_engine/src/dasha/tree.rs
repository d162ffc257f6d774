//! Lazy, memoized dasha period trees.
//!
//! Expansion is a pure function of `(parent period, system table)`. Each
//! node owns a write-once child cache: the 9 (or 8) sub-periods are
//! materialized the first time a consumer asks for them, then reused for
//! the lifetime of the tree and never mutated. `OnceLock` makes the
//! first materialization the only write, so a tree can be shared across
//! threads without further locking. A tree is built for one system
//! table; its cached children belong to that table.

use std::sync::OnceLock;

use crate::dasha::balance::birth_balance;
use crate::dasha::systems::DashaSystemConfig;
use crate::dasha::types::{DashaLevel, DashaPeriod, DashaSeed};
use crate::error::ChartError;

/// Snap the last child's end to the parent's end to absorb accumulated
/// floating-point drift.
fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Compute the sub-periods of one parent period.
///
/// Lord rotation starts at the parent's own lord; each child's duration
/// is the parent's duration scaled by the child lord's share of the full
/// cycle; starts are chained so children tile the parent exactly.
/// Returns an empty list for a parent already at the deepest level.
pub fn expand_children(parent: &DashaPeriod, config: &DashaSystemConfig) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let n = config.lords.len();
    let start_idx = config.lord_position(parent.lord);
    let shares = jataka_math::distribute(parent.end_jd - parent.start_jd, &config.years);
    let mut children = Vec::with_capacity(n);
    let mut cursor = parent.start_jd;

    for i in 0..n {
        let idx = (start_idx + i) % n;
        let end = cursor + shares[idx];
        children.push(DashaPeriod {
            lord: config.lords[idx],
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: i as u8 + 1,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

/// One node of a dasha tree: a period plus a write-once child cache.
#[derive(Debug)]
pub struct DashaNode {
    period: DashaPeriod,
    children: OnceLock<Vec<DashaNode>>,
}

impl DashaNode {
    /// Wrap a period as an unexpanded node.
    pub fn new(period: DashaPeriod) -> Self {
        Self {
            period,
            children: OnceLock::new(),
        }
    }

    /// The period this node covers.
    pub fn period(&self) -> &DashaPeriod {
        &self.period
    }

    /// Whether children have been materialized.
    pub fn is_expanded(&self) -> bool {
        self.children.get().is_some()
    }

    /// Child nodes, materialized on first request and memoized.
    ///
    /// Returns an empty slice without expanding when the child level
    /// would exceed `max_level`; probing past the bound is a no-op, not
    /// an error.
    pub fn children(&self, config: &DashaSystemConfig, max_level: DashaLevel) -> &[DashaNode] {
        let Some(child_level) = self.period.level.child_level() else {
            return &[];
        };
        if child_level > max_level {
            return &[];
        }
        self.children
            .get_or_init(|| {
                expand_children(&self.period, config)
                    .into_iter()
                    .map(DashaNode::new)
                    .collect()
            })
            .as_slice()
    }
}

/// A dasha hierarchy rooted at one period, with a configured depth bound.
#[derive(Debug)]
pub struct DashaTree {
    root: DashaNode,
    max_level: DashaLevel,
}

impl DashaTree {
    /// Build a tree from a seed period at mahadasha level.
    pub fn from_seed(seed: &DashaSeed, max_level: DashaLevel) -> Result<Self, ChartError> {
        if !seed.start_jd.is_finite() {
            return Err(ChartError::InvalidInput("seed start date must be finite"));
        }
        if !seed.duration_years.is_finite() || seed.duration_years <= 0.0 {
            return Err(ChartError::InvalidInput(
                "seed duration must be finite and strictly positive",
            ));
        }
        let period = DashaPeriod {
            lord: seed.lord,
            start_jd: seed.start_jd,
            end_jd: jataka_math::add_years(seed.start_jd, seed.duration_years),
            level: DashaLevel::Mahadasha,
            order: 1,
        };
        Ok(Self::from_period(period, max_level))
    }

    /// Build a tree from an already-constructed mahadasha period.
    pub fn from_period(period: DashaPeriod, max_level: DashaLevel) -> Self {
        Self {
            root: DashaNode::new(period),
            max_level,
        }
    }

    /// Root node.
    pub fn root(&self) -> &DashaNode {
        &self.root
    }

    /// Configured depth bound.
    pub fn max_level(&self) -> DashaLevel {
        self.max_level
    }

    /// Children of a node within this tree's depth bound.
    pub fn children<'a>(
        &'a self,
        node: &'a DashaNode,
        config: &DashaSystemConfig,
    ) -> &'a [DashaNode] {
        node.children(config, self.max_level)
    }
}

/// Generate the full top-level mahadasha cycle for a birth.
///
/// The Moon's nakshatra picks the first lord; the first period carries
/// only the birth balance, subsequent lords run their full years in
/// cycle order.
pub fn mahadasha_sequence(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &DashaSystemConfig,
) -> Vec<DashaPeriod> {
    let (_nak, start_idx, balance_years) = birth_balance(moon_sidereal_lon, config);
    let n = config.lords.len();
    let mut periods = Vec::with_capacity(n);
    let mut cursor = birth_jd;

    for i in 0..n {
        let idx = (start_idx + i) % n;
        let years = if i == 0 { balance_years } else { config.years[idx] };
        let end = jataka_math::add_years(cursor, years);
        periods.push(DashaPeriod {
            lord: config.lords[idx],
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: i as u8 + 1,
        });
        cursor = end;
    }

    periods
}
