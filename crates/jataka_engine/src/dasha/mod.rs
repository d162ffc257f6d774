//! Dasha (planetary period) hierarchies.
//!
//! A period system is an ordered lord cycle plus a duration table
//! ([`systems`]); a birth seeds the top-level cycle through the Moon's
//! nakshatra ([`balance`]); sub-periods are materialized lazily, one
//! memoized level at a time, down to a configured depth ([`tree`]).

pub mod balance;
pub mod systems;
pub mod tree;
pub mod types;

pub use balance::{NAKSHATRA_SPAN, birth_balance};
pub use systems::{DashaSystem, DashaSystemConfig, vimshottari, yogini};
pub use tree::{DashaNode, DashaTree, expand_children, mahadasha_sequence};
pub use types::{DashaLevel, DashaPeriod, DashaSeed};
