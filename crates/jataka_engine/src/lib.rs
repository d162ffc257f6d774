//! Derived Vedic chart calculations over pre-computed sidereal longitudes.
//!
//! This crate provides:
//! - Divisional chart (varga) sign and house resolution
//! - Lazily expanded dasha hierarchies for configurable lord systems
//! - Layered interpretation of graha placements
//!
//! All inputs are sidereal longitudes in degrees and Julian Day dates;
//! ephemeris computation is out of scope and supplied by the caller.

pub mod chart;
pub mod dasha;
pub mod derive;
pub mod error;
pub mod graha;
pub mod interpret;
pub mod rashi;
pub mod varga;

pub use chart::{BirthChart, PlacementFact, placements};
pub use dasha::{
    DashaLevel, DashaNode, DashaPeriod, DashaSeed, DashaSystem, DashaSystemConfig, DashaTree,
    birth_balance, expand_children, mahadasha_sequence, vimshottari, yogini,
};
pub use derive::{
    derive_dasha_tree, derive_interpretations, derive_mahadashas, derive_placements,
};
pub use error::ChartError;
pub use graha::{ALL_GRAHAS, Graha};
pub use interpret::{Interpretation, resolve, resolve_all};
pub use rashi::{ALL_RASHIS, Rashi, bhava_of, degrees_in_rashi, rashi_from_longitude};
pub use varga::{ALL_VARGAS, Varga, varga_longitude, varga_rashi};
