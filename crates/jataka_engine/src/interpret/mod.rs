//! Layered interpretation of graha placements.
//!
//! Resolution walks from the generic tables outward: a generic sign text and
//! house text are looked up first, then any chart-specific override for the
//! requested varga replaces the matching layer. A graha with no table entry
//! at all falls back to a neutral templated line, so resolution is total.

mod data;

use serde::Serialize;

use crate::chart::{BirthChart, placements};
use crate::graha::Graha;
use crate::rashi::Rashi;
use crate::varga::Varga;

use data::{GRAHA_TEXTS, VARGA_OVERRIDES};

/// Resolved reading for one graha in one divisional chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub graha: Graha,
    pub varga: Varga,
    pub rashi: Rashi,
    pub bhava: u8,
    pub rashi_text: String,
    pub bhava_text: String,
}

/// Resolve the texts for a single placement.
///
/// `bhava` is 1-based; values outside 1..=12 are clamped into range the same
/// way sign indices are clamped at the segment boundary.
pub fn resolve(graha: Graha, varga: Varga, rashi: Rashi, bhava: u8) -> Interpretation {
    let bhava = bhava.clamp(1, 12);
    let sign_slot = rashi.index() as usize;
    let house_slot = (bhava - 1) as usize;

    let (mut rashi_text, mut bhava_text) =
        match GRAHA_TEXTS.iter().find(|t| t.graha == graha) {
            Some(t) => (
                t.in_rashi[sign_slot].to_string(),
                t.in_bhava[house_slot].to_string(),
            ),
            None => (
                format!("{graha} in {}.", rashi.english_name()),
                format!("{graha} in the {bhava}th house."),
            ),
        };

    if let Some(ov) = VARGA_OVERRIDES
        .iter()
        .find(|o| o.varga == varga && o.graha == graha)
    {
        if let Some(&(_, text)) = ov.bhava_texts.iter().find(|&&(k, _)| k == bhava) {
            bhava_text = text.to_string();
        }
        if let Some(&(_, text)) = ov.rashi_texts.iter().find(|&&(k, _)| k == rashi.number()) {
            rashi_text = text.to_string();
        }
    }

    Interpretation {
        graha,
        varga,
        rashi,
        bhava,
        rashi_text,
        bhava_text,
    }
}

/// Resolve readings for every graha present in the chart, in the fixed
/// graha order, within the given divisional chart.
pub fn resolve_all(chart: &BirthChart, varga: Varga) -> Vec<Interpretation> {
    placements(chart, varga)
        .into_iter()
        .map(|p| resolve(p.graha, p.varga, p.rashi, p.bhava))
        .collect()
}
