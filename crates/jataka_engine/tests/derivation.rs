//! End-to-end derivation checks: varga placement, dasha hierarchies and
//! interpretation resolution working together over one birth.

use approx::assert_relative_eq;

use jataka_engine::{
    BirthChart, DashaLevel, DashaSeed, Graha, Rashi, Varga, bhava_of, derive_dasha_tree,
    derive_interpretations, derive_mahadashas, derive_placements, mahadasha_sequence, resolve,
    varga_rashi, vimshottari,
};

#[test]
fn sun_mahadasha_antardasha_durations() {
    // A six-year Sun mahadasha starting 2020-01-01. The Sun antardasha
    // takes 6 * 6/120 years, the Moon antardasha 6 * 10/120 years.
    let config = vimshottari();
    let seed = DashaSeed {
        lord: Graha::Surya,
        start_jd: jataka_math::jd_from_civil(2020, 1, 1),
        duration_years: 6.0,
    };
    let tree = derive_dasha_tree(&seed, DashaLevel::Antardasha).unwrap();
    let antars = tree.children(tree.root(), &config);
    assert_eq!(antars.len(), 9);
    assert_eq!(antars[0].period().lord, Graha::Surya);
    assert_eq!(antars[1].period().lord, Graha::Chandra);
    assert_relative_eq!(antars[0].period().duration_years(), 0.3, max_relative = 1e-12);
    assert_relative_eq!(antars[1].period().duration_years(), 0.5, max_relative = 1e-12);
}

#[test]
fn children_partition_the_parent_exactly() {
    let config = vimshottari();
    let seed = DashaSeed {
        lord: Graha::Shukra,
        start_jd: jataka_math::jd_from_civil(1990, 6, 15),
        duration_years: 20.0,
    };
    let tree = derive_dasha_tree(&seed, DashaLevel::Pranadasha).unwrap();
    let root = *tree.root().period();
    let antars = tree.children(tree.root(), &config);

    // Contiguous, ordered, and summing back to the parent span.
    assert_eq!(antars[0].period().start_jd, root.start_jd);
    assert_eq!(antars[8].period().end_jd, root.end_jd);
    let mut total = 0.0;
    for pair in antars.windows(2) {
        assert_eq!(pair[0].period().end_jd, pair[1].period().start_jd);
    }
    for a in antars {
        total += a.period().duration_days();
    }
    assert_relative_eq!(total, root.duration_days(), max_relative = 1e-9);
}

#[test]
fn rotation_starts_from_the_parent_lord_at_every_level() {
    let config = vimshottari();
    let seed = DashaSeed {
        lord: Graha::Guru,
        start_jd: 2_451_544.5,
        duration_years: 16.0,
    };
    let tree = derive_dasha_tree(&seed, DashaLevel::Pranadasha).unwrap();
    let mut node = tree.root();
    for _ in 0..4 {
        let kids = tree.children(node, &config);
        assert_eq!(kids.len(), 9);
        assert_eq!(kids[0].period().lord, node.period().lord);
        // Third child: two steps along the cycle from the parent's lord.
        let parent_pos = config.lord_position(node.period().lord);
        assert_eq!(kids[2].period().lord, config.lords[(parent_pos + 2) % 9]);
        node = &kids[2];
    }
    // Pranadasha is the floor.
    assert!(tree.children(node, &config).is_empty());
}

#[test]
fn full_vimshottari_cycle_spans_120_years() {
    let config = vimshottari();
    let birth = jataka_math::jd_from_civil(2020, 1, 1);
    let periods = mahadasha_sequence(birth, 0.0, &config);
    assert_eq!(periods.len(), 9);
    // Moon at 0 deg Aries is the exact start of Ashwini, so the first
    // Ketu period keeps its full seven years.
    assert_eq!(periods[0].lord, Graha::Ketu);
    assert_relative_eq!(periods[0].duration_years(), 7.0, max_relative = 1e-12);
    let total: f64 = periods.iter().map(|p| p.duration_years()).sum();
    assert_relative_eq!(total, 120.0, max_relative = 1e-12);
}

#[test]
fn birth_balance_shortens_only_the_first_period() {
    let config = vimshottari();
    let birth = jataka_math::jd_from_civil(2020, 1, 1);
    // Midpoint of Rohini: half of the Moon's ten years remain.
    let moon = 3.5 * 360.0 / 27.0;
    let trees = derive_mahadashas(birth, moon, &config, DashaLevel::Mahadasha).unwrap();
    assert_eq!(trees[0].root().period().lord, Graha::Chandra);
    assert_relative_eq!(
        trees[0].root().period().duration_years(),
        5.0,
        max_relative = 1e-12
    );
    assert_eq!(trees[1].root().period().lord, Graha::Mangal);
    assert_relative_eq!(
        trees[1].root().period().duration_years(),
        7.0,
        max_relative = 1e-12
    );
}

#[test]
fn navamsa_of_mid_aries_is_leo() {
    // 15 deg Aries falls in the fifth navamsa pada; counting from Aries
    // (a fiery sign starts its own trine) lands on Leo.
    assert_eq!(varga_rashi(15.0, Varga::D9), Rashi::Simha);
}

#[test]
fn navamsa_distributes_evenly_over_the_zodiac() {
    let mut counts = [0u32; 12];
    let pada = 360.0 / 108.0;
    for i in 0..108 {
        let lon = (i as f64 + 0.5) * pada;
        counts[varga_rashi(lon, Varga::D9).index() as usize] += 1;
    }
    assert!(counts.iter().all(|&c| c == 9));
}

#[test]
fn houses_rotate_with_the_ascendant() {
    // Scorpio seen from a Leo ascendant occupies the fourth house.
    assert_eq!(bhava_of(Rashi::Vrischika, Rashi::Simha), 4);
    assert_eq!(bhava_of(Rashi::Simha, Rashi::Simha), 1);
    assert_eq!(bhava_of(Rashi::Karka, Rashi::Simha), 12);
}

#[test]
fn placements_follow_the_varga_ascendant() {
    let mut chart = BirthChart::new(125.0).unwrap();
    chart.set_longitude(Graha::Surya, 222.5).unwrap();
    chart.set_longitude(Graha::Chandra, 95.0).unwrap();

    let d1 = derive_placements(&chart, Varga::D1);
    assert_eq!(d1.len(), 2);
    assert_eq!(d1[0].rashi, Rashi::Vrischika);
    assert_eq!(d1[0].bhava, 4);
    assert_eq!(d1[1].bhava, 12);

    // In the navamsa both the grahas and the ascendant transform, so
    // houses are counted from the navamsa lagna.
    let d9 = derive_placements(&chart, Varga::D9);
    let d9_lagna = varga_rashi(125.0, Varga::D9);
    for p in &d9 {
        assert_eq!(p.bhava, bhava_of(p.rashi, d9_lagna));
    }
}

#[test]
fn navamsa_override_takes_precedence_over_generic_text() {
    let generic = resolve(Graha::Surya, Varga::D1, Rashi::Tula, 7);
    let navamsa = resolve(Graha::Surya, Varga::D9, Rashi::Tula, 7);
    assert_ne!(generic.bhava_text, navamsa.bhava_text);
    assert!(navamsa.bhava_text.contains("navamsa"));
    // The sign layer has no override and stays generic.
    assert_eq!(generic.rashi_text, navamsa.rashi_text);
}

#[test]
fn interpretations_cover_every_present_graha() {
    let mut chart = BirthChart::new(10.0).unwrap();
    for (i, g) in jataka_engine::ALL_GRAHAS.iter().enumerate() {
        chart.set_longitude(*g, i as f64 * 37.0).unwrap();
    }
    let out = derive_interpretations(&chart, Varga::D9);
    assert_eq!(out.len(), 9);
    for i in &out {
        assert!(!i.rashi_text.is_empty());
        assert!(!i.bhava_text.is_empty());
        assert!((1..=12).contains(&i.bhava));
    }
}

#[test]
fn expansion_past_the_bound_is_a_silent_no_op() {
    let config = vimshottari();
    let seed = DashaSeed {
        lord: Graha::Shani,
        start_jd: 2_451_544.5,
        duration_years: 19.0,
    };
    let shallow = derive_dasha_tree(&seed, DashaLevel::Mahadasha).unwrap();
    assert!(shallow.children(shallow.root(), &config).is_empty());
    assert!(!shallow.root().is_expanded());

    let deep = derive_dasha_tree(&seed, DashaLevel::Sookshmadasha).unwrap();
    let antars = deep.children(deep.root(), &config);
    let pratyantars = deep.children(&antars[0], &config);
    let sookshmas = deep.children(&pratyantars[0], &config);
    assert_eq!(sookshmas.len(), 9);
    assert!(deep.children(&sookshmas[0], &config).is_empty());
}
