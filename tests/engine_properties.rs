//! Engine Property Tests
//!
//! Behavioural properties of zone compliance, slot scoring and succession,
//! checked against small hand-built crop pools.

use harmonic_guild_engine::tables::FREQUENCY_ZONES;
use harmonic_guild_engine::{
    check_dissonance, compatibility_score, is_sprinter, suggest_succession, ChordInterval,
    ConflictType, Crop, CropCatalog, GuildRole, Slot, SuccessionQuery,
};
use chrono::NaiveDate;

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

fn crop(id: &str) -> Crop {
    Crop {
        id: id.to_string(),
        name: id.to_string(),
        common_name: Some(id.to_string()),
        frequency_hz: 528.0,
        category: "Sustenance".to_string(),
        ..Default::default()
    }
}

fn sci(mut c: Crop, scientific: &str) -> Crop {
    c.scientific_name = Some(scientific.to_string());
    c
}

fn spring() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 4, 15)
}

fn ids<'a>(recs: &'a [harmonic_guild_engine::Recommendation<'_>]) -> Vec<&'a str> {
    recs.iter().map(|r| r.crop.id.as_str()).collect()
}

// ============================================================================
// Zone compliance
// ============================================================================

#[test]
fn test_zone_match_is_reflexive() {
    let catalog = CropCatalog::from_json_str(SAMPLE_CATALOG).unwrap();
    for c in catalog.crops() {
        for interval in ChordInterval::ALL {
            for jazz in [false, true] {
                let d = check_dissonance(c, c.frequency_hz, interval, jazz);
                assert!(!d.is_dissonant, "{} dissonant in its own zone", c.id);
                assert_eq!(d.conflict_type, None);
            }
        }
    }
}

#[test]
fn test_strict_mode_mismatch_is_always_vibrational() {
    let catalog = CropCatalog::from_json_str(SAMPLE_CATALOG).unwrap();
    for c in catalog.crops() {
        for zone in FREQUENCY_ZONES.iter().filter(|z| z.hz != c.frequency_hz) {
            for interval in ChordInterval::ALL {
                let d = check_dissonance(c, zone.hz, interval, false);
                assert!(d.is_dissonant);
                assert_eq!(d.conflict_type, Some(ConflictType::Vibrational));
            }
        }
    }
}

#[test]
fn test_jazz_mode_exception_is_role_gated() {
    let enhancer = Crop { frequency_hz: 396.0, guild_role: Some(GuildRole::Enhancer), ..crop("e") };
    let lead = Crop { frequency_hz: 396.0, guild_role: Some(GuildRole::Lead), ..crop("l") };

    assert!(!check_dissonance(&enhancer, 528.0, ChordInterval::Seventh, true).is_dissonant);
    assert!(check_dissonance(&lead, 528.0, ChordInterval::Seventh, true).is_dissonant);
    assert!(check_dissonance(&enhancer, 528.0, ChordInterval::Root, true).is_dissonant);
}

#[test]
fn test_jazz_mode_enhancer_keeps_zone_bonus_in_slot_score() {
    let enhancer = Crop { frequency_hz: 396.0, guild_role: Some(GuildRole::Enhancer), ..crop("e") };
    let strict = compatibility_score(&enhancer, &Slot::new(528.0, ChordInterval::Ninth), &[]);
    let jazz = compatibility_score(
        &enhancer,
        &Slot::new(528.0, ChordInterval::Ninth).with_jazz_mode(true),
        &[],
    );
    assert!(jazz.score > strict.score);
    assert!(!jazz.dissonance.is_dissonant);
}

// ============================================================================
// Slot scoring
// ============================================================================

#[test]
fn test_sprinter_threshold_includes_45_days() {
    for (days, expected) in [(1, true), (44, true), (45, true), (46, false), (120, false)] {
        let c = Crop { harvest_days: Some(days), ..crop("s") };
        assert_eq!(is_sprinter(&c), expected, "harvest_days = {}", days);
    }
    assert!(!is_sprinter(&crop("unknown")));
}

#[test]
fn test_brix_targets_stack() {
    let slot = Slot::new(528.0, ChordInterval::Ninth);
    let excellent = Crop { brix_target_min: Some(14.0), brix_target_max: Some(24.0), ..crop("a") };
    let high = Crop { brix_target_min: Some(12.0), brix_target_max: Some(14.0), ..crop("b") };
    let low = Crop { brix_target_min: Some(6.0), ..crop("c") };

    let s_excellent = compatibility_score(&excellent, &slot, &[]).score;
    let s_high = compatibility_score(&high, &slot, &[]).score;
    let s_low = compatibility_score(&low, &slot, &[]).score;
    assert!(s_excellent > s_high);
    assert!(s_high > s_low);
}

#[test]
fn test_slot_scoring_is_idempotent() {
    let star = Crop {
        chord_interval: Some(ChordInterval::Root),
        growth_habit: Some("tree".to_string()),
        companion_crops: Some(vec!["b".to_string()]),
        ..crop("star")
    };
    let candidate = Crop {
        harvest_days: Some(30),
        brix_target_min: Some(13.0),
        growth_habit: Some("shrub".to_string()),
        ..crop("b")
    };
    let slot = Slot::new(528.0, ChordInterval::Third);
    let first = compatibility_score(&candidate, &slot, &[&star]);
    let second = compatibility_score(&candidate, &slot, &[&star]);
    assert_eq!(first, second);
}

// ============================================================================
// Succession
// ============================================================================

#[test]
fn test_succession_excludes_self() {
    let tomato = sci(crop("tomato"), "Solanum lycopersicum");
    let pool = vec![tomato.clone()];
    assert!(suggest_succession(&SuccessionQuery::new(&tomato), &pool).is_empty());
}

#[test]
fn test_empty_pool_gives_empty_list() {
    let tomato = crop("tomato");
    assert!(suggest_succession(&SuccessionQuery::new(&tomato), &[]).is_empty());
}

#[test]
fn test_hardiness_filter_keeps_only_crops_hardy_in_zone() {
    let finished = crop("finished");
    let tropical = Crop { hardiness_zone_min: Some(10.0), hardiness_zone_max: Some(13.0), ..crop("mango") };
    let temperate = Crop { hardiness_zone_min: Some(3.0), hardiness_zone_max: Some(10.0), ..crop("kale") };
    let pool = vec![tropical, temperate];

    let recs = suggest_succession(&SuccessionQuery::new(&finished).hardiness_zone(Some(6.0)), &pool);
    assert_eq!(ids(&recs), vec!["kale"]);

    let unfiltered = suggest_succession(&SuccessionQuery::new(&finished), &pool);
    assert_eq!(unfiltered.len(), 2);
}

#[test]
fn test_all_filtered_gives_empty_list() {
    let finished = crop("finished");
    let pool = vec![Crop { hardiness_zone_min: Some(10.0), ..crop("mango") }];
    let recs = suggest_succession(&SuccessionQuery::new(&finished).hardiness_zone(Some(5.0)), &pool);
    assert!(recs.is_empty());
}

#[test]
fn test_antagonist_of_bedmate_is_never_returned() {
    let finished = crop("finished");
    let bean = Crop { common_name: Some("Bean".to_string()), ..crop("bean") };
    let pool = vec![
        Crop { common_name: Some("Onion".to_string()), ..crop("onion") },
        Crop { common_name: Some("Carrot".to_string()), ..crop("carrot") },
        Crop { common_name: Some("Red Onion".to_string()), ..crop("red-onion") },
    ];
    let bedmates = [&bean];

    let recs = suggest_succession(
        &SuccessionQuery::new(&finished).bedmates(&bedmates).limit(10),
        &pool,
    );
    assert_eq!(ids(&recs), vec!["carrot"]);
}

#[test]
fn test_different_family_ranks_first_with_good_rotation() {
    let tomato = sci(crop("tomato"), "Solanum lycopersicum");
    let eggplant = sci(crop("eggplant"), "Solanum melongena");
    let lettuce = sci(crop("lettuce"), "Lactuca sativa");
    let pool = vec![eggplant, lettuce];

    let recs = suggest_succession(&SuccessionQuery::new(&tomato), &pool);
    assert_eq!(ids(&recs), vec!["lettuce", "eggplant"]);
    assert!(recs[0].reasons.iter().any(|r| r == "Good rotation"));
    assert!(!recs[1].reasons.iter().any(|r| r == "Good rotation"));
    assert!(recs[0].score > recs[1].score);
}

#[test]
fn test_nitrogen_fixer_follows_heavy_feeder() {
    let tomato = sci(crop("tomato"), "Solanum lycopersicum");
    let lettuce = Crop {
        planting_season: Some("Spring".to_string()),
        ..sci(crop("lettuce"), "Lactuca sativa")
    };
    let bean = Crop {
        planting_season: Some("Spring".to_string()),
        category: "Nitrogen/Bio-Mass".to_string(),
        ..sci(crop("bean"), "Phaseolus vulgaris")
    };
    let pool = vec![lettuce, bean];

    let recs = suggest_succession(&SuccessionQuery::new(&tomato).harvest_date(spring()), &pool);
    assert_eq!(recs[0].crop.id, "bean");
    assert!(recs[0].reasons.iter().any(|r| r == "N-fixer after feeder"));
    assert!(recs[0].reasons.iter().any(|r| r == "In season (Spring)"));
    assert!(!recs[1].reasons.iter().any(|r| r == "N-fixer after feeder"));
}

#[test]
fn test_limit_truncates_equal_scores_in_pool_order() {
    let finished = crop("finished");
    let pool: Vec<Crop> = (0..10).map(|i| crop(&format!("c{}", i))).collect();

    let recs = suggest_succession(&SuccessionQuery::new(&finished).limit(2), &pool);
    assert_eq!(ids(&recs), vec!["c0", "c1"]);

    let all = suggest_succession(&SuccessionQuery::new(&finished).limit(50), &pool);
    assert_eq!(all.len(), 10);
}

#[test]
fn test_succession_is_idempotent() {
    let catalog = CropCatalog::from_json_str(SAMPLE_CATALOG).unwrap();
    let tomato = catalog.get("tomato").unwrap();
    let bean = catalog.get("bush-bean").unwrap();
    let bedmates = [bean];
    let query = SuccessionQuery::new(tomato)
        .hardiness_zone(Some(6.0))
        .bedmates(&bedmates)
        .harvest_date(spring());

    let first = suggest_succession(&query, catalog.crops());
    let second = suggest_succession(&query, catalog.crops());
    assert_eq!(first, second);
}
