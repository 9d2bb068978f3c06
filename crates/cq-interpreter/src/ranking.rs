//! Ranking filter: apply preferences to a candidate snapshot.
//!
//! A linear scan over the whole list: every present preference is a
//! predicate, then one sort key is chosen (`powerful` over `efficient`
//! over price) and the result is capped.

use cq_protocol::car::Car;
use cq_protocol::preferences::{FeatureTag, QueryPreferences};

use crate::config::RankingThresholds;

/// Filter, sort and truncate `candidates` for `prefs`.
///
/// Never fails. An empty input, or preferences nothing satisfies, yields an
/// empty list; falling back to a "popular" sample is the caller's call.
pub fn rank_candidates(
    prefs: &QueryPreferences,
    candidates: &[Car],
    thresholds: &RankingThresholds,
    limit: usize,
) -> Vec<Car> {
    let mut matches: Vec<Car> = candidates
        .iter()
        .filter(|car| satisfies(prefs, car, thresholds))
        .cloned()
        .collect();

    sort_by_intent(prefs, &mut matches);
    matches.truncate(limit);
    matches
}

/// Whether a single car passes every present preference.
pub fn satisfies(prefs: &QueryPreferences, car: &Car, thresholds: &RankingThresholds) -> bool {
    if let Some(budget) = &prefs.budget
        && !budget.contains(car.price)
    {
        return false;
    }

    if let Some(body) = &prefs.body_type
        && !car.body_type.eq_ignore_ascii_case(body)
    {
        return false;
    }

    if let Some(fuel) = &prefs.fuel_type
        && !car.fuel_type.eq_ignore_ascii_case(fuel)
    {
        return false;
    }

    if let Some(brand) = &prefs.brand
        && !car.brand.to_lowercase().contains(&brand.to_lowercase())
    {
        return false;
    }

    prefs
        .features
        .iter()
        .all(|tag| satisfies_feature(*tag, car, thresholds))
}

fn satisfies_feature(tag: FeatureTag, car: &Car, thresholds: &RankingThresholds) -> bool {
    match tag {
        FeatureTag::Efficient => car
            .mileage_kmpl
            .is_some_and(|m| m > thresholds.efficient_min_kmpl),
        FeatureTag::Powerful => car
            .power_bhp
            .is_some_and(|p| p > thresholds.powerful_min_bhp),
        FeatureTag::Spacious => car
            .seating_capacity
            .is_some_and(|s| s >= thresholds.spacious_min_seats),
        // No numeric filter attached.
        FeatureTag::Compact | FeatureTag::Safe => true,
    }
}

/// Stable sort with a single key chosen from the requested features.
fn sort_by_intent(prefs: &QueryPreferences, cars: &mut [Car]) {
    if prefs.has_feature(FeatureTag::Powerful) {
        cars.sort_by(|a, b| b.power_or_zero().total_cmp(&a.power_or_zero()));
    } else if prefs.has_feature(FeatureTag::Efficient) {
        cars.sort_by(|a, b| b.mileage_or_zero().total_cmp(&a.mileage_or_zero()));
    } else {
        cars.sort_by_key(|c| c.price);
    }
}
