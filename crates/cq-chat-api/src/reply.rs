//! Reply composition: suggestion cards, price formatting and answer text.

use cq_interpreter::budget::{CRORE, LAKH};
use cq_protocol::car::Car;
use cq_protocol::chat::{SuggestionCard, SuggestionSource};
use cq_protocol::preferences::{Budget, QueryPreferences};

/// Format a rupee amount for display.
///
/// Crore and lakh amounts use two decimals ("₹1.25 Cr", "₹12.50 Lakh");
/// anything smaller uses Indian digit grouping ("₹85,000").
///
/// The unit is chosen after rounding, so 99.995 lakh shows as "₹1.00 Cr"
/// rather than "₹100.00 Lakh".
pub fn format_price(price: u64) -> String {
    let lakh_hundredths = hundredths(price, LAKH);
    if lakh_hundredths >= 100 * (CRORE / LAKH) {
        format!("₹{} Cr", two_decimals(hundredths(price, CRORE)))
    } else if price >= LAKH {
        format!("₹{} Lakh", two_decimals(lakh_hundredths))
    } else {
        format!("₹{}", group_indian(price))
    }
}

/// `price / unit` in hundredths, rounded half up.
fn hundredths(price: u64, unit: u64) -> u64 {
    let step = unit / 100;
    price.saturating_add(step / 2) / step
}

fn two_decimals(hundredths: u64) -> String {
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Group digits the Indian way: last three, then pairs ("12,34,567").
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Render cars as chat suggestion cards.
pub fn suggestion_cards(cars: &[Car]) -> Vec<SuggestionCard> {
    cars.iter()
        .map(|car| SuggestionCard::from_car(car, format_price(car.price)))
        .collect()
}

/// Cars shown when nothing matched: the head of the listing.
pub fn popular_sample(cars: &[Car], limit: usize) -> Vec<Car> {
    cars.iter().take(limit).cloned().collect()
}

/// Short phrase for the understood preferences, e.g.
/// "Petrol SUV from Hyundai, under ₹20.00 Lakh, powerful".
pub fn describe_preferences(prefs: &QueryPreferences) -> Option<String> {
    if prefs.is_empty() {
        return None;
    }

    let mut head: Vec<&str> = Vec::new();
    if let Some(fuel) = &prefs.fuel_type {
        head.push(fuel);
    }
    if let Some(body) = &prefs.body_type {
        head.push(body);
    }

    let mut parts: Vec<String> = Vec::new();
    match (head.is_empty(), &prefs.brand) {
        (false, Some(brand)) => parts.push(format!("{} from {brand}", head.join(" "))),
        (false, None) => parts.push(head.join(" ")),
        (true, Some(brand)) => parts.push(brand.clone()),
        (true, None) => {}
    }
    if let Some(budget) = &prefs.budget {
        parts.push(describe_budget(budget));
    }
    if !prefs.features.is_empty() {
        let tags: Vec<&str> = prefs.features.iter().map(|t| t.as_str()).collect();
        parts.push(tags.join(" and "));
    }

    Some(parts.join(", "))
}

fn describe_budget(budget: &Budget) -> String {
    match (budget.min, budget.max) {
        (Some(min), Some(max)) => {
            format!("between {} and {}", format_price(min), format_price(max))
        }
        (None, Some(max)) => format!("under {}", format_price(max)),
        (Some(min), None) => format!("above {}", format_price(min)),
        (None, None) => "any budget".to_string(),
    }
}

/// Answer text for a reply.
pub fn reply_text(prefs: &QueryPreferences, source: SuggestionSource, count: usize) -> String {
    if count == 0 {
        return "There are no cars in the listing right now. Please check back soon.".to_string();
    }
    let plural = if count == 1 { "car" } else { "cars" };
    match (source, describe_preferences(prefs)) {
        (SuggestionSource::Matched, Some(summary)) => {
            format!("I found {count} {plural} matching {summary}.")
        }
        (SuggestionSource::Matched, None) => format!("Here are {count} {plural} you might like."),
        (SuggestionSource::Popular, Some(summary)) => format!(
            "I couldn't find cars matching {summary}. Here are some popular picks instead."
        ),
        (SuggestionSource::Popular, None) => {
            "Tell me your budget, body type or fuel preference. Meanwhile, here are some popular cars."
                .to_string()
        }
    }
}
