use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::types::SortCriterion;
use crate::types::SortDirection;
use crate::types::SortSpec;
use crate::types::SupervisorRecord;

/// Sorted copy of `records`. The ascending pass is stable; descending order
/// is that result reversed, so ties come out in reverse input order.
pub fn sort(
    records: &[SupervisorRecord],
    criterion: SortCriterion,
    direction: SortDirection,
) -> Vec<SupervisorRecord> {
    let mut sorted = records.to_vec();
    let cmp: fn(&SupervisorRecord, &SupervisorRecord) -> Ordering = match criterion {
        SortCriterion::Name => by_name,
        SortCriterion::Slots => by_slots,
        SortCriterion::Rating => by_rating,
    };
    sorted.sort_by(cmp);
    if direction == SortDirection::Desc {
        sorted.reverse();
    }
    sorted
}

pub fn sort_by_spec(records: &[SupervisorRecord], spec: SortSpec) -> Vec<SupervisorRecord> {
    sort(records, spec.criterion, spec.direction)
}

/// Base letters only: decomposed, combining marks dropped, lowercased.
fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

// Letters first, then accents, then case; the raw string keeps the order total.
fn by_name(a: &SupervisorRecord, b: &SupervisorRecord) -> Ordering {
    fold(&a.name)
        .cmp(&fold(&b.name))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

fn by_slots(a: &SupervisorRecord, b: &SupervisorRecord) -> Ordering {
    a.available_slots.cmp(&b.available_slots)
}

// Unrated sorts before any rating.
fn by_rating(a: &SupervisorRecord, b: &SupervisorRecord) -> Ordering {
    match (a.rating, b.rating) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
