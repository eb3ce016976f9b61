// Review aggregation over a hotel's full review set
use crate::dataset::ReviewRecord;
use serde::Serialize;
use std::collections::BTreeMap;

pub const MIN_STAR: u8 = 1;
pub const MAX_STAR: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewMetadata {
    pub total_reviews: usize,
    // One-decimal display string, "0.0" when there are no reviews
    pub average_rating: String,
    pub star_counts: BTreeMap<u8, usize>,
}

/// Histogram of `floor(rating)` over stars 1..=5.
///
/// Every star key is present. Ratings whose floor lands outside 1..=5 are
/// dropped rather than counted or reported.
pub fn star_counts(reviews: &[ReviewRecord]) -> BTreeMap<u8, usize> {
    let mut counts: BTreeMap<u8, usize> = (MIN_STAR..=MAX_STAR).map(|star| (star, 0)).collect();

    for review in reviews {
        let floored = review.rating.floor();
        if floored >= MIN_STAR as f64 && floored <= MAX_STAR as f64 {
            if let Some(count) = counts.get_mut(&(floored as u8)) {
                *count += 1;
            }
        }
    }

    counts
}

pub fn average_rating(reviews: &[ReviewRecord]) -> String {
    if reviews.is_empty() {
        return "0.0".to_string();
    }
    let total: f64 = reviews.iter().map(|review| review.rating).sum();
    format_one_decimal(total / reviews.len() as f64)
}

/// Formats to one decimal place, resolving an exact `.x5` tie away from zero.
///
/// `{:.1}` already rounds every non-tie to the nearest digit from the exact
/// binary value; it only differs on exact ties, where it picks the even digit.
/// A value sits exactly on a one-decimal tie only when it is an odd multiple
/// of 0.25, and for those `value * 10.0` is exact, so `round` is safe.
fn format_one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (value * 10.0).round() / 10.0);
    }
    format!("{:.1}", value)
}

pub fn aggregate(reviews: &[ReviewRecord]) -> ReviewMetadata {
    ReviewMetadata {
        total_reviews: reviews.len(),
        average_rating: average_rating(reviews),
        star_counts: star_counts(reviews),
    }
}
