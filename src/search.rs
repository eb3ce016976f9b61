// Hotel search: filter evaluation and sort stage for the listing query
use crate::dataset::{HotelRecord, NumericInput};
use crate::error::QueryError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PriceRange {
    pub start: NumericInput,
    pub end: NumericInput,
}

// Listing criteria as sent by the client; numbers may still be strings here
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub star_ratings: Option<Vec<NumericInput>>,
    #[serde(default, rename = "priceFilter")]
    pub price_filter: Option<PriceRange>,
}

impl FilterCriteria {
    pub fn for_city(city: &str) -> Self {
        Self {
            city: city.to_string(),
            ..Default::default()
        }
    }

    pub fn with_star_ratings(mut self, ratings: &[&str]) -> Self {
        self.star_ratings = Some(ratings.iter().map(|r| NumericInput::from(*r)).collect());
        self
    }

    pub fn with_price_range(mut self, start: f64, end: f64) -> Self {
        self.price_filter = Some(PriceRange {
            start: start.into(),
            end: end.into(),
        });
        self
    }

    // Parse every numeric token up front so the filter loop only compares numbers
    pub fn resolve(&self) -> Result<ResolvedCriteria<'_>, QueryError> {
        let star_ratings = self
            .star_ratings
            .iter()
            .flatten()
            .map(|rating| {
                rating.to_f64().ok_or_else(|| {
                    QueryError::InvalidFilterInput(format!("star rating {} is not a number", rating))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let price_range = match &self.price_filter {
            Some(range) => {
                let start = range.start.to_f64().ok_or_else(|| {
                    QueryError::InvalidFilterInput(format!("price start {} is not a number", range.start))
                })?;
                let end = range.end.to_f64().ok_or_else(|| {
                    QueryError::InvalidFilterInput(format!("price end {} is not a number", range.end))
                })?;
                Some((start, end))
            }
            None => None,
        };

        Ok(ResolvedCriteria {
            city: &self.city,
            star_ratings,
            price_range,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCriteria<'a> {
    pub city: &'a str,
    pub star_ratings: Vec<f64>,
    pub price_range: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortKey {
    // Unknown keys leave the filtered order untouched, so they map to None
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "priceLowToHigh" => Some(SortKey::PriceLowToHigh),
            "priceHighToLow" => Some(SortKey::PriceHighToLow),
            _ => None,
        }
    }
}

// Narrow hotels by city, price range and star-rating proximity, keeping dataset order
pub fn filter_hotels<'a>(
    hotels: &'a [HotelRecord],
    criteria: &ResolvedCriteria<'_>,
    rating_tolerance: f64,
) -> Vec<&'a HotelRecord> {
    let mut filtered = Vec::new();

    for hotel in hotels {
        if !criteria.city.is_empty() && hotel.city != criteria.city {
            continue;
        }

        if !criteria
            .price_range
            .map_or(true, |(start, end)| hotel.price >= start && hotel.price <= end)
        {
            continue;
        }

        if !criteria.star_ratings.is_empty()
            && !criteria
                .star_ratings
                .iter()
                .any(|desired| (hotel.ratings - desired).abs() <= rating_tolerance)
        {
            continue;
        }

        filtered.push(hotel);
    }

    filtered
}

// Stable: hotels with equal prices keep their filtered relative order in both directions
pub fn sort_hotels(hotels: &mut [&HotelRecord], sort_key: Option<SortKey>) {
    match sort_key {
        Some(SortKey::PriceLowToHigh) => hotels.sort_by(|a, b| a.price.total_cmp(&b.price)),
        Some(SortKey::PriceHighToLow) => hotels.sort_by(|a, b| b.price.total_cmp(&a.price)),
        None => {}
    }
}
