// Dataset provider: the fixed hotel/review fixture every query runs against
use crate::error::QueryError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::info;

// Sample fixture (stored in the samples directory)
pub const SAMPLE_HOTELS_PATH: &str = "samples/hotels.json";

/// Parses a fixture or request number such as `"1,150"`, `"4.5"` or `" 80 "`.
///
/// Thousands-separator commas are stripped before parsing. Non-finite values
/// are rejected so that every later comparison is total.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

// A numeric value that may arrive either as a JSON number or a JSON string
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            NumericInput::Number(n) if n.is_finite() => Some(*n),
            NumericInput::Number(_) => None,
            NumericInput::Text(s) => parse_numeric(s),
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Number(n) => write!(f, "{}", n),
            NumericInput::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

fn de_numeric<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumericInput::deserialize(deserializer)?;
    raw.to_f64()
        .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {}", raw)))
}

fn de_hotel_code<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumericInput::deserialize(deserializer)?;
    let code = match &raw {
        NumericInput::Number(n) if *n >= 0.0 && *n < u64::MAX as f64 && n.fract() == 0.0 => {
            Some(*n as u64)
        }
        NumericInput::Number(_) => None,
        NumericInput::Text(s) => s.trim().parse::<u64>().ok(),
    };
    code.ok_or_else(|| serde::de::Error::custom(format!("invalid hotel code {}", raw)))
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReviewRecord {
    #[serde(deserialize_with = "de_numeric")]
    pub rating: f64,
    // Reviewer name, text, date: carried through untouched
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ReviewRecord {
    pub fn new(rating: f64) -> Self {
        Self {
            rating,
            details: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ReviewCollection {
    #[serde(default)]
    pub data: Vec<ReviewRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    #[serde(deserialize_with = "de_hotel_code")]
    pub hotel_code: u64,
    pub title: String,
    pub city: String,
    #[serde(deserialize_with = "de_numeric")]
    pub ratings: f64,
    #[serde(deserialize_with = "de_numeric")]
    pub price: f64,
    #[serde(default)]
    pub reviews: ReviewCollection,
    // Images, subtitles, benefits and the like
    #[serde(flatten)]
    pub display: Map<String, Value>,
}

impl HotelRecord {
    pub fn new(hotel_code: u64, title: &str, city: &str, ratings: f64, price: f64) -> Self {
        Self {
            hotel_code,
            title: title.to_string(),
            city: city.to_string(),
            ratings,
            price,
            reviews: ReviewCollection::default(),
            display: Map::new(),
        }
    }

    pub fn with_reviews(mut self, reviews: Vec<ReviewRecord>) -> Self {
        self.reviews = ReviewCollection { data: reviews };
        self
    }

    pub fn reviews(&self) -> &[ReviewRecord] {
        &self.reviews.data
    }
}

// Read-only source of hotel records, loaded once and never refreshed
pub trait DatasetProvider: Send + Sync + 'static {
    // All hotels in fixture order
    fn all_hotels(&self) -> &[HotelRecord];

    fn find_hotel(&self, hotel_code: u64) -> Option<&HotelRecord> {
        self.all_hotels()
            .iter()
            .find(|hotel| hotel.hotel_code == hotel_code)
    }
}

#[derive(Debug, Clone)]
pub struct FixtureDataset {
    hotels: Vec<HotelRecord>,
}

impl FixtureDataset {
    pub fn new(hotels: Vec<HotelRecord>) -> Result<Self, QueryError> {
        let mut seen = HashSet::with_capacity(hotels.len());
        for hotel in &hotels {
            if !seen.insert(hotel.hotel_code) {
                return Err(QueryError::Dataset(format!(
                    "duplicate hotel code {}",
                    hotel.hotel_code
                )));
            }
        }
        Ok(Self { hotels })
    }

    // Parse a JSON array of hotel records
    pub fn from_json(json_str: &str) -> Result<Self, QueryError> {
        let hotels: Vec<HotelRecord> =
            serde_json::from_str(json_str).map_err(|e| QueryError::Dataset(e.to_string()))?;
        Self::new(hotels)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            hotels = dataset.hotels.len(),
            "loaded hotel fixture"
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

impl DatasetProvider for FixtureDataset {
    fn all_hotels(&self) -> &[HotelRecord] {
        &self.hotels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1,150", Some(1150.0); "thousands separator")]
    #[test_case("1,234,567.5", Some(1234567.5); "several separators")]
    #[test_case(" 4.5 ", Some(4.5); "surrounding whitespace")]
    #[test_case("abc", None; "not a number")]
    #[test_case("", None; "empty")]
    #[test_case("inf", None; "non finite")]
    fn test_parse_numeric(raw: &str, expected: Option<f64>) {
        assert_eq!(parse_numeric(raw), expected);
    }

    #[test]
    fn test_string_fields_are_normalized() {
        let json = r#"[
            {
                "hotelCode": "71222",
                "title": "Lake View",
                "city": "lilongwe",
                "ratings": "4.2",
                "price": "1,150",
                "imageUrl": "/images/hotels/1.jpg",
                "reviews": { "data": [ { "rating": 5, "reviewerName": "Ann" } ] }
            },
            {
                "hotelCode": 71223,
                "title": "Budget Inn",
                "city": "blantyre",
                "ratings": 3,
                "price": 80
            }
        ]"#;

        let dataset = FixtureDataset::from_json(json).unwrap();
        assert_eq!(dataset.len(), 2);

        let first = dataset.find_hotel(71222).unwrap();
        assert_eq!(first.price, 1150.0);
        assert_eq!(first.ratings, 4.2);
        assert_eq!(first.reviews().len(), 1);
        assert_eq!(first.reviews()[0].details["reviewerName"], "Ann");
        assert_eq!(first.display["imageUrl"], "/images/hotels/1.jpg");

        let second = dataset.find_hotel(71223).unwrap();
        assert!(second.reviews().is_empty());
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let json = r#"[{"hotelCode": "1", "title": "X", "city": "zomba", "ratings": "4", "price": "cheap"}]"#;
        let result = FixtureDataset::from_json(json);
        assert!(matches!(result, Err(QueryError::Dataset(_))));
    }

    #[test_case("1e30"; "beyond u64 range")]
    #[test_case("-5"; "negative")]
    #[test_case("12.5"; "fractional")]
    #[test_case("\"A12\""; "not numeric text")]
    fn test_invalid_hotel_code_rejected(code: &str) {
        let json = format!(
            r#"[{{"hotelCode": {}, "title": "X", "city": "zomba", "ratings": 4, "price": 10}}]"#,
            code
        );
        let result = FixtureDataset::from_json(&json);
        assert!(matches!(result, Err(QueryError::Dataset(_))));
    }

    #[test]
    fn test_duplicate_hotel_code_rejected() {
        let hotels = vec![
            HotelRecord::new(1, "A", "zomba", 4.0, 10.0),
            HotelRecord::new(1, "B", "zomba", 3.0, 20.0),
        ];
        let result = FixtureDataset::new(hotels);
        assert!(matches!(result, Err(QueryError::Dataset(_))));
    }

    #[test]
    fn test_missing_hotel_returns_none() {
        let dataset = FixtureDataset::new(vec![HotelRecord::new(1, "A", "zomba", 4.0, 10.0)])
            .unwrap();
        assert!(dataset.find_hotel(2).is_none());
    }

    #[test]
    fn test_load_sample_fixture() {
        let dataset = FixtureDataset::load(SAMPLE_HOTELS_PATH);
        assert!(
            dataset.is_ok(),
            "Failed to load sample fixture: {:?}",
            dataset.err()
        );
        assert_eq!(dataset.unwrap().len(), 7);
    }

    #[test]
    fn test_load_missing_file() {
        let result = FixtureDataset::load("samples/does_not_exist.json");
        assert!(matches!(result, Err(QueryError::Io(_))));
    }
}
