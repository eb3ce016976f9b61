// Decoding of the raw listing request parameters
use crate::error::QueryError;
use crate::search::{FilterCriteria, SortKey};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub criteria: FilterCriteria,
    pub sort_key: Option<SortKey>,
    pub current_page: Option<usize>,
}

impl ListingQuery {
    /// Builds a query from the `currentPage`, `filters` and `advancedFilters` parameters.
    ///
    /// `filters` is a JSON object with `city`, `star_ratings` and `priceFilter`.
    /// `advancedFilters` is a JSON array; the first entry carrying a `sortBy` key
    /// picks the sort. An unknown `sortBy` value means no sort.
    pub fn from_params(
        current_page: Option<&str>,
        filters: &str,
        advanced_filters: Option<&str>,
    ) -> Result<Self, QueryError> {
        let criteria: FilterCriteria = serde_json::from_str(filters)
            .map_err(|e| QueryError::InvalidFilterInput(format!("filters: {}", e)))?;

        let sort_key = match advanced_filters {
            Some(raw) => parse_sort(raw)?,
            None => None,
        };

        Ok(Self {
            criteria,
            sort_key,
            current_page: parse_page(current_page)?,
        })
    }
}

fn parse_sort(advanced_filters: &str) -> Result<Option<SortKey>, QueryError> {
    let entries: Vec<Value> = serde_json::from_str(advanced_filters)
        .map_err(|e| QueryError::InvalidFilterInput(format!("advancedFilters: {}", e)))?;

    let sort_by = entries.iter().find_map(|entry| entry.get("sortBy"));
    Ok(sort_by.and_then(Value::as_str).and_then(SortKey::parse))
}

// Absent or blank means the first page; zero is handled by the paginator
fn parse_page(current_page: Option<&str>) -> Result<Option<usize>, QueryError> {
    match current_page.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<usize>().map(Some).map_err(|_| {
            QueryError::InvalidFilterInput(format!("currentPage {:?} is not a page number", raw))
        }),
    }
}
