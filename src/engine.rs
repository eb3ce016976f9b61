// Query orchestrator: composes filter, sort, paginate and aggregate over the dataset
use crate::config::EngineConfig;
use crate::dataset::{DatasetProvider, HotelRecord, ReviewRecord};
use crate::error::{ConfigError, QueryError};
use crate::paging::{paginate, Paging};
use crate::query::ListingQuery;
use crate::reviews::{aggregate, ReviewMetadata};
use crate::search::{filter_hotels, sort_hotels, FilterCriteria, SortKey};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchResults {
    pub elements: Vec<HotelRecord>,
    // Filtered count before pagination
    pub total_results: usize,
    pub paging: Paging,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelReviews {
    pub elements: Vec<ReviewRecord>,
    pub metadata: ReviewMetadata,
    pub paging: Paging,
}

// Presentation view of a hotel; the stored record is cloned, never written to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelDetail {
    #[serde(flatten)]
    pub hotel: HotelRecord,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEnquiry {
    pub name: String,
    pub cancellation_policy: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub current_night_rate: f64,
    pub max_guests_allowed: u32,
    pub max_rooms_allowed_per_guest: u32,
}

pub struct HotelQueryEngine<D: DatasetProvider> {
    dataset: D,
    config: EngineConfig,
}

impl<D: DatasetProvider> HotelQueryEngine<D> {
    pub fn new(dataset: D, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { dataset, config })
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn hotel(&self, hotel_id: u64) -> Result<&HotelRecord, QueryError> {
        self.dataset.find_hotel(hotel_id).ok_or_else(|| {
            warn!(hotel_id, "hotel lookup failed");
            QueryError::NotFound(hotel_id)
        })
    }

    pub fn search_hotels(
        &self,
        criteria: &FilterCriteria,
        sort_key: Option<SortKey>,
        page: Option<usize>,
    ) -> Result<HotelSearchResults, QueryError> {
        let resolved = criteria.resolve().map_err(|e| {
            warn!(error = %e, "rejected listing criteria");
            e
        })?;

        let mut filtered = filter_hotels(
            self.dataset.all_hotels(),
            &resolved,
            self.config.rating_tolerance,
        );
        debug!(
            city = resolved.city,
            matched = filtered.len(),
            "filtered hotel listing"
        );

        sort_hotels(&mut filtered, sort_key);

        let page = paginate(&filtered, page, self.config.listing_page_size);
        debug!(
            current_page = page.paging.current_page,
            total_pages = page.paging.total_pages,
            returned = page.elements.len(),
            "paginated hotel listing"
        );

        Ok(HotelSearchResults {
            elements: page.elements.into_iter().cloned().collect(),
            total_results: filtered.len(),
            paging: page.paging,
        })
    }

    pub fn search(&self, query: &ListingQuery) -> Result<HotelSearchResults, QueryError> {
        self.search_hotels(&query.criteria, query.sort_key, query.current_page)
    }

    pub fn list_hotel_reviews(
        &self,
        hotel_id: u64,
        page: Option<usize>,
    ) -> Result<HotelReviews, QueryError> {
        let hotel = self.hotel(hotel_id)?;
        let reviews = hotel.reviews();

        let metadata = aggregate(reviews);
        let page = paginate(reviews, page, self.config.review_page_size);
        debug!(
            hotel_id,
            total_reviews = metadata.total_reviews,
            current_page = page.paging.current_page,
            "paginated hotel reviews"
        );

        Ok(HotelReviews {
            elements: page.elements,
            metadata,
            paging: page.paging,
        })
    }

    pub fn get_hotel_detail(&self, hotel_id: u64) -> Result<HotelDetail, QueryError> {
        let mut hotel = self.hotel(hotel_id)?.clone();
        // The projection's own description replaces any fixture-supplied one
        hotel.display.remove("description");
        Ok(HotelDetail {
            hotel,
            description: self.config.hotel_description.clone(),
        })
    }

    pub fn booking_enquiry(&self, hotel_id: u64) -> Result<BookingEnquiry, QueryError> {
        let hotel = self.hotel(hotel_id)?;
        let terms = &self.config.enquiry;
        Ok(BookingEnquiry {
            name: hotel.title.clone(),
            cancellation_policy: terms.cancellation_policy.clone(),
            check_in_time: terms.check_in_time.clone(),
            check_out_time: terms.check_out_time.clone(),
            current_night_rate: hotel.price,
            max_guests_allowed: terms.max_guests_allowed,
            max_rooms_allowed_per_guest: terms.max_rooms_allowed_per_guest,
        })
    }

    // Every hotel in the configured home city, dataset order, unpaginated
    pub fn nearby_hotels(&self) -> Vec<&HotelRecord> {
        self.dataset
            .all_hotels()
            .iter()
            .filter(|hotel| hotel.city == self.config.nearby_city)
            .collect()
    }
}
