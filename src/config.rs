// Engine configuration
use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_LISTING_PAGE_SIZE: usize = 6;
pub const DEFAULT_REVIEW_PAGE_SIZE: usize = 5;
pub const DEFAULT_RATING_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub listing_page_size: usize,
    pub review_page_size: usize,
    // Inclusive distance between a hotel's rating and a requested star bucket
    pub rating_tolerance: f64,
    pub nearby_city: String,
    pub hotel_description: Vec<String>,
    pub enquiry: EnquiryConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            listing_page_size: DEFAULT_LISTING_PAGE_SIZE,
            review_page_size: DEFAULT_REVIEW_PAGE_SIZE,
            rating_tolerance: DEFAULT_RATING_TOLERANCE,
            nearby_city: "lilongwe".to_string(),
            hotel_description: vec![
                "A serene stay awaits at our plush hotel, offering a blend of luxury and comfort with top-notch amenities.".to_string(),
                "Experience the pinnacle of elegance in our beautifully designed rooms with stunning cityscape views.".to_string(),
                "Indulge in gastronomic delights at our in-house restaurants, featuring local and international cuisines.".to_string(),
                "Unwind in our state-of-the-art spa and wellness center, a perfect retreat for the senses.".to_string(),
                "Located in the heart of the city, our hotel is the ideal base for both leisure and business travelers.".to_string(),
            ],
            enquiry: EnquiryConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listing_page_size == 0 {
            return Err(ConfigError::ZeroPageSize("hotel listings"));
        }
        if self.review_page_size == 0 {
            return Err(ConfigError::ZeroPageSize("hotel reviews"));
        }
        if !self.rating_tolerance.is_finite() || self.rating_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.rating_tolerance));
        }
        Ok(())
    }
}

// Static terms quoted back by the booking enquiry lookup
#[derive(Debug, Clone)]
pub struct EnquiryConfig {
    pub cancellation_policy: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub max_guests_allowed: u32,
    pub max_rooms_allowed_per_guest: u32,
}

impl Default for EnquiryConfig {
    fn default() -> Self {
        Self {
            cancellation_policy: "Free cancellation 1 day prior to stay".to_string(),
            check_in_time: "12:00 PM".to_string(),
            check_out_time: "10:00 AM".to_string(),
            max_guests_allowed: 5,
            max_rooms_allowed_per_guest: 3,
        }
    }
}

// Payment confirmation responder configuration
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub delay: Duration,
    pub booking_id_prefix: String,
    pub hotel_name: String,
    pub total_fare: String,
    pub stay_nights: i64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(6),
            booking_id_prefix: "BKG".to_string(),
            hotel_name: "Seaside Resort".to_string(),
            total_fare: "MWK14,500".to_string(),
            stay_nights: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.listing_page_size, 6);
        assert_eq!(config.review_page_size, 5);
        assert_eq!(config.hotel_description.len(), 5);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = EngineConfig {
            review_page_size: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroPageSize("hotel reviews"))
        );
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config = EngineConfig {
            rating_tolerance: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTolerance(_))
        ));
    }
}
