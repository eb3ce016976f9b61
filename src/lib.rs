// Hotel listing query engine: search, review aggregation and pagination over a fixed fixture

pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod paging;
pub mod payment;
pub mod query;
pub mod reviews;
pub mod search;

// Re-export key types for convenience
pub use config::{EngineConfig, EnquiryConfig, PaymentConfig};
pub use dataset::{DatasetProvider, FixtureDataset, HotelRecord, ReviewRecord};
pub use engine::{BookingEnquiry, HotelDetail, HotelQueryEngine, HotelReviews, HotelSearchResults};
pub use error::{ConfigError, QueryError};
pub use paging::{paginate, Page, Paging};
pub use payment::{DelayedPaymentResponder, PaymentConfirmation, PaymentResponder};
pub use query::ListingQuery;
pub use reviews::{aggregate, ReviewMetadata};
pub use search::{FilterCriteria, PriceRange, SortKey};
