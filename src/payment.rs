// Delayed payment confirmation responder
// Simulates the slow payment backend the booking flow waits on after checkout

use crate::config::PaymentConfig;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use serde::Serialize;
use tokio::time::sleep;
use tracing::info;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub status: String,
    pub booking_details: Vec<BookingDetail>,
}

impl PaymentConfirmation {
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.booking_details
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value.as_str())
    }
}

#[async_trait]
pub trait PaymentResponder: Send + Sync + 'static {
    async fn confirm(&self) -> PaymentConfirmation;
}

pub struct DelayedPaymentResponder {
    config: PaymentConfig,
}

impl DelayedPaymentResponder {
    pub fn new(config: PaymentConfig) -> Self {
        Self { config }
    }

    // Build the confirmation for a stay that checks in on `today`
    pub fn confirmation_for(&self, today: NaiveDate) -> PaymentConfirmation {
        let check_in = today.format(DATE_FORMAT).to_string();
        let check_out = (today + ChronoDuration::days(self.config.stay_nights))
            .format(DATE_FORMAT)
            .to_string();
        let booking_id = format!(
            "{}{}",
            self.config.booking_id_prefix,
            rand::random::<u16>() % 1000
        );

        let detail = |label: &str, value: String| BookingDetail {
            label: label.to_string(),
            value,
        };

        PaymentConfirmation {
            status: "Payment successful".to_string(),
            booking_details: vec![
                detail("Booking ID", booking_id),
                detail("Booking Date", check_in.clone()),
                detail("Hotel Name", self.config.hotel_name.clone()),
                detail("Check-in Date", check_in),
                detail("Check-out Date", check_out),
                detail("Total Fare", self.config.total_fare.clone()),
            ],
        }
    }
}

#[async_trait]
impl PaymentResponder for DelayedPaymentResponder {
    async fn confirm(&self) -> PaymentConfirmation {
        sleep(self.config.delay).await;
        let confirmation = self.confirmation_for(Local::now().date_naive());
        info!(
            booking_id = confirmation.detail("Booking ID").unwrap_or_default(),
            "payment confirmed"
        );
        confirmation
    }
}
