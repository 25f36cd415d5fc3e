//! Booking configuration

use serde::Deserialize;

use crate::domain::integrity::CustomerDeletePolicy;

/// Settings for the booking core.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingConfig {
    /// What happens to a deleted customer's booked tickets
    #[serde(default)]
    pub customer_delete_policy: CustomerDeletePolicy,
}
