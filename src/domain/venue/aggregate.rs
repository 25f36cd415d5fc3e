//! Venue entity.

use crate::domain::foundation::{ValidationError, VenueId};
use serde::{Deserialize, Serialize};

use super::Address;

/// A place where events are held.
///
/// Venue lifecycle is independent of the events that reference it; the
/// store refuses to delete a venue that is still referenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    id: VenueId,
    name: String,
    address: Address,
    capacity: u32,
}

impl Venue {
    /// Creates a venue.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if `name` is blank.
    pub fn new(
        name: impl Into<String>,
        address: Address,
        capacity: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: VenueId::new(),
            name,
            address,
            capacity,
        })
    }

    pub fn id(&self) -> VenueId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Seats left after `booked` seats are taken.
    ///
    /// Negative when the venue is overbooked.
    pub fn available_seats(&self, booked: u32) -> i64 {
        i64::from(self.capacity) - i64::from(booked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stadthalle() -> Venue {
        Venue::new(
            "Stadthalle",
            Address::new("123 Main St", "Vienna", "1010"),
            5000,
        )
        .unwrap()
    }

    #[test]
    fn venue_owns_its_address() {
        let venue = stadthalle();
        assert_eq!(venue.address().city, "Vienna");
        assert_eq!(venue.address().postal_code, "1010");
    }

    #[test]
    fn available_seats_subtracts_booked() {
        let venue = stadthalle();
        assert_eq!(venue.available_seats(0), 5000);
        assert_eq!(venue.available_seats(1200), 3800);
    }

    #[test]
    fn available_seats_goes_negative_when_overbooked() {
        let venue = Venue::new("Club", Address::default(), 10).unwrap();
        assert_eq!(venue.available_seats(12), -2);
    }

    #[test]
    fn new_rejects_blank_name() {
        let result = Venue::new("", Address::default(), 10);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }
}
