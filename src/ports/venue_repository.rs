//! Venue repository port.

use crate::domain::foundation::{Repository, VenueId};
use crate::domain::venue::Venue;

/// Repository port for [`Venue`] records.
///
/// `remove` is rejected with `ReferentialViolation` while any event still
/// references the venue.
pub trait VenueRepository: Repository<Venue, VenueId> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn VenueRepository) {}
}
