//! Person-specific error types.
//!
//! Booking failures used to be silent no-ops. They are reported explicitly
//! so callers can tell "booked" from "skipped".

use crate::domain::foundation::{DomainError, ErrorCode, EventId, PersonId, TicketId};
use thiserror::Error;

/// Booking engine precondition failures. State is unchanged when returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The ticket is not available (booked by someone else, or locked).
    #[error("Ticket {ticket_id} is not available")]
    TicketUnavailable { ticket_id: TicketId },

    /// The customer already holds the ticket.
    #[error("Ticket {ticket_id} is already booked by this customer")]
    AlreadyBooked { ticket_id: TicketId },

    /// The customer does not hold the ticket.
    #[error("Ticket {ticket_id} is not booked by this customer")]
    NotBooked { ticket_id: TicketId },
}

impl BookingError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::TicketUnavailable { .. } => ErrorCode::TicketUnavailable,
            BookingError::AlreadyBooked { .. } => ErrorCode::TicketAlreadyBooked,
            BookingError::NotBooked { .. } => ErrorCode::BookingNotFound,
        }
    }

    /// The ticket the failed operation targeted.
    pub fn ticket_id(&self) -> TicketId {
        match self {
            BookingError::TicketUnavailable { ticket_id }
            | BookingError::AlreadyBooked { ticket_id }
            | BookingError::NotBooked { ticket_id } => *ticket_id,
        }
    }
}

impl From<BookingError> for DomainError {
    fn from(err: BookingError) -> Self {
        DomainError::new(err.code(), err.to_string())
            .with_detail("ticket_id", err.ticket_id().to_string())
    }
}

/// Errors raised when managing an administrator's events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdministratorError {
    /// The event to assign does not exist.
    #[error("Cannot assign missing event {event_id} to administrator {administrator_id}")]
    MissingEvent {
        administrator_id: PersonId,
        event_id: EventId,
    },
}

impl AdministratorError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AdministratorError::MissingEvent { .. } => ErrorCode::InvalidArgument,
        }
    }
}

impl From<AdministratorError> for DomainError {
    fn from(err: AdministratorError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
