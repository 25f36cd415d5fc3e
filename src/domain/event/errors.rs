//! Event-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, EventId, TicketId};
use thiserror::Error;

/// Errors raised by the [`Event`](super::Event) aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// The ticket is already part of the event; the event is unchanged.
    #[error("Ticket {ticket_id} is already part of event {event_id}")]
    DuplicateTicket { event_id: EventId, ticket_id: TicketId },

    /// The ticket does not belong to the event.
    #[error("Ticket {ticket_id} does not belong to event {event_id}")]
    TicketNotFound { event_id: EventId, ticket_id: TicketId },

    /// The event was cancelled and takes no further changes to its tickets.
    #[error("Event {event_id} is cancelled")]
    EventCancelled { event_id: EventId },
}

impl EventError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EventError::DuplicateTicket { .. } => ErrorCode::DuplicateTicket,
            EventError::TicketNotFound { .. } => ErrorCode::TicketNotFound,
            EventError::EventCancelled { .. } => ErrorCode::EventCancelled,
        }
    }
}

impl From<EventError> for DomainError {
    fn from(err: EventError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            EventError::EventCancelled { event_id } => {
                domain.with_detail("event_id", event_id.to_string())
            }
            _ => domain,
        }
    }
}
