//! Application-level error type returned by every handler.
//!
//! # Error Code Mapping
//!
//! | Error | Code |
//! |-------|------|
//! | NotFound | `*_NOT_FOUND` |
//! | WrongPersonType | WRONG_PERSON_TYPE |
//! | Booking | TICKET_UNAVAILABLE / TICKET_ALREADY_BOOKED / BOOKING_NOT_FOUND |
//! | Event | DUPLICATE_TICKET / TICKET_NOT_FOUND |
//! | Administrator | INVALID_ARGUMENT |
//! | Validation | EMPTY_FIELD / OUT_OF_RANGE / INVALID_FORMAT |
//! | Conflict | DUPLICATE_ENTITY |
//! | ReferentialViolation | REFERENTIAL_VIOLATION |
//! | Infrastructure | DATABASE_ERROR |

use std::fmt;

use crate::domain::event::EventError;
use crate::domain::foundation::{
    DomainError, ErrorCode, EventId, PersonId, TicketId, ValidationError,
};
use crate::domain::person::{AdministratorError, BookingError, PersonType};

/// Kind of record a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Venue,
    Event,
    Ticket,
    Category,
}

impl EntityKind {
    fn code(&self) -> ErrorCode {
        match self {
            EntityKind::Person => ErrorCode::PersonNotFound,
            EntityKind::Venue => ErrorCode::VenueNotFound,
            EntityKind::Event => ErrorCode::EventNotFound,
            EntityKind::Ticket => ErrorCode::TicketNotFound,
            EntityKind::Category => ErrorCode::CategoryNotFound,
        }
    }

    fn from_code(code: ErrorCode) -> Option<Self> {
        match code {
            ErrorCode::PersonNotFound => Some(EntityKind::Person),
            ErrorCode::VenueNotFound => Some(EntityKind::Venue),
            ErrorCode::EventNotFound => Some(EntityKind::Event),
            ErrorCode::TicketNotFound => Some(EntityKind::Ticket),
            ErrorCode::CategoryNotFound => Some(EntityKind::Category),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Person => "Person",
            EntityKind::Venue => "Venue",
            EntityKind::Event => "Event",
            EntityKind::Ticket => "Ticket",
            EntityKind::Category => "Category",
        };
        write!(f, "{}", s)
    }
}

/// Errors returned by ticketing handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketingError {
    /// A referenced record does not exist.
    NotFound { entity: EntityKind, id: String },

    /// The person exists but has the wrong role for the operation.
    WrongPersonType {
        person_id: PersonId,
        expected: PersonType,
    },

    /// Booking precondition failed; nothing was changed.
    Booking(BookingError),

    /// Event aggregate rejected the change.
    Event(EventError),

    /// Administrator aggregate rejected the change.
    Administrator(AdministratorError),

    /// Input failed validation.
    Validation(ValidationError),

    /// A record with the same identity already exists.
    Conflict(String),

    /// The change would leave a dangling reference.
    ReferentialViolation(String),

    /// Store failure.
    Infrastructure(String),
}

impl TicketingError {
    pub fn not_found(entity: EntityKind, id: impl fmt::Display) -> Self {
        TicketingError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn not_a_customer(person_id: PersonId) -> Self {
        TicketingError::WrongPersonType {
            person_id,
            expected: PersonType::Customer,
        }
    }

    pub fn not_an_administrator(person_id: PersonId) -> Self {
        TicketingError::WrongPersonType {
            person_id,
            expected: PersonType::Administrator,
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        TicketingError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TicketingError::NotFound { entity, .. } => entity.code(),
            TicketingError::WrongPersonType { .. } => ErrorCode::WrongPersonType,
            TicketingError::Booking(err) => err.code(),
            TicketingError::Event(err) => err.code(),
            TicketingError::Administrator(err) => err.code(),
            TicketingError::Validation(err) => DomainError::from(err.clone()).code,
            TicketingError::Conflict(_) => ErrorCode::DuplicateEntity,
            TicketingError::ReferentialViolation(_) => ErrorCode::ReferentialViolation,
            TicketingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            TicketingError::NotFound { entity, id } => format!("{} not found: {}", entity, id),
            TicketingError::WrongPersonType {
                person_id,
                expected,
            } => format!("Person {} is not a {}", person_id, expected),
            TicketingError::Booking(err) => err.to_string(),
            TicketingError::Event(err) => err.to_string(),
            TicketingError::Administrator(err) => err.to_string(),
            TicketingError::Validation(err) => err.to_string(),
            TicketingError::Conflict(msg) => format!("Conflict: {}", msg),
            TicketingError::ReferentialViolation(msg) => msg.clone(),
            TicketingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if the caller may retry the same command.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TicketingError::Infrastructure(_))
    }
}

impl fmt::Display for TicketingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TicketingError {}

impl From<DomainError> for TicketingError {
    fn from(err: DomainError) -> Self {
        if let Some(entity) = EntityKind::from_code(err.code) {
            let id = err
                .details
                .get("id")
                .cloned()
                .unwrap_or_else(|| err.message.clone());
            return TicketingError::NotFound { entity, id };
        }
        match err.code {
            ErrorCode::ReferentialViolation => TicketingError::ReferentialViolation(err.message),
            ErrorCode::DuplicateEntity => TicketingError::Conflict(err.message),
            ErrorCode::TicketUnavailable => {
                let ticket_id = err
                    .details
                    .get("ticket_id")
                    .and_then(|s| s.parse::<TicketId>().ok());
                match ticket_id {
                    Some(ticket_id) => {
                        TicketingError::Booking(BookingError::TicketUnavailable { ticket_id })
                    }
                    None => TicketingError::Infrastructure(err.to_string()),
                }
            }
            ErrorCode::EventCancelled => {
                let event_id = err
                    .details
                    .get("event_id")
                    .and_then(|s| s.parse::<EventId>().ok());
                match event_id {
                    Some(event_id) => TicketingError::Event(EventError::EventCancelled { event_id }),
                    None => TicketingError::Infrastructure(err.to_string()),
                }
            }
            _ => TicketingError::Infrastructure(err.to_string()),
        }
    }
}

impl From<BookingError> for TicketingError {
    fn from(err: BookingError) -> Self {
        TicketingError::Booking(err)
    }
}

impl From<EventError> for TicketingError {
    fn from(err: EventError) -> Self {
        TicketingError::Event(err)
    }
}

impl From<AdministratorError> for TicketingError {
    fn from(err: AdministratorError) -> Self {
        TicketingError::Administrator(err)
    }
}

impl From<ValidationError> for TicketingError {
    fn from(err: ValidationError) -> Self {
        TicketingError::Validation(err)
    }
}

impl From<TicketingError> for DomainError {
    fn from(err: TicketingError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
