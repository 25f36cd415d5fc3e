//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    InvalidArgument,

    // Not found errors
    PersonNotFound,
    VenueNotFound,
    CategoryNotFound,
    EventNotFound,
    TicketNotFound,

    // Precondition errors
    TicketUnavailable,
    TicketAlreadyBooked,
    BookingNotFound,
    DuplicateTicket,
    EventCancelled,
    WrongPersonType,

    // Integrity errors
    DuplicateEntity,
    ReferentialViolation,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::PersonNotFound => "PERSON_NOT_FOUND",
            ErrorCode::VenueNotFound => "VENUE_NOT_FOUND",
            ErrorCode::CategoryNotFound => "CATEGORY_NOT_FOUND",
            ErrorCode::EventNotFound => "EVENT_NOT_FOUND",
            ErrorCode::TicketNotFound => "TICKET_NOT_FOUND",
            ErrorCode::TicketUnavailable => "TICKET_UNAVAILABLE",
            ErrorCode::TicketAlreadyBooked => "TICKET_ALREADY_BOOKED",
            ErrorCode::BookingNotFound => "BOOKING_NOT_FOUND",
            ErrorCode::DuplicateTicket => "DUPLICATE_TICKET",
            ErrorCode::EventCancelled => "EVENT_CANCELLED",
            ErrorCode::WrongPersonType => "WRONG_PERSON_TYPE",
            ErrorCode::DuplicateEntity => "DUPLICATE_ENTITY",
            ErrorCode::ReferentialViolation => "REFERENTIAL_VIOLATION",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

impl ErrorCode {
    /// Returns true for the "entity does not exist" family of codes.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::PersonNotFound
                | ErrorCode::VenueNotFound
                | ErrorCode::CategoryNotFound
                | ErrorCode::EventNotFound
                | ErrorCode::TicketNotFound
        )
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Creates a not-found error carrying the missing identifier.
    pub fn not_found(code: ErrorCode, id: impl fmt::Display) -> Self {
        let id = id.to_string();
        Self::new(code, format!("No record with id {}", id)).with_detail("id", id)
    }

    /// Creates a referential integrity violation.
    pub fn referential_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ReferentialViolation, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        DomainError::new(code, err.to_string())
    }
}
