//! Person handlers.
//!
//! ## Commands
//! - Registering customers and administrators
//! - Assigning managed events to an administrator
//! - Deleting a person (customer-delete policy applies)

mod assign_managed_event;
mod delete_person;
mod register_administrator;
mod register_customer;

use crate::application::TicketingError;
use crate::ports::PersonRepository;

pub use assign_managed_event::{
    AssignManagedEventCommand, AssignManagedEventHandler, AssignManagedEventResult,
};
pub use delete_person::{DeletePersonCommand, DeletePersonHandler, DeletePersonResult};
pub use register_administrator::{
    RegisterAdministratorCommand, RegisterAdministratorHandler, RegisterAdministratorResult,
};
pub use register_customer::{
    RegisterCustomerCommand, RegisterCustomerHandler, RegisterCustomerResult,
};

/// Rejects an email that is already registered.
async fn ensure_email_unused(
    persons: &dyn PersonRepository,
    email: &str,
) -> Result<(), TicketingError> {
    match persons.find_by_email(email).await? {
        Some(existing) => Err(TicketingError::Conflict(format!(
            "Email {} is already registered to person {}",
            email,
            existing.id()
        ))),
        None => Ok(()),
    }
}
