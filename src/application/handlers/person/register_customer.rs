//! RegisterCustomerHandler - Command handler for registering a customer.

use std::sync::Arc;

use crate::application::TicketingError;
use crate::domain::person::Person;
use crate::ports::PersonRepository;

use super::ensure_email_unused;

/// Command to register a customer.
#[derive(Debug, Clone)]
pub struct RegisterCustomerCommand {
    pub name: String,
    pub email: String,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterCustomerResult {
    pub customer: Person,
}

/// Handler for registering customers. Emails are unique across persons.
pub struct RegisterCustomerHandler {
    persons: Arc<dyn PersonRepository>,
}

impl RegisterCustomerHandler {
    pub fn new(persons: Arc<dyn PersonRepository>) -> Self {
        Self { persons }
    }

    pub async fn handle(
        &self,
        cmd: RegisterCustomerCommand,
    ) -> Result<RegisterCustomerResult, TicketingError> {
        let customer = Person::new_customer(cmd.name, cmd.email)?;
        ensure_email_unused(self.persons.as_ref(), customer.email()).await?;

        self.persons.add(&customer).await?;

        tracing::info!(person_id = %customer.id(), "Customer registered");

        Ok(RegisterCustomerResult { customer })
    }
}
