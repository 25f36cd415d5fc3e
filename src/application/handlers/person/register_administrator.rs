//! RegisterAdministratorHandler - Command handler for registering an administrator.

use std::sync::Arc;

use crate::application::TicketingError;
use crate::domain::person::Person;
use crate::ports::PersonRepository;

use super::ensure_email_unused;

/// Command to register an administrator.
#[derive(Debug, Clone)]
pub struct RegisterAdministratorCommand {
    pub name: String,
    pub email: String,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterAdministratorResult {
    pub administrator: Person,
}

/// Handler for registering administrators.
pub struct RegisterAdministratorHandler {
    persons: Arc<dyn PersonRepository>,
}

impl RegisterAdministratorHandler {
    pub fn new(persons: Arc<dyn PersonRepository>) -> Self {
        Self { persons }
    }

    pub async fn handle(
        &self,
        cmd: RegisterAdministratorCommand,
    ) -> Result<RegisterAdministratorResult, TicketingError> {
        let administrator = Person::new_administrator(cmd.name, cmd.email)?;
        ensure_email_unused(self.persons.as_ref(), administrator.email()).await?;

        self.persons.add(&administrator).await?;

        tracing::info!(person_id = %administrator.id(), "Administrator registered");

        Ok(RegisterAdministratorResult { administrator })
    }
}
