//! Contact form input checks
//!
//! Delivery is handled by an external mail relay; this only makes sure the
//! form is worth sending.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Check that every field is filled in
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PortfolioError::MissingField("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(PortfolioError::MissingField("email"));
        }
        if !email.contains('@') {
            return Err(PortfolioError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(PortfolioError::MissingField("message"));
        }
        Ok(())
    }

    /// Clear all fields after a successful send
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
