//! Customer contact messages.
//!
//! Unlike the content entities, an `Inquiry` is only ever written by the
//! backend. It can only be built from an [`InquiryIn`] payload through
//! `TryFrom`, which is where the email address is checked and the `source`
//! default is applied.

use crate::model::Collection;
use crate::requests::InquiryIn;
use crate::validation::{is_valid_email, Validate, ValidationError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE: &str = "website";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

impl Collection for Inquiry {
    const NAME: &'static str = "inquiry";
}

impl Validate for Inquiry {
    fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

impl TryFrom<InquiryIn> for Inquiry {
    type Error = ValidationError;

    fn try_from(payload: InquiryIn) -> Result<Self, Self::Error> {
        let inquiry = Inquiry {
            name: payload.name,
            email: payload.email.trim().to_string(),
            message: payload.message,
            phone: payload.phone,
            source: default_source(),
        };
        inquiry.validate()?;
        Ok(inquiry)
    }
}
