use crate::model::Collection;
use crate::validation::{Validate, ValidationError};
use serde::{Deserialize, Serialize};

/// A guest quote shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Person who gave the testimonial.
    pub author: String,
    pub quote: String,
    /// Star rating, 1 to 5.
    #[serde(default = "default_rating")]
    pub rating: i64,
    /// Where the quote came from (Google, Facebook, etc.).
    #[serde(default)]
    pub source: Option<String>,
}

fn default_rating() -> i64 {
    5
}

impl Collection for Testimonial {
    const NAME: &'static str = "testimonial";
}

impl Validate for Testimonial {
    fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }
        Ok(())
    }
}
