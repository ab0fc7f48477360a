use crate::model::Collection;
use crate::validation::{Validate, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// e.g. Starters, Mains, Grills, Cocktails, Beer.
    pub category: String,
    #[serde(default)]
    pub is_seasonal: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Collection for MenuItem {
    const NAME: &'static str = "menuitem";
}

impl Validate for MenuItem {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::NegativePrice(self.price));
        }
        Ok(())
    }
}
