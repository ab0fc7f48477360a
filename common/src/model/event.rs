use crate::model::Collection;
use crate::validation::{Validate, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION: &str = "The Jefferson Bar & Grill";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub is_holiday_special: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl Collection for Event {
    const NAME: &'static str = "event";
}

impl Validate for Event {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
