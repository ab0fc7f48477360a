use crate::model::Collection;
use crate::validation::{Validate, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    pub image_url: String,
    /// interior, exterior, food, people, holiday
    #[serde(default)]
    pub category: Option<String>,
}

impl Collection for GalleryItem {
    const NAME: &'static str = "galleryitem";
}

impl Validate for GalleryItem {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
