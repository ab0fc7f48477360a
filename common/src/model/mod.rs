//! Content entities and the inquiry record.
//!
//! Each entity is stored in the collection named by its lowercase type name,
//! exposed as [`Collection::NAME`].

pub mod event;
pub mod gallery_item;
pub mod inquiry;
pub mod menu_item;
pub mod testimonial;

pub use event::Event;
pub use gallery_item::GalleryItem;
pub use inquiry::Inquiry;
pub use menu_item::MenuItem;
pub use testimonial::Testimonial;

/// Binds an entity to the document collection that holds it.
pub trait Collection {
    const NAME: &'static str;
}
