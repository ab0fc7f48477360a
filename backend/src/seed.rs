//! # Seed Bootstrapper
//!
//! Fills empty content collections with a fixed set of sample documents so a
//! fresh deployment has something to show.
//!
//! - Runs once from `main.rs`, before the HTTP server is bound.
//! - Collections are visited in a fixed order: testimonial, menuitem, event,
//!   galleryitem.
//! - A collection that already holds documents is left alone, so restarts
//!   never duplicate content.
//! - Each collection is written in a single transaction. One collection
//!   failing does not stop the others.
//!
//! Failures never block startup: the caller receives a [`SeedReport`] (or the
//! store error when the store is unreachable altogether), logs it and moves
//! on.

use crate::store::{to_document, Document, DocumentStore, StoreError, StoreResult};
use chrono::{Duration, Utc};
use jefferson_common::model::event::DEFAULT_LOCATION;
use jefferson_common::model::{Collection, Event, GalleryItem, MenuItem, Testimonial};
use log::{info, warn};
use serde::Serialize;

/// What happened to one collection during seeding.
#[derive(Debug)]
pub enum SeedOutcome {
    /// The collection was empty and received this many documents.
    Seeded(usize),
    /// The collection already held this many documents.
    AlreadyPopulated(u64),
    Failed(StoreError),
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub outcomes: Vec<(&'static str, SeedOutcome)>,
}

impl SeedReport {
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &StoreError)> {
        self.outcomes.iter().filter_map(|(name, outcome)| match outcome {
            SeedOutcome::Failed(err) => Some((*name, err)),
            _ => None,
        })
    }

    pub fn log(&self) {
        for (collection, outcome) in &self.outcomes {
            match outcome {
                SeedOutcome::Seeded(n) => info!("Seeded {} with {} documents", collection, n),
                SeedOutcome::AlreadyPopulated(n) => {
                    info!("Skipping seed for {}: {} documents present", collection, n)
                }
                SeedOutcome::Failed(err) => warn!("Seeding {} failed: {}", collection, err),
            }
        }
    }
}

/// Seeds every empty content collection.
///
/// Returns `Err` only when the store has no live connection; per-collection
/// failures are reported in the [`SeedReport`].
pub fn seed_default_content(store: &DocumentStore) -> StoreResult<SeedReport> {
    if !store.is_connected() {
        return Err(StoreError::Unavailable);
    }

    let mut report = SeedReport::default();
    report.outcomes.push(seed_collection::<Testimonial>(store, testimonials));
    report.outcomes.push(seed_collection::<MenuItem>(store, menu_items));
    report.outcomes.push(seed_collection::<Event>(store, events));
    report.outcomes.push(seed_collection::<GalleryItem>(store, gallery_items));
    Ok(report)
}

fn seed_collection<T>(
    store: &DocumentStore,
    samples: fn() -> Vec<T>,
) -> (&'static str, SeedOutcome)
where
    T: Collection + Serialize,
{
    let outcome = match store.count(T::NAME) {
        Ok(0) => match insert_samples(store, samples()) {
            Ok(n) => SeedOutcome::Seeded(n),
            Err(err) => SeedOutcome::Failed(err),
        },
        Ok(existing) => SeedOutcome::AlreadyPopulated(existing),
        Err(err) => SeedOutcome::Failed(err),
    };
    (T::NAME, outcome)
}

fn insert_samples<T>(store: &DocumentStore, samples: Vec<T>) -> StoreResult<usize>
where
    T: Collection + Serialize,
{
    let documents = samples
        .iter()
        .map(|sample| to_document(T::NAME, sample))
        .collect::<StoreResult<Vec<Document>>>()?;
    Ok(store.insert_many(T::NAME, documents)?.len())
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Local Regular".to_string(),
            quote: "Food was great, beer was affordable, and the vibe felt like home.".to_string(),
            rating: 5,
            source: Some("Google".to_string()),
        },
        Testimonial {
            author: "First-time Visitor".to_string(),
            quote: "Warm staff, great cocktails, and the neighborhood energy is real.".to_string(),
            rating: 5,
            source: Some("Facebook".to_string()),
        },
    ]
}

fn menu_item(name: &str, description: &str, price: f64, category: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
        category: category.to_string(),
        is_seasonal: false,
        tags: Vec::new(),
    }
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        menu_item("Smash Burger", "Double patty, melted cheese, house sauce", 12.0, "Mains"),
        menu_item("Wings", "Crispy wings, choice of sauces", 11.0, "Starters"),
        menu_item("House Old Fashioned", "Bourbon, bitters, orange twist", 10.0, "Cocktails"),
        MenuItem {
            is_seasonal: true,
            ..menu_item("Holiday Spiced Cider", "Seasonal, warm and cozy", 8.0, "Cocktails")
        },
    ]
}

fn holiday_event(title: &str, description: &str, days_ahead: i64) -> Event {
    Event {
        title: title.to_string(),
        description: Some(description.to_string()),
        start_time: Utc::now() + Duration::days(days_ahead),
        end_time: None,
        location: DEFAULT_LOCATION.to_string(),
        is_holiday_special: true,
        image_url: None,
    }
}

fn events() -> Vec<Event> {
    vec![
        holiday_event(
            "Holiday Trivia Night",
            "Bring your crew for festive trivia and prizes.",
            3,
        ),
        holiday_event(
            "Christmas Eve Dinner Specials",
            "Limited-run holiday plates and cocktails.",
            7,
        ),
    ]
}

fn gallery_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            title: "Warm Lit Bar".to_string(),
            image_url: "/images/bar-warm.jpg".to_string(),
            category: Some("interior".to_string()),
        },
        GalleryItem {
            title: "Holiday Lights".to_string(),
            image_url: "/images/holiday-lights.jpg".to_string(),
            category: Some("holiday".to_string()),
        },
    ]
}
