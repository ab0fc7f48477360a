//! Shared data model of the Jefferson Bar & Grill site.
//!
//! The `model` module holds the content entities served by the backend and the
//! `Inquiry` record it writes. `requests` holds inbound payloads that still have
//! to be validated before they become model records.

pub mod model;
pub mod requests;
pub mod validation;
