//! Records exchanged between the directory backend and the frontend.
//!
//! The search endpoint answers with a JSON array of [`SearchResult`]s; everything
//! the page shows (cards, the company table, map markers) is derived from that list.

mod contact;
mod directory;
mod map;

pub use contact::{ContactDetails, ContactDraft, ContactField, CONTACT_FIELDS};
pub use directory::{distinct_companies, Address, Company, Product, SearchResult};
pub use map::{marker_plan, Coordinate, MarkerPlan};
