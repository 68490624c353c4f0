//! trivia-core: domain model and selection logic for the trivia API
//!
//! Everything in here is pure and synchronous. Stores and the HTTP layer
//! live in `trivia-server`; this crate only slices, filters and picks from
//! sequences that have already been loaded.

pub mod error;
pub mod model;
pub mod paginate;
pub mod quiz;
pub mod search;

pub use error::ValidationError;
pub use model::{Category, CategoryFilter, NewQuestion, Question};
pub use paginate::{paginate, PageRequest, PaginationParams, PAGE_SIZE};
pub use quiz::next_question;
pub use search::search;
