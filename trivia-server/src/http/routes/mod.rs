//! Route handlers organized by resource

pub mod categories;
pub mod common;
pub mod health;
pub mod questions;
pub mod quizzes;
