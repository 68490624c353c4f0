//! Response pieces shared across route modules

use std::collections::BTreeMap;

use trivia_core::Category;

/// Categories keyed by id, in id order: `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
