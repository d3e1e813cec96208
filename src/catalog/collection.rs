//! "My agents" pre-filter
//!
//! Narrows the catalog to the agents a player owns before team generation.

use std::collections::HashSet;

use super::Catalog;
use super::character::Character;

/// Keep only the catalog entries named in `owned`, in catalog order.
///
/// Unknown names are skipped with a warning; repeated names count once.
pub fn restrict<S: AsRef<str>>(catalog: &Catalog, owned: &[S]) -> Vec<Character> {
    let mut wanted = HashSet::new();

    for name in owned {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        match catalog.get(name) {
            Some(c) => {
                wanted.insert(c.agent.clone());
            }
            None => log::warn!("Agent '{}' in collection is not in the catalog, skipping", name),
        }
    }

    let pool: Vec<Character> = catalog
        .characters()
        .iter()
        .filter(|c| wanted.contains(&c.agent))
        .cloned()
        .collect();

    log::debug!("Collection narrowed catalog from {} to {} agents", catalog.len(), pool.len());
    pool
}
