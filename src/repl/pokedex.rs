//! Caught Pokemon, keyed by the name they were caught under.

use std::collections::BTreeMap;

use crate::api::Pokemon;

#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch, replacing any earlier entry under the same name.
    pub fn insert(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        self.caught.insert(name.into(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }

    /// Caught Pokemon in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pokemon)> {
        self.caught.iter().map(|(name, pokemon)| (name.as_str(), pokemon))
    }
}
