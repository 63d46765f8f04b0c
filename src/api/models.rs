//! PokeAPI response models
//!
//! Only the fields the REPL displays are decoded; everything else in the
//! payload is ignored.

use serde::Deserialize;

/// A paginated list response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    /// Total number of records across all pages
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Records on this page
    pub results: Vec<T>,
}

/// A name plus the URL of the full resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A single location area and the Pokemon that can be encountered there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// A Pokemon as returned by `/pokemon/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Experience gained for defeating it; drives the catch rate
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
