//! Pokedex - An interactive PokeAPI client
//!
//! Pages through location areas, explores encounters and catches Pokemon,
//! with raw API responses held in a TTL cache that reaps itself in the
//! background.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::ResponseCache;
pub use config::{Cli, Config};
pub use error::{PokedexError, Result};
pub use repl::{CommandRegistry, Session};
