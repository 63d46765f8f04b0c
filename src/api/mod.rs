//! API Module
//!
//! Cached HTTP client and response models for PokeAPI.
//!
//! # Endpoints
//! - `GET /location-area/?offset=&limit=` - Paginated location areas
//! - `GET /location-area/{name}` - Encounters in one area
//! - `GET /pokemon/{name}` - One Pokemon

pub mod client;
pub mod models;

pub use client::PokeApiClient;
pub use models::*;
