//! # Countries TUI
//!
//! A terminal gallery of the world's countries, fed by the REST Countries API.
//!
//! ## Features
//! - One-shot download of the full country list, sorted A-Z
//! - Live, case-insensitive search by name
//! - Nine cards per page with a windowed page bar
//! - Favorites persisted in a local key-value store
//! - Detail popup with the explore link for each country
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod models;
pub mod catalog;
pub mod pagination;
pub mod cards;
pub mod storage;
pub mod favorites;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::Country;
pub use cards::{CountryCard, FavoriteButton};
pub use pagination::PageLink;
pub use config::Config;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use favorites::Favorites;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;
