//! Application configuration.
//!
//! Values are fixed at build time. Set `HEROES_API_URL` when running
//! `trunk build` to fetch heroes from a server instead of the built-in roster.

/// Application name, used as the document title.
pub const APP_NAME: &str = "Tour of Heroes";

/// Path of the hero list endpoint, relative to the API base URL.
pub const HEROES_PATH: &str = "/api/heroes";

/// Base URL of the hero API, if one was configured at build time.
pub const HEROES_API_URL: Option<&str> = option_env!("HEROES_API_URL");
