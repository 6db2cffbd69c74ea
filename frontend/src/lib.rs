//! Hero Dashboard - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend previewing the top heroes of the roster.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  App (router)                               │
//! │  └── HeroDashboard ── HeroService           │
//! │                       ├── InMemoryHeroService
//! │                       └── HttpHeroService   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Hero, AppError)
//! - [`components`] - UI components (HeroDashboard)
//! - [`services`] - Hero retrieval

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use types::{AppError, AppResult, Hero};
pub use components::*;
pub use services::*;

// =============================================================================
// Root component
// =============================================================================

/// Root view, mounted by the `hero-dashboard` binary.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <h1>{APP_NAME}</h1>
            <main>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route
                        path="/dashboard"
                        view=|| view! { <HeroDashboard service=default_hero_service()/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
