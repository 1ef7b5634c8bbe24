//! # Demo Analytics Dashboard Core
//!
//! The reusable core of a demo dashboard: a mock-authentication session
//! controller and a synthetic-data chart registry, both decoupled from any
//! particular UI toolkit.
//!
//! ## Features
//!
//! - **Session controller**: login/register/logout against a simulated
//!   network, with the current session mirrored to a persisted store and an
//!   explicit view-state output for the rendering layer
//! - **Chart registry**: keyed chart entries with monotonic identifiers,
//!   data-type switching and bulk dataset refresh from seedable randomness
//! - **Pluggable boundaries**: session storage and chart rendering are
//!   traits; file-backed, in-memory and logging implementations ship with
//!   the crate
//!
//! ## Architecture
//!
//! ```text
//! UI events → SessionController ⇄ SessionStore (persisted mirror)
//!                    ↓ ViewState
//! UI events → ChartRegistry → ChartRenderer (pixels elsewhere)
//! ```
//!
//! The two controllers are independent leaves owned by one [`AppState`];
//! they never talk to each other.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use demo_analytics_dashboard::{AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let state = Arc::new(AppState::new(config)?);
//!     state.session.restore().await;
//!     let session = state.session.login("demo@example.com", "secret").await?;
//!     println!("hello, {}", session.name);
//!     state.charts.set_data_type("conversion")?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Application state wiring both controllers together.
pub mod app;
/// Session controller and mock authentication.
pub mod auth;
/// Chart registry, entries and data-type descriptors.
pub mod charts;
/// Configuration management.
pub mod config;
/// Error types and result aliases.
pub mod error;
/// Chart rendering boundary.
pub mod render;
/// Persisted session mirror.
pub mod store;

pub use app::{AppState, SharedState};
pub use config::Config;
pub use error::{AppError, AppResult};
