//! Drinking Bird Frontend
//!
//! egui application showing the drinking bird with toggleable debug helpers.

pub mod app;
pub mod config;
pub mod error;
pub mod panels;
pub mod state;

// Re-exports for convenience
pub use app::DrinkingBirdApp;
pub use config::AppConfig;
pub use error::AppError;
pub use state::{AppState, SharedAppState};
