//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Tutorial, Catalog, Draft, Settings, Messages)
//! - `controllers/` - State owners (NavigationController, TutorialComposer)
//! - `services/` - Stateless operations (view derivation, submission sinks)
//! - `infrastructure/` - External integrations (error, logging)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::composer::{ComposerError, TutorialComposer};
pub use controllers::navigation::NavigationController;
pub use domain::{
    AppSettings, Catalog, Draft, Message, NavigationState, Step, Submission, Tutorial, TutorialId,
};
pub use infrastructure::error::{AppError, Result};
pub use services::submission::{LogSink, SubmissionSink};
pub use services::view::{ContentView, SidebarView};
