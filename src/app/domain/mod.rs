//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Tutorials, steps and the catalog
//! - Navigation state and the authoring draft
//! - Application settings
//! - Message types for the event system

pub mod catalog;
pub mod draft;
pub mod messages;
pub mod navigation;
pub mod settings;
pub mod tutorial;

pub use catalog::Catalog;
pub use draft::{Draft, DraftStep, MissingField, StepField, Submission};
pub use messages::Message;
pub use navigation::NavigationState;
pub use settings::{AppSettings, ThemeMode};
pub use tutorial::{Step, Tutorial, TutorialId};
