//! Services layer - stateless operations and external collaborators.
//!
//! - View derivation (navigation state to view-models)
//! - Submission sinks for finished drafts

pub mod submission;
pub mod view;
