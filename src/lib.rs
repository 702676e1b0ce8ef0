//! Codelabs: a desktop reader for step-by-step tutorials with a local
//! authoring form.
//!
//! The toolkit-independent core lives in [`app`]; [`ui`] builds the FLTK
//! widgets that feed it messages.

pub mod app;
pub mod ui;
