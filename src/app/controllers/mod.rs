//! Controllers layer - orchestration and coordination.
//!
//! This module contains the controllers that own mutable state and
//! route every change to it:
//! - Navigation across the catalog and its steps
//! - Authoring of new codelabs

pub mod composer;
pub mod navigation;
