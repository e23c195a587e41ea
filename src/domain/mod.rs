//! Domain layer - Core business logic
//!
//! Signature entities, the registry, matcher, classifier and dispatcher, and
//! the traits for the collaborators they call.

pub mod entities;
pub mod repositories;
pub mod services;
