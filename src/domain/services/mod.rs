//! Domain services
//!
//! Matching, classification and dispatch over the domain entities.

mod classifier;
mod dispatcher;
mod signature_matcher;
mod signature_registry;

pub use classifier::{classify, classify_outcome};
pub use dispatcher::CategoryDispatcher;
pub use signature_matcher::{MatchOutcome, match_signature};
pub use signature_registry::SignatureRegistry;
