//! assist_core - command interpretation core for a personal assistant
//!
//! Pure, stateless interpretation of free-text commands. The UI layer that
//! renders panels and talks to backends lives elsewhere; this crate only
//! consumes strings (plus an explicit "now") and produces classifications
//! and values.
//!
//! Modules:
//! - intent: intent classification with ordered first-match-wins pattern groups
//! - temporal: date/time extraction from relative and clock-time phrases
//! - suggestions: autocomplete catalog with substring ranking
//! - qa: canned answers for the question intent

pub mod intent;
pub mod temporal;
pub mod suggestions;
pub mod qa;

// Re-export key types for convenience
pub use intent::{Intent, IntentClassifier};

pub use temporal::{extract_date_time, parse_date_time};

pub use suggestions::{default_catalog, suggest, CatalogError, SuggestionCatalog};

pub use qa::QuestionAnswerer;
