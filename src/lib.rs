//! Lingo - expose server-side translations to client-side code
//!
//! Lingo computes, for each locale, the effective translation strings of an
//! application from its lang directory and embeds them in rendered pages, so
//! browser code can translate without a network round trip.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Loading, locale fallback and precedence merging
//! - `directive`: Parser for template directive expressions
//! - `render`: Script and JSON serialization of translations

pub mod cli;
pub mod config;
pub mod core;
pub mod directive;
pub mod render;
