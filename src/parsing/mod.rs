//! Pattern rules shared by the line parser.
//!
//! - [`username`] - Ordered username detection rules

pub mod username;

pub use username::{UsernameMatch, UsernameRule, extract_username};
