//! Data models for the TravelScribe CMS.
//!
//! These models match the admin frontend interfaces exactly for seamless
//! interoperability; everything serializes camelCase on the wire.

mod content;
mod package;

pub use content::*;
pub use package::*;
