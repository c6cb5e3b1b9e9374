//! Core library for the Active AI outreach operations toolkit: lead import
//! and normalization, the in-memory lead directory, message templating, the
//! daily-message schedule plan, and proposal pricing.

pub mod directory;
pub mod discovery;
pub mod import;
pub mod normalize;
pub mod pricing;
pub mod schedule;
pub mod schema;
pub mod session;
pub mod template;

pub use schema::*;
