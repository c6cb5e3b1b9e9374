//! Plain-text document rendering: the priced proposal, the discovery-call
//! script sheet, and the file export seam.

pub mod discovery;
pub mod export;
pub mod proposal;
