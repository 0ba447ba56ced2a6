//! Port traits: inbound (driving) and outbound (driven).

pub mod inbound;
pub mod outbound;
