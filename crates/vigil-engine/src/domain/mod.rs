//! Pure domain logic: no lock, no clock, no caller.

pub mod errors;
pub mod numbering;
pub mod permissions;
pub mod projections;
pub mod requests;
pub mod stats;
pub mod transitions;
