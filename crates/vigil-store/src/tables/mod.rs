//! One table module per entity, plus the user directory.

pub mod audit;
pub mod cases;
pub mod signals;
pub mod users;
pub mod workflow;
