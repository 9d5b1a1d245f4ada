//! Wire records exchanged with API clients and their mapping to domain records.

pub mod owner;
pub mod pet;
pub mod problem;
pub mod visit;
