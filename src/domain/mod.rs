//! Domain aggregates exposed by the clinic service layer.

pub mod owner;
pub mod pet;
pub mod types;
pub mod visit;
