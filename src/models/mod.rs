//! Diesel rows of the clinic tables and the server configuration.

pub mod config;
pub mod owner;
pub mod pet;
pub mod visit;
