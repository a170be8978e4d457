//! Infrastructure implementations.
//!
//! Contains the upstream port and its implementations.

pub mod pokeapi;
pub mod ports;
pub mod resilient_pokeapi;
