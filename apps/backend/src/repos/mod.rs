//! Repository functions for the domain layer.

pub mod characters;
pub mod games;
