//! Driven adapters implementing the domain ports.

pub mod forecast;
pub mod persistence;
