//! Adapters - implementations of the ports against real services.

pub mod ai;
pub mod document;
pub mod reference;
