//! Configen - LLM-assisted YAML configuration generator.
//!
//! This crate turns a free-text deployment description into a validated
//! YAML configuration document by prompting a generative model with an
//! in-context knowledge base, then sanitizing and parsing its output.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
