//! Configuration management for the document chat client.
//!
//! This module provides centralized configuration handling for the backend
//! endpoint and any future tunables.

mod config;

pub use config::*;
