//! Infrastructure layer providing external integrations.
//!
//! This module wires the configured backend endpoint into concrete client
//! instances for the domain services.

pub mod clients;
