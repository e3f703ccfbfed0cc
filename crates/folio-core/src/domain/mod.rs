//! Core domain logic for the document chat session.
//!
//! This module contains the business state and invariants that drive the
//! client, independent of any transport or rendering concerns.

pub mod models;
pub mod services;
