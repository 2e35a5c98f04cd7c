//! Core library components.
//!
//! This module contains the reusable logic for reference parsing, document
//! interpolation, redaction, and secret value sources.

pub mod interpolate;
pub mod mask;
pub mod reference;
pub mod source;
