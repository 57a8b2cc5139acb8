//! Core library for numclass
//!
//! This crate implements the **Functional Core** of the numclass service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`numclass_core`** (this crate): Pure classification and validation functions with zero I/O
//! - **`numclass`**: HTTP server, trivia lookups, keep-alive timer and CLI (the Imperative Shell)
//!
//! Everything here is deterministic and can be tested with plain values: the
//! shell decides where numbers come from and where classifications go.
//!
//! # Module Organization
//!
//! - [`number`]: Numeric predicates (`is_prime`, `is_perfect`, `is_armstrong`, `digit_sum`)
//! - [`classify`]: Input validation, the response model and the rejection taxonomy
//! - [`fact`]: URL construction and response interpretation for the trivia service
//!
//! # Example Usage
//!
//! ```rust
//! use numclass_core::classify::{classify, parse_number_param, Property};
//!
//! let n = parse_number_param(Some("371")).unwrap();
//! let output = classify(n, "371 is a narcissistic number.");
//!
//! assert!(!output.is_prime);
//! assert_eq!(output.properties, vec![Property::Armstrong, Property::Odd]);
//! assert_eq!(output.digit_sum, 11);
//! ```

pub mod classify;
pub mod fact;
pub mod number;
