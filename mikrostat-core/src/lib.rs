//! Microstate counting library for quantum statistics.
//!
//! This crate provides the computational core of a statistical-physics
//! calculator, including:
//! - Log-domain microstate counting for Maxwell-Boltzmann, Bose-Einstein
//!   and Fermi-Dirac statistics
//! - Physical admissibility checks (particle-count conservation,
//!   Pauli exclusion)
//! - Energy aggregation with overflow-safe reporting of the absolute count
//! - A memoizing analysis front end with parallel batch evaluation
//!
//! Only the high-level API is exposed publicly. Low-level numeric
//! helpers are kept internal so that every log-gamma call site stays
//! behind the guards of the counting layer.

/// Core statistical model and analysis logic.
///
/// This module exposes the configuration, counting and reporting types
/// while keeping internal numeric helpers private.
pub mod model;

/// Log-domain numeric helpers (log-gamma, log-binomial, Stirling).
///
/// Not exposed
pub(crate) mod math;
