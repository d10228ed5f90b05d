//! Top-level module for the microstate analysis system.
//!
//! This crate provides log-domain microstate counting for the three
//! classical statistics regimes, including:
//! - Per-level input data (`Level`)
//! - An immutable macrostate description (`LevelConfiguration`)
//! - Physical admissibility validation (`ValidationError`)
//! - Pure counting functions per statistic (`omega`)
//! - Overflow-safe result aggregation (`MacrostateReport`)
//! - A memoizing analysis front end (`Analyzer`)

/// Memoizing front end orchestrating the full analysis pipeline.
///
/// Exposes single and batch evaluation, read-through caching of ln(Ω)
/// values, and cache persistence.
pub mod analyzer;

/// Immutable macrostate description and physical validation.
///
/// Holds the ordered energy levels, the declared particle total and the
/// selected statistic; checks conservation and Pauli exclusion.
pub mod configuration;

/// Validation error taxonomy.
///
/// Every rejection carries the data needed for user display.
pub mod error;

/// A single energy level (energy, occupation, degeneracy).
pub mod level;

/// Pure log-domain microstate counting functions.
///
/// One function per statistic plus a dispatching entry point. All
/// functions expect an already-validated configuration.
pub mod omega;

/// Derived result values (ln Ω, absolute Ω or overflow marker,
/// total energy, entropy proxy).
pub mod report;
