use serde::{Deserialize, Serialize};

use super::configuration::LevelConfiguration;
use super::level::Level;

/// ln(Ω) value at which exp() leaves the f64 range (~1.8e308).
///
/// Below this threshold the absolute count is reported numerically; at
/// or above it, only the symbolic `e^{ln Ω}` form remains representable.
pub const OVERFLOW_LN_THRESHOLD: f64 = 700.0;

/// Absolute microstate count, or a marker when it is not representable.
///
/// The logarithm is always valid; only the exponentiated display value
/// degenerates past the threshold. Overflow is a representability limit,
/// not an error.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum OmegaMagnitude {
	/// `exp(ln Ω)` fits in an f64.
	Exact(f64),
	/// `exp(ln Ω)` would overflow; the log value is carried instead so
	/// the caller can render `e^{ln Ω}` symbolically.
	Overflow { ln_omega: f64 },
}

impl OmegaMagnitude {
	/// Converts a log count to an absolute count where representable.
	pub fn from_ln(ln_omega: f64) -> Self {
		if ln_omega < OVERFLOW_LN_THRESHOLD {
			OmegaMagnitude::Exact(ln_omega.exp())
		} else {
			OmegaMagnitude::Overflow { ln_omega }
		}
	}

	/// The absolute count, if representable.
	pub fn value(&self) -> Option<f64> {
		match self {
			OmegaMagnitude::Exact(value) => Some(*value),
			OmegaMagnitude::Overflow { .. } => None,
		}
	}
}

impl std::fmt::Display for OmegaMagnitude {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OmegaMagnitude::Exact(value) => write!(f, "{value:.0}"),
			OmegaMagnitude::Overflow { ln_omega } => write!(f, "e^{ln_omega:.2}"),
		}
	}
}

/// Derived values of one analysis: ln(Ω), the absolute count (or its
/// overflow marker) and the total energy of the configuration.
///
/// A report is produced once per request and never mutated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MacrostateReport {
	ln_omega: f64,
	omega: OmegaMagnitude,
	total_energy: f64,
}

impl MacrostateReport {
	/// Aggregates a validated configuration and its ln(Ω) into a report.
	///
	/// # Behavior
	/// - Total energy is `Σ energy_i × occupation_i`, summed in level
	///   order so repeated requests round identically.
	/// - The absolute count switches to the overflow marker at
	///   `OVERFLOW_LN_THRESHOLD`.
	pub fn from_configuration(config: &LevelConfiguration, ln_omega: f64) -> Self {
		let total_energy = config
			.levels()
			.iter()
			.map(Level::energy_contribution)
			.sum();

		Self {
			ln_omega,
			omega: OmegaMagnitude::from_ln(ln_omega),
			total_energy,
		}
	}

	/// Natural logarithm of the microstate count.
	pub fn ln_omega(&self) -> f64 {
		self.ln_omega
	}

	/// Dimensionless entropy S/k_B, numerically equal to ln(Ω).
	pub fn entropy(&self) -> f64 {
		self.ln_omega
	}

	/// Absolute microstate count, or its overflow marker.
	pub fn omega(&self) -> &OmegaMagnitude {
		&self.omega
	}

	/// Relative probability of this macrostate.
	///
	/// Without the sum over all macrostates as a denominator, the
	/// relative probability is the microstate count itself.
	pub fn relative_probability(&self) -> &OmegaMagnitude {
		&self.omega
	}

	/// Total energy `Σ energy_i × occupation_i`.
	pub fn total_energy(&self) -> f64 {
		self.total_energy
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::configuration::Statistic;

	fn config(levels: &[(f64, u64)]) -> LevelConfiguration {
		let total: u64 = levels.iter().map(|&(_, n)| n).sum();
		let levels = levels
			.iter()
			.map(|&(energy, occupation)| Level::new(energy, occupation, 1))
			.collect();
		LevelConfiguration::new(Statistic::MaxwellBoltzmann, total, levels)
	}

	#[test]
	fn test_total_energy() {
		let c = config(&[(0.0, 2), (1.0, 3)]);
		let report = MacrostateReport::from_configuration(&c, 0.0);
		assert_eq!(report.total_energy(), 3.0);
	}

	#[test]
	fn test_entropy_equals_ln_omega() {
		let c = config(&[(0.0, 1)]);
		let report = MacrostateReport::from_configuration(&c, 42.5);
		assert_eq!(report.entropy().to_bits(), report.ln_omega().to_bits());
	}

	#[test]
	fn test_exact_value_matches_exp() {
		let magnitude = OmegaMagnitude::from_ln(6.0_f64.ln());
		match magnitude {
			OmegaMagnitude::Exact(value) => assert!((value - 6.0).abs() < 1e-9),
			OmegaMagnitude::Overflow { .. } => panic!("Should be exact"),
		}
	}

	#[test]
	fn test_overflow_boundary() {
		assert!(matches!(
			OmegaMagnitude::from_ln(699.999),
			OmegaMagnitude::Exact(_)
		));
		assert!(matches!(
			OmegaMagnitude::from_ln(700.0),
			OmegaMagnitude::Overflow { .. }
		));
		assert!(matches!(
			OmegaMagnitude::from_ln(700.001),
			OmegaMagnitude::Overflow { .. }
		));
	}

	#[test]
	fn test_overflow_keeps_log_value() {
		let magnitude = OmegaMagnitude::from_ln(1234.5678);
		assert_eq!(magnitude.value(), None);
		assert_eq!(magnitude.to_string(), "e^1234.57");
	}

	#[test]
	fn test_relative_probability_is_omega() {
		let c = config(&[(0.0, 1)]);
		let report = MacrostateReport::from_configuration(&c, 2.0);
		assert_eq!(report.relative_probability(), report.omega());
	}
}
