use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::level::Level;

/// Statistical regime governing how microstates are counted.
///
/// # Variants
/// - `MaxwellBoltzmann`: distinguishable particles, Stirling-approximated
///   `N! / Π n_i!`.
/// - `BoseEinstein`: indistinguishable bosons, unlimited state occupancy.
/// - `FermiDirac`: indistinguishable fermions, at most one particle per
///   state (Pauli exclusion).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Statistic {
	MaxwellBoltzmann,
	BoseEinstein,
	FermiDirac,
}

impl std::fmt::Display for Statistic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statistic::MaxwellBoltzmann => write!(f, "Maxwell-Boltzmann"),
			Statistic::BoseEinstein => write!(f, "Bose-Einstein"),
			Statistic::FermiDirac => write!(f, "Fermi-Dirac"),
		}
	}
}

/// An immutable macrostate: the ordered energy levels, the declared
/// particle total and the counting statistic.
///
/// A configuration is built once from external input, handed by
/// reference to the pure computation layer, and discarded after the
/// result is reported. Nothing mutates it in between.
///
/// # Responsibilities
/// - Carry the complete input of one analysis request
/// - Check physical admissibility (`validate`)
/// - Expose the occupation and degeneracy vectors to the counting layer
///
/// # Invariants
/// - `validate` must pass before any counting function is applied; a
///   Fermi-Dirac occupation above its degeneracy is rejected here,
///   never silently corrected downstream
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LevelConfiguration {
	statistic: Statistic,
	total_particles: u64,
	levels: Vec<Level>,
}

impl LevelConfiguration {
	/// Creates a configuration from already-parsed parts.
	///
	/// No admissibility check happens here; call `validate` before
	/// counting.
	pub fn new(statistic: Statistic, total_particles: u64, levels: Vec<Level>) -> Self {
		Self { statistic, total_particles, levels }
	}

	/// Creates a configuration where every level shares one degeneracy.
	///
	/// Covers the common input mode where a single g value applies to
	/// all levels.
	///
	/// # Errors
	/// Returns an error if `energies` and `occupations` differ in length.
	pub fn with_uniform_degeneracy(
		statistic: Statistic,
		total_particles: u64,
		energies: &[f64],
		occupations: &[u64],
		degeneracy: u64,
	) -> Result<Self, String> {
		if energies.len() != occupations.len() {
			return Err(format!(
				"Expected one occupation per energy level, got {} energies and {} occupations",
				energies.len(),
				occupations.len()
			));
		}

		let levels = energies
			.iter()
			.zip(occupations)
			.map(|(&energy, &occupation)| Level::new(energy, occupation, degeneracy))
			.collect();

		Ok(Self::new(statistic, total_particles, levels))
	}

	/// The counting statistic of this configuration.
	pub fn statistic(&self) -> Statistic {
		self.statistic
	}

	/// The declared particle total N.
	pub fn total_particles(&self) -> u64 {
		self.total_particles
	}

	/// Read-only view of the levels, in input order.
	pub fn levels(&self) -> &[Level] {
		&self.levels
	}

	/// Occupation numbers in level order.
	pub fn occupations(&self) -> Vec<u64> {
		self.levels.iter().map(Level::occupation).collect()
	}

	/// Degeneracies in level order.
	pub fn degeneracies(&self) -> Vec<u64> {
		self.levels.iter().map(Level::degeneracy).collect()
	}

	/// Sum of all level occupations.
	pub fn occupied_total(&self) -> u64 {
		self.levels.iter().map(Level::occupation).sum()
	}

	/// Checks physical admissibility of the configuration.
	///
	/// # Behavior
	/// - Particle-count conservation is checked first: the sum of
	///   occupations must equal the declared total.
	/// - Under Fermi-Dirac, every level must then satisfy Pauli
	///   exclusion; the first offending level is reported.
	/// - No partial computation proceeds past a failed check.
	///
	/// # Errors
	/// - `ParticleCountMismatch` carrying the declared and actual totals
	/// - `PauliViolation` carrying the offending level index and counts
	pub fn validate(&self) -> Result<(), ValidationError> {
		let actual = self.occupied_total();
		if actual != self.total_particles {
			return Err(ValidationError::ParticleCountMismatch {
				declared: self.total_particles,
				actual,
			});
		}

		if self.statistic == Statistic::FermiDirac {
			for (index, level) in self.levels.iter().enumerate() {
				if !level.respects_pauli() {
					return Err(ValidationError::PauliViolation {
						level: index,
						occupation: level.occupation(),
						degeneracy: level.degeneracy(),
					});
				}
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(statistic: Statistic, n: u64, levels: &[(f64, u64, u64)]) -> LevelConfiguration {
		let levels = levels
			.iter()
			.map(|&(energy, occupation, degeneracy)| Level::new(energy, occupation, degeneracy))
			.collect();
		LevelConfiguration::new(statistic, n, levels)
	}

	#[test]
	fn test_particle_count_mismatch() {
		let c = config(Statistic::MaxwellBoltzmann, 5, &[(0.0, 2, 1), (1.0, 2, 1)]);
		assert_eq!(
			c.validate(),
			Err(ValidationError::ParticleCountMismatch { declared: 5, actual: 4 })
		);
	}

	#[test]
	fn test_pauli_violation() {
		let c = config(Statistic::FermiDirac, 2, &[(0.0, 2, 1)]);
		assert_eq!(
			c.validate(),
			Err(ValidationError::PauliViolation { level: 0, occupation: 2, degeneracy: 1 })
		);
	}

	#[test]
	fn test_pauli_reports_offending_level() {
		let c = config(Statistic::FermiDirac, 5, &[(0.0, 2, 2), (1.0, 3, 2)]);
		assert_eq!(
			c.validate(),
			Err(ValidationError::PauliViolation { level: 1, occupation: 3, degeneracy: 2 })
		);
	}

	#[test]
	fn test_pauli_only_applies_to_fermi_dirac() {
		// Bosons may stack beyond the degeneracy
		let c = config(Statistic::BoseEinstein, 2, &[(0.0, 2, 1)]);
		assert_eq!(c.validate(), Ok(()));
	}

	#[test]
	fn test_count_checked_before_pauli() {
		// Both checks fail; the count mismatch must be reported first
		let c = config(Statistic::FermiDirac, 5, &[(0.0, 2, 1)]);
		assert!(matches!(
			c.validate(),
			Err(ValidationError::ParticleCountMismatch { .. })
		));
	}

	#[test]
	fn test_valid_configurations_pass() {
		let c = config(Statistic::FermiDirac, 3, &[(0.0, 2, 2), (1.0, 1, 2)]);
		assert_eq!(c.validate(), Ok(()));

		let c = config(Statistic::MaxwellBoltzmann, 0, &[(0.0, 0, 1)]);
		assert_eq!(c.validate(), Ok(()));
	}

	#[test]
	fn test_uniform_degeneracy_constructor() {
		let c = LevelConfiguration::with_uniform_degeneracy(
			Statistic::BoseEinstein,
			3,
			&[0.0, 1.0],
			&[2, 1],
			4,
		)
		.unwrap();
		assert_eq!(c.degeneracies(), vec![4, 4]);
		assert_eq!(c.occupations(), vec![2, 1]);

		let mismatched = LevelConfiguration::with_uniform_degeneracy(
			Statistic::BoseEinstein,
			3,
			&[0.0, 1.0],
			&[2],
			4,
		);
		assert!(mismatched.is_err());
	}
}
