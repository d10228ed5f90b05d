use serde::{Deserialize, Serialize};

/// A single discrete energy level of the system.
///
/// A `Level` couples an energy value with the number of particles
/// occupying it and the number of distinct quantum states sharing that
/// energy (its degeneracy).
///
/// # Invariants
/// - `occupation` counts particles and is never negative (enforced by type)
/// - A level with `degeneracy == 0` offers no states and contributes no
///   microstates; the counting layer skips it instead of dividing by zero
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Level {
	/// Energy of the level, in the caller's energy unit.
	energy: f64,
	/// Number of particles occupying the level.
	occupation: u64,
	/// Number of distinct states sharing this energy.
	degeneracy: u64,
}

impl Level {
	/// Creates a level from its three observables.
	pub fn new(energy: f64, occupation: u64, degeneracy: u64) -> Self {
		Self { energy, occupation, degeneracy }
	}

	/// Energy of the level.
	pub fn energy(&self) -> f64 {
		self.energy
	}

	/// Number of particles on the level.
	pub fn occupation(&self) -> u64 {
		self.occupation
	}

	/// Degeneracy of the level.
	pub fn degeneracy(&self) -> u64 {
		self.degeneracy
	}

	/// Energy carried by this level: energy × occupation.
	pub fn energy_contribution(&self) -> f64 {
		self.energy * self.occupation as f64
	}

	/// Whether the occupation respects Pauli exclusion (`n ≤ g`).
	///
	/// Only meaningful under Fermi-Dirac statistics, where no state may
	/// hold more than one particle.
	pub fn respects_pauli(&self) -> bool {
		self.occupation <= self.degeneracy
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_energy_contribution() {
		assert_eq!(Level::new(1.5, 4, 2).energy_contribution(), 6.0);
		assert_eq!(Level::new(3.0, 0, 2).energy_contribution(), 0.0);
	}

	#[test]
	fn test_respects_pauli() {
		assert!(Level::new(0.0, 2, 3).respects_pauli());
		assert!(Level::new(0.0, 3, 3).respects_pauli());
		assert!(!Level::new(0.0, 2, 1).respects_pauli());
	}
}
