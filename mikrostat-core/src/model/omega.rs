use crate::math::{ln_binomial, stirling_ln_factorial};

use super::configuration::{LevelConfiguration, Statistic};

/// ln(Ω) for Maxwell-Boltzmann statistics.
///
/// Stirling's approximation applied in log domain:
/// `N·ln(N) - N - Σ (n_i·ln(n_i) - n_i)`, with `n_i = 0` terms skipped
/// (they contribute exactly zero and `0·ln(0)` is undefined). Factorials
/// are never formed directly, so the count stays finite for N far beyond
/// a few hundred.
///
/// # Notes
/// - Degeneracy does not enter this count: occupation numbers alone
///   determine the number of arrangements in this model.
/// - `total_particles = 0` yields 0 (a single empty arrangement).
pub fn ln_omega_mb(total_particles: u64, occupations: &[u64]) -> f64 {
	let ln_n_factorial = stirling_ln_factorial(total_particles);
	let ln_occupation_factorials: f64 = occupations
		.iter()
		.filter(|&&n| n > 0)
		.map(|&n| stirling_ln_factorial(n))
		.sum();
	ln_n_factorial - ln_occupation_factorials
}

/// ln(Ω) for Bose-Einstein statistics.
///
/// Per level, `ln C(n_i + g_i - 1, n_i)` computed through log-gamma:
/// `lnΓ(n_i + g_i) - lnΓ(n_i + 1) - lnΓ(g_i)`. Levels with zero
/// degeneracy offer no states and are skipped (they contribute zero,
/// never an error).
pub fn ln_omega_be(occupations: &[u64], degeneracies: &[u64]) -> f64 {
	occupations
		.iter()
		.zip(degeneracies)
		.filter(|&(_, &g)| g > 0)
		.map(|(&n, &g)| ln_binomial(n + g - 1, n))
		.sum()
}

/// ln(Ω) for Fermi-Dirac statistics.
///
/// Per level, `ln C(g_i, n_i)` computed through log-gamma:
/// `lnΓ(g_i + 1) - lnΓ(n_i + 1) - lnΓ(g_i - n_i + 1)`. Levels with zero
/// degeneracy are skipped. Levels with `n_i > g_i` are skipped as well;
/// this is a secondary guard behind the validator, which rejects such
/// configurations before counting ever runs.
pub fn ln_omega_fd(occupations: &[u64], degeneracies: &[u64]) -> f64 {
	occupations
		.iter()
		.zip(degeneracies)
		.filter(|&(&n, &g)| g > 0 && n <= g)
		.map(|(&n, &g)| ln_binomial(g, n))
		.sum()
}

/// ln(Ω) for a validated configuration, dispatched on its statistic.
///
/// Pure and deterministic: identical configurations yield bit-identical
/// results, which is what makes memoization correctness-neutral.
pub fn ln_omega(config: &LevelConfiguration) -> f64 {
	let occupations = config.occupations();
	let degeneracies = config.degeneracies();
	match config.statistic() {
		Statistic::MaxwellBoltzmann => ln_omega_mb(config.total_particles(), &occupations),
		Statistic::BoseEinstein => ln_omega_be(&occupations, &degeneracies),
		Statistic::FermiDirac => ln_omega_fd(&occupations, &degeneracies),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::level::Level;

	fn config(statistic: Statistic, n: u64, levels: &[(f64, u64, u64)]) -> LevelConfiguration {
		let levels = levels
			.iter()
			.map(|&(energy, occupation, degeneracy)| Level::new(energy, occupation, degeneracy))
			.collect();
		LevelConfiguration::new(statistic, n, levels)
	}

	#[test]
	fn test_mb_single_occupied_level() {
		// All five particles on one level: exactly one arrangement
		let value = ln_omega_mb(5, &[5, 0, 0]);
		assert!(value.abs() < 1e-10);
	}

	#[test]
	fn test_mb_skips_empty_levels() {
		// Padding with empty levels must not change the count at all
		let with_padding = ln_omega_mb(6, &[3, 3, 0, 0, 0]);
		let without = ln_omega_mb(6, &[3, 3]);
		assert_eq!(with_padding.to_bits(), without.to_bits());
	}

	#[test]
	fn test_mb_matches_direct_stirling_expansion() {
		let n_values = [4_u64, 2, 3];
		let total = 9_u64;
		let expected = {
			let total = total as f64;
			let mut value = total * total.ln() - total;
			for &n in &n_values {
				let n = n as f64;
				value -= n * n.ln() - n;
			}
			value
		};
		assert!((ln_omega_mb(total, &n_values) - expected).abs() < 1e-12);
	}

	#[test]
	fn test_mb_empty_system() {
		assert_eq!(ln_omega_mb(0, &[0, 0]), 0.0);
	}

	#[test]
	fn test_be_single_level() {
		// g = 3, n = 2: C(2 + 3 - 1, 2) = C(4, 2) = 6 arrangements
		let value = ln_omega_be(&[2], &[3]);
		assert!((value - 6.0_f64.ln()).abs() < 1e-10);
	}

	#[test]
	fn test_fd_single_level() {
		// g = 3, n = 2: C(3, 2) = 3 arrangements
		let value = ln_omega_fd(&[2], &[3]);
		assert!((value - 3.0_f64.ln()).abs() < 1e-10);
	}

	#[test]
	fn test_levels_sum_independently() {
		// Two levels multiply in Ω, add in ln(Ω)
		let combined = ln_omega_be(&[2, 1], &[3, 2]);
		let separate = ln_omega_be(&[2], &[3]) + ln_omega_be(&[1], &[2]);
		assert!((combined - separate).abs() < 1e-12);
	}

	#[test]
	fn test_zero_degeneracy_levels_are_skipped() {
		// A zero-degeneracy level contributes exactly zero, not NaN
		assert_eq!(
			ln_omega_be(&[2, 1], &[3, 0]).to_bits(),
			ln_omega_be(&[2], &[3]).to_bits()
		);
		assert_eq!(
			ln_omega_fd(&[2, 1], &[3, 0]).to_bits(),
			ln_omega_fd(&[2], &[3]).to_bits()
		);
		assert_eq!(ln_omega_be(&[1, 1], &[0, 0]), 0.0);
		assert_eq!(ln_omega_fd(&[1], &[0]), 0.0);
	}

	#[test]
	fn test_fd_overfilled_level_is_skipped() {
		// The validator rejects this upstream; the function itself must
		// still not produce NaN if reached anyway
		let value = ln_omega_fd(&[2, 1], &[1, 2]);
		assert!((value - 2.0_f64.ln()).abs() < 1e-10);
	}

	#[test]
	fn test_large_systems_stay_finite() {
		let occupations: Vec<u64> = vec![100; 50];
		let degeneracies: Vec<u64> = vec![500; 50];
		assert!(ln_omega_be(&occupations, &degeneracies).is_finite());
		assert!(ln_omega_fd(&occupations, &degeneracies).is_finite());
		assert!(ln_omega_mb(5000, &occupations).is_finite());
	}

	#[test]
	fn test_dispatch_matches_direct_calls() {
		let c = config(Statistic::BoseEinstein, 3, &[(0.0, 2, 3), (1.0, 1, 2)]);
		assert_eq!(ln_omega(&c).to_bits(), ln_omega_be(&[2, 1], &[3, 2]).to_bits());

		let c = config(Statistic::FermiDirac, 3, &[(0.0, 2, 3), (1.0, 1, 2)]);
		assert_eq!(ln_omega(&c).to_bits(), ln_omega_fd(&[2, 1], &[3, 2]).to_bits());

		let c = config(Statistic::MaxwellBoltzmann, 3, &[(0.0, 2, 3), (1.0, 1, 2)]);
		assert_eq!(ln_omega(&c).to_bits(), ln_omega_mb(3, &[2, 1]).to_bits());
	}

	#[test]
	fn test_ln_omega_is_deterministic() {
		let c = config(
			Statistic::MaxwellBoltzmann,
			6,
			&[(0.0, 3, 1), (1.5, 2, 1), (3.0, 1, 1)],
		);
		assert_eq!(ln_omega(&c).to_bits(), ln_omega(&c).to_bits());
	}
}
