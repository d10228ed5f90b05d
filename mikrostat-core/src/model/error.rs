use thiserror::Error;

/// Physical admissibility failures for a proposed configuration.
///
/// Both variants are user-correctable: the request is aborted before any
/// log-domain computation runs, and the payload is surfaced verbatim so
/// the caller can display exactly what to fix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	/// The declared particle total does not match the sum of occupations.
	#[error("particle count mismatch: declared N = {declared}, sum of occupations = {actual}")]
	ParticleCountMismatch { declared: u64, actual: u64 },

	/// A level occupation exceeds its degeneracy under Fermi-Dirac.
	#[error("Pauli exclusion violated at level {level}: occupation {occupation} exceeds degeneracy {degeneracy}")]
	PauliViolation { level: usize, occupation: u64, degeneracy: u64 },
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_messages_carry_payloads() {
		let mismatch = ValidationError::ParticleCountMismatch { declared: 5, actual: 4 };
		let text = mismatch.to_string();
		assert!(text.contains("N = 5"));
		assert!(text.contains("= 4"));

		let pauli = ValidationError::PauliViolation { level: 2, occupation: 3, degeneracy: 1 };
		let text = pauli.to_string();
		assert!(text.contains("level 2"));
		assert!(text.contains("occupation 3"));
		assert!(text.contains("degeneracy 1"));
	}
}
