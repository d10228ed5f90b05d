/// Natural logarithm of the gamma function.
///
/// Thin wrapper over `libm::lgamma` so the rest of the crate never deals
/// with the sign-carrying variant. Arguments are always strictly
/// positive here; the skip rules in the counting layer enforce this.
pub(crate) fn ln_gamma(x: f64) -> f64 {
	libm::lgamma(x)
}

/// Natural logarithm of the binomial coefficient C(n, k).
///
/// Computed as `lnΓ(n+1) - lnΓ(k+1) - lnΓ(n-k+1)` so the value stays
/// finite for arguments far beyond direct factorial overflow.
///
/// # Notes
/// - Requires `k <= n`; the counting layer guarantees this before calling.
pub(crate) fn ln_binomial(n: u64, k: u64) -> f64 {
	ln_gamma(n as f64 + 1.0) - ln_gamma(k as f64 + 1.0) - ln_gamma((n - k) as f64 + 1.0)
}

/// Stirling approximation of ln(n!): `n·ln(n) - n`.
///
/// Returns 0 for `n = 0`, matching the exact value ln(0!) = 0 and
/// keeping `0·ln(0)` out of the sum.
pub(crate) fn stirling_ln_factorial(n: u64) -> f64 {
	if n == 0 {
		return 0.0;
	}
	let n = n as f64;
	n * n.ln() - n
}
