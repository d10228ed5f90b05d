use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};

use super::configuration::{LevelConfiguration, Statistic};
use super::error::ValidationError;
use super::omega::ln_omega;
use super::report::MacrostateReport;

/// Complete input tuple of the counting functions, used as cache key.
///
/// Energies are deliberately absent: they never enter ln(Ω), and the
/// energy aggregation is recomputed for every request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
struct OmegaKey {
	statistic: Statistic,
	total_particles: u64,
	occupations: Vec<u64>,
	degeneracies: Vec<u64>,
}

impl OmegaKey {
	fn from_configuration(config: &LevelConfiguration) -> Self {
		Self {
			statistic: config.statistic(),
			total_particles: config.total_particles(),
			occupations: config.occupations(),
			degeneracies: config.degeneracies(),
		}
	}
}

/// Memoizing front end for the analysis pipeline.
///
/// # Responsibilities
/// - Run the stateless pipeline: validate → count → aggregate
/// - Serve repeated identical requests from a read-through ln(Ω) cache
/// - Evaluate batches of configurations across threads
/// - Persist and reload the cache between runs
///
/// # Invariants
/// - The cache key is the full input tuple of the counting functions, so
///   a hit can never change a result; counting is referentially
///   transparent and no invalidation exists.
/// - Rejected configurations never reach the counting layer and never
///   touch the cache.
#[derive(Debug, Default)]
pub struct Analyzer {
	ln_omega_cache: HashMap<OmegaKey, f64>,
}

impl Analyzer {
	/// Creates an analyzer with an empty cache.
	pub fn new() -> Self {
		Self { ln_omega_cache: HashMap::new() }
	}

	/// Creates an analyzer, reloading a persisted cache if one exists.
	///
	/// Counterpart of `persist`: if `path` points to a previously saved
	/// cache it is deserialized with `postcard`, otherwise the analyzer
	/// starts empty.
	///
	/// # Errors
	/// Returns an error if the file exists but cannot be read or decoded.
	pub fn with_cache_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
		let path = path.as_ref();
		if !path.exists() {
			return Ok(Self::new());
		}
		let bytes = std::fs::read(path)?;
		let ln_omega_cache = postcard::from_bytes(&bytes)?;
		Ok(Self { ln_omega_cache })
	}

	/// Writes the current cache to `path` as compact binary.
	///
	/// # Errors
	/// Returns an error if serialization or file I/O fails.
	pub fn persist<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
		let bytes = postcard::to_stdvec(&self.ln_omega_cache)?;
		std::fs::write(path, bytes)?;
		Ok(())
	}

	/// Number of memoized ln(Ω) entries.
	pub fn cache_len(&self) -> usize {
		self.ln_omega_cache.len()
	}

	/// Drops all memoized entries.
	pub fn clear_cache(&mut self) {
		self.ln_omega_cache.clear();
	}

	/// Analyzes one configuration.
	///
	/// # Behavior
	/// - Validation failures abort before any counting runs.
	/// - ln(Ω) is served from the cache when the same occupation and
	///   degeneracy vectors were already counted under the same
	///   statistic and particle total.
	/// - The report is always rebuilt, so configurations with equal
	///   occupations but different energies still aggregate correctly.
	///
	/// # Errors
	/// Returns the `ValidationError` of the first failed admissibility
	/// check.
	pub fn analyze(
		&mut self,
		config: &LevelConfiguration,
	) -> Result<MacrostateReport, ValidationError> {
		config.validate()?;

		let key = OmegaKey::from_configuration(config);
		let value = match self.ln_omega_cache.get(&key) {
			Some(cached) => *cached,
			None => {
				let computed = ln_omega(config);
				self.ln_omega_cache.insert(key, computed);
				computed
			}
		};

		Ok(MacrostateReport::from_configuration(config, value))
	}

	/// Analyzes a batch of configurations in parallel.
	///
	/// # Parameters
	/// - `configs`: Configurations to evaluate. Output order matches
	///   input order.
	///
	/// # Behavior
	/// - Cache hits and validation failures are resolved up front; only
	///   uncached valid configurations are dispatched to worker threads.
	/// - The remainder is split into chunks across CPU cores, each chunk
	///   evaluated on its own thread.
	/// - Per-configuration validation failures land in the corresponding
	///   output slot; they never abort the rest of the batch.
	/// - Freshly counted ln(Ω) values are merged into the cache so later
	///   requests hit.
	///
	/// # Notes
	/// - Uses MPSC channels to collect chunk results.
	pub fn analyze_batch(
		&mut self,
		configs: Vec<LevelConfiguration>,
	) -> Vec<Result<MacrostateReport, ValidationError>> {
		if configs.is_empty() {
			return Vec::new();
		}

		let mut results: Vec<Option<Result<MacrostateReport, ValidationError>>> =
			vec![None; configs.len()];
		let mut pending: Vec<(usize, LevelConfiguration)> = Vec::new();

		for (index, config) in configs.into_iter().enumerate() {
			if let Err(error) = config.validate() {
				results[index] = Some(Err(error));
				continue;
			}
			let key = OmegaKey::from_configuration(&config);
			match self.ln_omega_cache.get(&key) {
				Some(&cached) => {
					results[index] =
						Some(Ok(MacrostateReport::from_configuration(&config, cached)));
				}
				None => pending.push((index, config)),
			}
		}

		if !pending.is_empty() {
			let cpus = num_cpus::get();
			let chunk_size = (pending.len() + cpus - 1) / cpus;

			let (tx, rx) = mpsc::channel();
			for chunk in pending.chunks(chunk_size) {
				let tx = tx.clone();
				let chunk: Vec<(usize, LevelConfiguration)> = chunk.to_vec();

				thread::spawn(move || {
					let counted: Vec<(usize, LevelConfiguration, f64)> = chunk
						.into_iter()
						.map(|(index, config)| {
							let value = ln_omega(&config);
							(index, config, value)
						})
						.collect();
					tx.send(counted).expect("Failed to send from thread");
				});
			}
			drop(tx);

			for counted in rx.iter() {
				for (index, config, value) in counted {
					self.ln_omega_cache
						.insert(OmegaKey::from_configuration(&config), value);
					results[index] =
						Some(Ok(MacrostateReport::from_configuration(&config, value)));
				}
			}
		}

		// Every slot was filled by the hit path or by a worker
		results
			.into_iter()
			.map(|slot| slot.expect("Batch slot left empty"))
			.collect()
	}
}
