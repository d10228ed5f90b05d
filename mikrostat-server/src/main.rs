use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::{Deserialize, Serialize};

use mikrostat_core::model::analyzer::Analyzer;
use mikrostat_core::model::configuration::{LevelConfiguration, Statistic};
use mikrostat_core::model::level::Level;
use mikrostat_core::model::report::MacrostateReport;

/// Struct representing query parameters for the `/v1/analyze` endpoint
#[derive(Deserialize)]
struct AnalyzeParams {
	statistic: String,
	energies: String,
	occupations: String,
	degeneracies: Option<String>, // per-level list; takes precedence over `degeneracy`
	degeneracy: Option<u64>,      // single shared value, defaults to 1
	n: u64,
}

struct SharedData {
	analyzer: Analyzer,
}

/// JSON body returned by `/v1/analyze`.
#[derive(Serialize)]
struct AnalyzeResponse {
	statistic: String,
	total_particles: u64,
	ln_omega: f64,
	entropy: f64,
	total_energy: f64,
	/// Absent when the absolute count overflows the f64 range.
	omega: Option<f64>,
	/// Display form; `e^{ln Ω}` when overflowed.
	omega_display: String,
}

impl AnalyzeResponse {
	fn new(statistic: Statistic, total_particles: u64, report: &MacrostateReport) -> Self {
		Self {
			statistic: statistic.to_string(),
			total_particles,
			ln_omega: report.ln_omega(),
			entropy: report.entropy(),
			total_energy: report.total_energy(),
			omega: report.omega().value(),
			omega_display: report.omega().to_string(),
		}
	}
}

impl AnalyzeParams {
	/// Resolves the statistic name (case-insensitive, short or long form).
	fn statistic(&self) -> Result<Statistic, String> {
		match self.statistic.to_lowercase().as_str() {
			"mb" | "maxwell-boltzmann" => Ok(Statistic::MaxwellBoltzmann),
			"be" | "bose-einstein" => Ok(Statistic::BoseEinstein),
			"fd" | "fermi-dirac" => Ok(Statistic::FermiDirac),
			other => Err(format!("Unknown statistic '{}', expected mb, be or fd", other)),
		}
	}

	/// Builds the level list from the raw comma-separated inputs.
	///
	/// All parsing and length cross-checking happens here: the core only
	/// ever receives well-formed numeric data.
	fn levels(&self) -> Result<Vec<Level>, String> {
		let energies = parse_list::<f64>(&self.energies, "energies")?;
		let occupations = parse_list::<u64>(&self.occupations, "occupations")?;
		if energies.is_empty() {
			return Err("At least one energy level is required".to_owned());
		}
		if energies.len() != occupations.len() {
			return Err(format!(
				"Expected one occupation per energy level, got {} energies and {} occupations",
				energies.len(),
				occupations.len()
			));
		}

		let degeneracies = match &self.degeneracies {
			Some(raw) => {
				let list = parse_list::<u64>(raw, "degeneracies")?;
				if list.len() != energies.len() {
					return Err(format!(
						"Expected one degeneracy per energy level, got {} degeneracies and {} levels",
						list.len(),
						energies.len()
					));
				}
				list
			}
			None => vec![self.degeneracy.unwrap_or(1); energies.len()],
		};

		Ok(energies
			.iter()
			.zip(&occupations)
			.zip(&degeneracies)
			.map(|((&energy, &occupation), &degeneracy)| Level::new(energy, occupation, degeneracy))
			.collect())
	}
}

/// Parses a comma-separated list of numbers.
fn parse_list<T: std::str::FromStr>(raw: &str, field: &str) -> Result<Vec<T>, String> {
	raw.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(|s| {
			s.parse::<T>()
				.map_err(|_| format!("Invalid value '{}' in {}", s, field))
		})
		.collect()
}

/// HTTP GET endpoint `/v1/analyze`
///
/// Builds a `LevelConfiguration` from query parameters, validates it and
/// returns the derived values (ln Ω, entropy, total energy, absolute Ω)
/// as JSON. Validation failures come back as 400 with the error text.
#[get("/v1/analyze")]
async fn get_analysis(
	data: web::Data<Mutex<SharedData>>,
	query: web::Query<AnalyzeParams>,
) -> impl Responder {
	let statistic = match query.statistic() {
		Ok(s) => s,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	let levels = match query.levels() {
		Ok(l) => l,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	let config = LevelConfiguration::new(statistic, query.n, levels);

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Analyzer lock failed"),
	};

	match shared_data.analyzer.analyze(&config) {
		Ok(report) => HttpResponse::Ok().json(AnalyzeResponse::new(statistic, query.n, &report)),
		Err(e) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

#[get("/v1/statistics")]
async fn get_statistics() -> impl Responder {
	let names = [
		Statistic::MaxwellBoltzmann,
		Statistic::BoseEinstein,
		Statistic::FermiDirac,
	];
	HttpResponse::Ok().body(names.map(|s| s.to_string()).join("\n"))
}

#[get("/v1/cache")]
async fn get_cache_size(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Analyzer lock failed"),
	};
	HttpResponse::Ok().body(shared_data.analyzer.cache_len().to_string())
}

#[put("/v1/clear_cache")]
async fn put_clear_cache(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Analyzer lock failed"),
	};
	shared_data.analyzer.clear_cache();
	HttpResponse::Ok().body("Cache cleared")
}

/// Main entry point for the server.
///
/// Wraps the memoizing analyzer in a `Mutex` for thread safety and
/// starts an Actix-web HTTP server exposing the analysis endpoints.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Set `RUST_LOG` to adjust verbosity; requests are logged at info.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

	let shared_data = SharedData {
		analyzer: Analyzer::new(),
	};
	let shared_analyzer = web::Data::new(Mutex::new(shared_data));

	log::info!("Starting microstate analysis server on 127.0.0.1:5000");

	HttpServer::new(move || {
		App::new()
			.app_data(shared_analyzer.clone())
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.service(get_analysis)
			.service(get_statistics)
			.service(get_cache_size)
			.service(put_clear_cache)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
