use mikrostat_core::model::analyzer::Analyzer;
use mikrostat_core::model::configuration::{LevelConfiguration, Statistic};
use mikrostat_core::model::level::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The analyzer memoizes ln(Omega) on the full input tuple
    // (statistic, occupations, degeneracies, N), so repeated identical
    // requests are served from the cache
    let mut analyzer = Analyzer::new();

    // Three levels E = 0, 1, 2 with degeneracy g = 3 each,
    // N = 5 particles distributed as 2 + 2 + 1
    let levels = vec![
        Level::new(0.0, 2, 3),
        Level::new(1.0, 2, 3),
        Level::new(2.0, 1, 3),
    ];

    // The same macrostate counted under each statistic
    // The entropy S/k_B is ln(Omega) itself (dimensionless units)
    for statistic in [
        Statistic::MaxwellBoltzmann,
        Statistic::BoseEinstein,
        Statistic::FermiDirac,
    ] {
        let config = LevelConfiguration::new(statistic, 5, levels.clone());
        let report = analyzer.analyze(&config)?;
        println!(
            "{}: ln(Omega) = {:.6}, S/k_B = {:.6}, E_total = {:.2}, Omega = {}",
            statistic,
            report.ln_omega(),
            report.entropy(),
            report.total_energy(),
            report.omega(),
        );
    }

    // A declared total that does not match the occupations is rejected
    // before any counting runs
    let mismatched = LevelConfiguration::new(Statistic::MaxwellBoltzmann, 6, levels.clone());
    match analyzer.analyze(&mismatched) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {}", e),
    }

    // Under Fermi-Dirac, a level occupation above its degeneracy
    // violates Pauli exclusion
    let pauli = LevelConfiguration::new(Statistic::FermiDirac, 2, vec![Level::new(0.0, 2, 1)]);
    match analyzer.analyze(&pauli) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {}", e),
    }

    // A single shared degeneracy can be applied to every level at once
    let uniform = LevelConfiguration::with_uniform_degeneracy(
        Statistic::BoseEinstein,
        4,
        &[0.0, 1.0, 2.0],
        &[2, 1, 1],
        2,
    )?;
    let report = analyzer.analyze(&uniform)?;
    println!(
        "Uniform g = 2: ln(Omega) = {:.6}, E_total = {:.2}",
        report.ln_omega(),
        report.total_energy()
    );

    // Large systems overflow the absolute count; the log value stays
    // exact and the count is displayed symbolically as e^{ln(Omega)}
    let wide: Vec<Level> = (0..200).map(|i| Level::new(i as f64, 10, 50)).collect();
    let big = LevelConfiguration::new(Statistic::BoseEinstein, 2000, wide);
    let report = analyzer.analyze(&big)?;
    println!(
        "Large BE system: ln(Omega) = {:.2}, Omega = {}",
        report.ln_omega(),
        report.omega()
    );

    // Batches are evaluated across threads and merged into the cache;
    // output order matches input order and rejections land in their slot
    let mut batch: Vec<LevelConfiguration> = (1..=4)
        .map(|n| {
            LevelConfiguration::new(
                Statistic::BoseEinstein,
                n,
                vec![Level::new(0.0, n, 2), Level::new(1.0, 0, 2)],
            )
        })
        .collect();
    batch.push(LevelConfiguration::new(
        Statistic::FermiDirac,
        3,
        vec![Level::new(0.0, 3, 2)],
    ));
    for (i, result) in analyzer.analyze_batch(batch).into_iter().enumerate() {
        match result {
            Ok(report) => println!("Batch entry {}: ln(Omega) = {:.6}", i, report.ln_omega()),
            Err(e) => println!("Batch entry {}: rejected ({})", i, e),
        }
    }

    println!("Memoized entries: {}", analyzer.cache_len());

    Ok(())
}
