//! Simulate each noise class and print measured B1 / R(n) next to theory.
//!
//! Run with: cargo run -p noiseid-sim --example identify

use noiseid_core::{
    NoiseClass, NoiseClassifier, OverlappingEstimator, SweepPlan, b_to_mu, b1, b1_boundary,
    log_spaced_factors, rn,
};
use noiseid_sim::{SimulationConfig, TrialRunner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let classifier = NoiseClassifier::new(OverlappingEstimator);
    let exponents: Vec<i32> = NoiseClass::ALL.iter().map(|c| c.b()).take(5).collect();
    let plan = SweepPlan::new(log_spaced_factors(32, 6)?, exponents)?;

    println!(
        "{:>16} {:>4} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "class", "af", "B1", "B1()", "bound", "Rn", "Rn()"
    );
    for point in &plan {
        let config = SimulationConfig {
            b: point.b,
            trials: 5,
            ..Default::default()
        };
        let mut runner = TrialRunner::new(config.clone())?;
        let measured_b1 = runner.average_b1(&classifier, point.af)?;
        let measured_rn = runner.average_rn(&classifier, point.af)?;

        let n = (config.samples - 1) / point.af;
        let theory_b1 = b1(n, b_to_mu(point.b)?)?;
        let boundary = match b1_boundary(point.b, n) {
            Ok(v) => format!("{v:10.4}"),
            Err(_) => format!("{:>10}", "-"),
        };
        println!(
            "{:>16} {:>4} {:10.4} {:10.4} {} {:10.4} {:10.4}",
            NoiseClass::from_b(point.b)?,
            point.af,
            measured_b1.mean,
            theory_b1,
            boundary,
            measured_rn.mean,
            rn(point.af, point.b)?,
        );
    }
    Ok(())
}
