use nbody_bench::body::{
    calc_total_energy, calc_total_energy_soa, random_cloud, random_cloud_soa, Body, SEED,
};
use nbody_bench::sim::{run_steps, run_steps_par, run_steps_soa, DT};

fn verify_positions(label: &str, reference: &[Body], candidate: &[Body], tolerance: f64) -> bool {
    if reference.len() != candidate.len() {
        println!(
            "ERROR: Body count mismatch: {} vs {}",
            reference.len(),
            candidate.len()
        );
        return false;
    }

    let mut max_diff: f64 = 0.0;
    let mut total_diff = 0.0;
    let mut diff_count = 0;

    for i in 0..reference.len() {
        for k in 0..3 {
            let diff = (reference[i].p[k] - candidate[i].p[k]).abs();
            max_diff = max_diff.max(diff);
            total_diff += diff;
            if diff > tolerance {
                diff_count += 1;
                if diff_count <= 10 {
                    println!(
                        "Position difference at body {}, dimension {}: Serial={}, {}={}, Diff={}",
                        i, k, reference[i].p[k], label, candidate[i].p[k], diff
                    );
                } else if diff_count == 11 {
                    println!("Too many differences, stopping the per-body report");
                }
            }
        }
    }

    let avg_diff = total_diff / (reference.len() * 3) as f64;
    println!("{} position results:", label);
    println!("  - Maximum difference: {:e}", max_diff);
    println!("  - Average difference: {:e}", avg_diff);
    println!("  - Differences above tolerance: {}", diff_count);
    diff_count == 0
}

fn verify_energy(label: &str, reference: f64, candidate: f64, tolerance: f64) -> bool {
    let diff = (reference - candidate).abs();
    let rel_diff = if reference != 0.0 {
        diff / reference.abs()
    } else {
        diff
    };
    println!("{} energy results:", label);
    println!("  - Serial total energy: {}", reference);
    println!("  - {} total energy: {}", label, candidate);
    println!("  - Absolute difference: {:e}", diff);
    println!("  - Relative difference: {:.6}%", rel_diff * 100.0);
    rel_diff <= tolerance
}

fn main() {
    println!("N-Body Evaluation Path Verification");
    println!("-----------------------------------");

    let n = 500;
    let steps = 10;
    // All three paths sum interactions in the same order, so they
    // should agree exactly. The tolerances only shape the report if
    // that ever breaks.
    let position_tolerance = 1e-12;
    let energy_tolerance = 1e-12;

    println!("Running verification with {} bodies for {} steps", n, steps);
    println!("Position tolerance: {:e}", position_tolerance);
    println!("Energy tolerance: {:e}", energy_tolerance);

    let rng = fastrand::Rng::with_seed(SEED);
    let mut serial = random_cloud(n, &rng);
    let rng = fastrand::Rng::with_seed(SEED);
    let mut parallel = random_cloud(n, &rng);
    let rng = fastrand::Rng::with_seed(SEED);
    let mut columns = random_cloud_soa(n, &rng);

    println!("\nVerifying initial conditions...");
    if !verify_positions("Parallel", &serial, &parallel, position_tolerance)
        || !verify_positions("SoA", &serial, &columns.to_bodies(), position_tolerance)
    {
        println!("ERROR: Initial states don't match! Cannot continue verification.");
        return;
    }
    let initial_energy = calc_total_energy(&serial);
    println!("Initial total energy: {}", initial_energy);

    let serial_secs = run_steps(&mut serial, DT, steps).as_secs_f64();
    let parallel_secs = run_steps_par(&mut parallel, DT, steps).as_secs_f64();
    let soa_secs = run_steps_soa(&mut columns, DT, steps).as_secs_f64();

    println!("\nVerifying final positions...");
    let parallel_positions_ok =
        verify_positions("Parallel", &serial, &parallel, position_tolerance);
    let soa_positions_ok =
        verify_positions("SoA", &serial, &columns.to_bodies(), position_tolerance);

    println!("\nVerifying final energies...");
    let serial_energy = calc_total_energy(&serial);
    let parallel_energy_ok = verify_energy(
        "Parallel",
        serial_energy,
        calc_total_energy(&parallel),
        energy_tolerance,
    );
    let soa_energy_ok = verify_energy(
        "SoA",
        serial_energy,
        calc_total_energy_soa(&columns),
        energy_tolerance,
    );
    println!(
        "Energy drift over the run: {:.6}%",
        (serial_energy - initial_energy).abs() / initial_energy.abs() * 100.0
    );

    println!("\nPerformance comparison:");
    println!("  - Serial runtime: {:.6} seconds", serial_secs);
    println!(
        "  - Parallel runtime: {:.6} seconds ({:.2}x)",
        parallel_secs,
        serial_secs / parallel_secs
    );
    println!(
        "  - SoA runtime: {:.6} seconds ({:.2}x)",
        soa_secs,
        serial_secs / soa_secs
    );

    if parallel_positions_ok && soa_positions_ok && parallel_energy_ok && soa_energy_ok {
        println!("\nVERIFICATION PASSED: All evaluation paths agree with the serial reference");
    } else {
        println!("\nVERIFICATION FAILED:");
        if !parallel_positions_ok || !soa_positions_ok {
            println!("  - Position differences exceed tolerance");
        }
        if !parallel_energy_ok || !soa_energy_ok {
            println!("  - Energy differences exceed tolerance");
        }
    }
}
