use nbody_bench::body::{random_cloud, random_cloud_soa, SEED};
use nbody_bench::sim::{run_steps, run_steps_par, run_steps_soa, DT};

fn main() {
    println!("N-Body Benchmark");
    println!("----------------");

    let body_counts = [100, 500, 1000, 2000];
    let steps = 10;

    println!("Running {} steps with dt={}", steps, DT);
    println!("\nBody Count | Evaluation Path | Runtime (s) | Avg Step Time (s)");
    println!("-----------|-----------------|-------------|------------------");

    for &n in &body_counts {
        // Serial record layout, the reference path
        let rng = fastrand::Rng::with_seed(SEED);
        let mut bodies = random_cloud(n, &rng);
        let runtime = run_steps(&mut bodies, DT, steps).as_secs_f64();
        println!(
            "{:10} | {:15} | {:11.4} | {:17.6}",
            n,
            "Serial AoS",
            runtime,
            runtime / steps as f64
        );

        // Outer body loop on the rayon pool
        let rng = fastrand::Rng::with_seed(SEED);
        let mut bodies = random_cloud(n, &rng);
        let runtime = run_steps_par(&mut bodies, DT, steps).as_secs_f64();
        println!(
            "{:10} | {:15} | {:11.4} | {:17.6}",
            n,
            "Parallel AoS",
            runtime,
            runtime / steps as f64
        );

        // Column storage
        let rng = fastrand::Rng::with_seed(SEED);
        let mut system = random_cloud_soa(n, &rng);
        let runtime = run_steps_soa(&mut system, DT, steps).as_secs_f64();
        println!(
            "{:10} | {:15} | {:11.4} | {:17.6}",
            n,
            "Serial SoA",
            runtime,
            runtime / steps as f64
        );

        println!("-----------|-----------------|-------------|------------------");
    }
}
