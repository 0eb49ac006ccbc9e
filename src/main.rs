use clap::Parser;

use nbody_bench::body::{random_cloud, SEED};
use nbody_bench::sim::{run_steps, run_steps_par, DT};

/// Direct all-pairs N-body benchmark with a seeded random initial state.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of bodies (flag form wins over the positional form)
    #[arg(long = "n", value_name = "N", overrides_with = "n")]
    n: Option<usize>,

    /// Number of simulation steps (flag form wins over the positional form)
    #[arg(long, value_name = "STEPS", overrides_with = "steps")]
    steps: Option<usize>,

    /// Number of bodies, positional form
    #[arg(value_name = "N")]
    n_pos: Option<usize>,

    /// Number of steps, positional form
    #[arg(value_name = "STEPS")]
    steps_pos: Option<usize>,

    /// Evaluate forces on a thread pool
    #[arg(short, long, default_value_t = false)]
    parallel: bool,

    /// Worker threads to use with --parallel
    #[arg(long, value_name = "COUNT", default_value_t = num_cpus::get())]
    threads: usize,
}

impl Args {
    fn body_count(&self) -> usize {
        self.n.or(self.n_pos).unwrap_or(100)
    }

    fn step_count(&self) -> usize {
        self.steps.or(self.steps_pos).unwrap_or(100)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let n = args.body_count();
    let steps = args.step_count();

    println!("Running N-body benchmark with N={}, Steps={}", n, steps);

    let mut bodies = random_cloud(n, &fastrand::Rng::with_seed(SEED));

    let elapsed = if args.parallel {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()?;
        println!("Parallel force evaluation on {} threads", rayon::current_num_threads());
        run_steps_par(&mut bodies, DT, steps)
    } else {
        run_steps(&mut bodies, DT, steps)
    };

    let secs = elapsed.as_secs_f64();
    println!("Time: {:.4} seconds", secs);
    println!("RESULT: {:.4}", secs);
    Ok(())
}
