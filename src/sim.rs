use std::time::{Duration, Instant};

use crate::body::{Body, BodySystem};
use crate::forces::{fill_accels, fill_accels_par, fill_accels_soa};

/// Fixed integration step in simulation time units.
pub const DT: f64 = 0.01;

/// Advance the store by one step from precomputed accelerations, one
/// slot per body. All velocities are updated first, then all positions
/// from the updated velocities; the pass order is what makes the
/// scheme symplectic.
pub fn integrate(bodies: &mut [Body], accels: &[[f64; 3]], dt: f64) {
    debug_assert_eq!(bodies.len(), accels.len());
    for (b, acc) in bodies.iter_mut().zip(accels) {
        b.v[0] += acc[0] * dt;
        b.v[1] += acc[1] * dt;
        b.v[2] += acc[2] * dt;
    }
    for b in bodies.iter_mut() {
        b.p[0] += b.v[0] * dt;
        b.p[1] += b.v[1] * dt;
        b.p[2] += b.v[2] * dt;
    }
}

pub fn integrate_soa(system: &mut BodySystem, accels: &[[f64; 3]], dt: f64) {
    debug_assert_eq!(system.count, accels.len());
    for (v, acc) in system.velocities.iter_mut().zip(accels) {
        v[0] += acc[0] * dt;
        v[1] += acc[1] * dt;
        v[2] += acc[2] * dt;
    }
    for (p, v) in system.positions.iter_mut().zip(&system.velocities) {
        p[0] += v[0] * dt;
        p[1] += v[1] * dt;
        p[2] += v[2] * dt;
    }
}

/// Run `steps` force-then-integrate cycles and time them. The
/// acceleration scratch is sized once before the clock starts, so the
/// returned duration covers exactly the step loop.
pub fn run_steps(bodies: &mut [Body], dt: f64, steps: usize) -> Duration {
    let mut accels = vec![[0.0, 0.0, 0.0]; bodies.len()];
    let start = Instant::now();
    for _ in 0..steps {
        fill_accels(bodies, &mut accels);
        integrate(bodies, &accels, dt);
    }
    start.elapsed()
}

/// `run_steps` with parallel force evaluation.
pub fn run_steps_par(bodies: &mut [Body], dt: f64, steps: usize) -> Duration {
    let mut accels = vec![[0.0, 0.0, 0.0]; bodies.len()];
    let start = Instant::now();
    for _ in 0..steps {
        fill_accels_par(bodies, &mut accels);
        integrate(bodies, &accels, dt);
    }
    start.elapsed()
}

/// `run_steps` over column storage.
pub fn run_steps_soa(system: &mut BodySystem, dt: f64, steps: usize) -> Duration {
    let mut accels = vec![[0.0, 0.0, 0.0]; system.count];
    let start = Instant::now();
    for _ in 0..steps {
        fill_accels_soa(system, &mut accels);
        integrate_soa(system, &accels, dt);
    }
    start.elapsed()
}
