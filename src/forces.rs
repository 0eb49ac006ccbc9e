use rayon::prelude::*;

use crate::body::{Body, BodySystem};

/// Softening term added to every squared pair distance, which keeps the
/// inverse-cube factor finite when two bodies coincide.
pub const SOFTENING: f64 = 1e-9;

/// Acceleration contribution on a body at `p` from a body of mass `m`
/// at `q`: with d = q - p and r^2 = |d|^2 + SOFTENING, the result is
/// d * m / (r^2 * r).
pub fn pair_accel(p: &[f64; 3], q: &[f64; 3], m: f64) -> [f64; 3] {
    let dx = q[0] - p[0];
    let dy = q[1] - p[1];
    let dz = q[2] - p[2];
    let dist_sq = dx * dx + dy * dy + dz * dz + SOFTENING;
    let dist = dist_sq.sqrt();
    let f = m / (dist_sq * dist);
    [f * dx, f * dy, f * dz]
}

fn accel_on(i: usize, bodies: &[Body]) -> [f64; 3] {
    let mut acc = [0.0, 0.0, 0.0];
    for (j, bj) in bodies.iter().enumerate() {
        if j == i {
            continue;
        }
        let pp = pair_accel(&bodies[i].p, &bj.p, bj.m);
        acc[0] += pp[0];
        acc[1] += pp[1];
        acc[2] += pp[2];
    }
    acc
}

/// Overwrite `accels[i]` with the net acceleration of body `i`. Every
/// ordered pair is visited, so each interaction is computed twice.
/// `accels` must hold one slot per body.
pub fn fill_accels(bodies: &[Body], accels: &mut [[f64; 3]]) {
    debug_assert_eq!(bodies.len(), accels.len());
    for i in 0..bodies.len() {
        accels[i] = accel_on(i, bodies);
    }
}

/// Same sums as `fill_accels` with the outer loop on the rayon pool.
/// Each slot is written by exactly one task and the inner sum keeps
/// index order, so the output matches the serial pass bit for bit.
pub fn fill_accels_par(bodies: &[Body], accels: &mut [[f64; 3]]) {
    debug_assert_eq!(bodies.len(), accels.len());
    accels.par_iter_mut().enumerate().for_each(|(i, acc)| {
        *acc = accel_on(i, bodies);
    });
}

pub fn fill_accels_soa(system: &BodySystem, accels: &mut [[f64; 3]]) {
    debug_assert_eq!(system.count, accels.len());
    for i in 0..system.count {
        let mut acc = [0.0, 0.0, 0.0];
        for j in 0..system.count {
            if j == i {
                continue;
            }
            let pp = pair_accel(&system.positions[i], &system.positions[j], system.masses[j]);
            acc[0] += pp[0];
            acc[1] += pp[1];
            acc[2] += pp[2];
        }
        accels[i] = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{random_cloud, two_bodies, SEED};
    use fastrand::Rng;

    #[test]
    fn pair_accel_matches_closed_form() {
        let acc = pair_accel(&[0.0, 0.0, 0.0], &[10.0, 0.0, 0.0], 1.0);
        let dist_sq = 100.0 + SOFTENING;
        let f = 1.0 / (dist_sq * dist_sq.sqrt());
        assert_eq!(acc, [f * 10.0, 0.0, 0.0]);
    }

    #[test]
    fn pair_accel_falls_off_as_inverse_square() {
        let near = pair_accel(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], 1.0);
        let far = pair_accel(&[0.0, 0.0, 0.0], &[2.0, 0.0, 0.0], 1.0);
        let ratio = near[0] / far[0];
        assert!((ratio - 4.0).abs() < 1e-6);
    }

    #[test]
    fn equal_masses_pull_equal_and_opposite() {
        let bodies = two_bodies();
        let mut accels = vec![[0.0, 0.0, 0.0]; 2];
        fill_accels(&bodies, &mut accels);
        for k in 0..3 {
            assert_eq!(accels[0][k], -accels[1][k]);
        }
        assert!(accels[0][0] > 0.0);
        assert!(accels[1][0] < 0.0);
    }

    #[test]
    fn lone_body_feels_nothing() {
        let bodies = vec![Body {
            p: [3.0, -4.0, 5.0],
            v: [1.0, 1.0, 1.0],
            m: 7.0,
        }];
        let mut accels = vec![[9.9, 9.9, 9.9]; 1];
        fill_accels(&bodies, &mut accels);
        assert_eq!(accels[0], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_store_is_a_no_op() {
        let bodies: Vec<Body> = Vec::new();
        let mut accels: Vec<[f64; 3]> = Vec::new();
        fill_accels(&bodies, &mut accels);
        assert!(accels.is_empty());
    }

    #[test]
    #[should_panic]
    fn fill_accels_requires_matching_lengths() {
        let bodies = two_bodies();
        let mut accels = vec![[0.0, 0.0, 0.0]; 1];
        fill_accels(&bodies, &mut accels);
    }

    #[test]
    fn parallel_matches_serial() {
        let rng = Rng::with_seed(SEED);
        let bodies = random_cloud(64, &rng);
        let mut serial = vec![[0.0, 0.0, 0.0]; 64];
        let mut parallel = vec![[0.0, 0.0, 0.0]; 64];
        fill_accels(&bodies, &mut serial);
        fill_accels_par(&bodies, &mut parallel);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn soa_matches_record_layout() {
        let rng = Rng::with_seed(SEED);
        let bodies = random_cloud(64, &rng);
        let system = BodySystem::from_bodies(&bodies);
        let mut record = vec![[0.0, 0.0, 0.0]; 64];
        let mut column = vec![[0.0, 0.0, 0.0]; 64];
        fill_accels(&bodies, &mut record);
        fill_accels_soa(&system, &mut column);
        assert_eq!(record, column);
    }
}
