use fastrand::Rng;

/// Seed for the generator that produces the benchmark's initial state.
pub const SEED: u64 = 42;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub p: [f64; 3],
    pub v: [f64; 3],
    pub m: f64,
}

/// Structure-of-arrays layout of the same records, for the column-major
/// evaluation path.
#[derive(Clone)]
pub struct BodySystem {
    pub positions: Vec<[f64; 3]>,
    pub velocities: Vec<[f64; 3]>,
    pub masses: Vec<f64>,
    pub count: usize,
}

impl BodySystem {
    pub fn new(count: usize) -> Self {
        BodySystem {
            positions: vec![[0.0, 0.0, 0.0]; count],
            velocities: vec![[0.0, 0.0, 0.0]; count],
            masses: vec![0.0; count],
            count,
        }
    }

    pub fn from_bodies(bodies: &[Body]) -> Self {
        let mut system = BodySystem::new(bodies.len());
        for (i, b) in bodies.iter().enumerate() {
            system.positions[i] = b.p;
            system.velocities[i] = b.v;
            system.masses[i] = b.m;
        }
        system
    }

    pub fn to_bodies(&self) -> Vec<Body> {
        (0..self.count)
            .map(|i| Body {
                p: self.positions[i],
                v: self.velocities[i],
                m: self.masses[i],
            })
            .collect()
    }
}

/// One body drawn from `rng`. The draw order is position x, y, z, then
/// velocity x, y, z, then mass; changing it changes every downstream
/// result for a given seed.
fn random_body(rng: &Rng) -> Body {
    let p = [
        rng.f64() * 200.0 - 100.0,
        rng.f64() * 200.0 - 100.0,
        rng.f64() * 200.0 - 100.0,
    ];
    let v = [
        rng.f64() * 2.0 - 1.0,
        rng.f64() * 2.0 - 1.0,
        rng.f64() * 2.0 - 1.0,
    ];
    let m = rng.f64() * 9.0 + 1.0;
    Body { p, v, m }
}

/// `n` bodies with positions in [-100, 100), velocities in [-1, 1) and
/// masses in [1, 10), drawn body by body from `rng`.
pub fn random_cloud(n: usize, rng: &Rng) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);
    for _ in 0..n {
        bodies.push(random_body(rng));
    }
    bodies
}

/// Same stream as `random_cloud`, filled straight into column storage.
pub fn random_cloud_soa(n: usize, rng: &Rng) -> BodySystem {
    let mut system = BodySystem::new(n);
    for i in 0..n {
        let b = random_body(rng);
        system.positions[i] = b.p;
        system.velocities[i] = b.v;
        system.masses[i] = b.m;
    }
    system
}

/// Two unit-mass bodies at rest, 10 units apart on the x axis.
pub fn two_bodies() -> Vec<Body> {
    vec![
        Body {
            p: [0.0, 0.0, 0.0],
            v: [0.0, 0.0, 0.0],
            m: 1.0,
        },
        Body {
            p: [10.0, 0.0, 0.0],
            v: [0.0, 0.0, 0.0],
            m: 1.0,
        },
    ]
}

pub fn distance_sqr(x1: &[f64; 3], x2: &[f64; 3]) -> f64 {
    let dx = x1[0] - x2[0];
    let dy = x1[1] - x2[1];
    let dz = x1[2] - x2[2];
    dx * dx + dy * dy + dz * dz
}

pub fn distance(x1: &[f64; 3], x2: &[f64; 3]) -> f64 {
    distance_sqr(x1, x2).sqrt()
}

pub fn calc_kinetic_energy(bodies: &[Body]) -> f64 {
    let mut ke = 0.0;
    for b in bodies {
        let v2 = b.v[0] * b.v[0] + b.v[1] * b.v[1] + b.v[2] * b.v[2];
        ke += 0.5 * b.m * v2;
    }
    ke
}

pub fn calc_potential_energy(bodies: &[Body]) -> f64 {
    let mut pe = 0.0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            pe -= bodies[i].m * bodies[j].m / distance(&bodies[i].p, &bodies[j].p);
        }
    }
    pe
}

pub fn calc_total_energy(bodies: &[Body]) -> f64 {
    calc_kinetic_energy(bodies) + calc_potential_energy(bodies)
}

pub fn calc_kinetic_energy_soa(system: &BodySystem) -> f64 {
    let mut ke = 0.0;
    for i in 0..system.count {
        let v = &system.velocities[i];
        let v2 = v[0] * v[0] + v[1] * v[1] + v[2] * v[2];
        ke += 0.5 * system.masses[i] * v2;
    }
    ke
}

pub fn calc_potential_energy_soa(system: &BodySystem) -> f64 {
    let mut pe = 0.0;
    for i in 0..system.count {
        for j in (i + 1)..system.count {
            pe -= system.masses[i] * system.masses[j]
                / distance(&system.positions[i], &system.positions[j]);
        }
    }
    pe
}

pub fn calc_total_energy_soa(system: &BodySystem) -> f64 {
    calc_kinetic_energy_soa(system) + calc_potential_energy_soa(system)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_cloud() {
        let rng = Rng::with_seed(SEED);
        let a = random_cloud(64, &rng);
        let rng = Rng::with_seed(SEED);
        let b = random_cloud(64, &rng);
        assert_eq!(a, b);
    }

    #[test]
    fn cloud_stays_in_ranges() {
        let rng = Rng::with_seed(SEED);
        let bodies = random_cloud(256, &rng);
        assert_eq!(bodies.len(), 256);
        for b in &bodies {
            for k in 0..3 {
                assert!(b.p[k] >= -100.0 && b.p[k] < 100.0);
                assert!(b.v[k] >= -1.0 && b.v[k] < 1.0);
            }
            assert!(b.m >= 1.0 && b.m < 10.0);
        }
    }

    #[test]
    fn draw_order_is_per_body() {
        let rng = Rng::with_seed(SEED);
        let bodies = random_cloud(2, &rng);

        let reference = Rng::with_seed(SEED);
        for b in &bodies {
            for k in 0..3 {
                assert_eq!(b.p[k], reference.f64() * 200.0 - 100.0);
            }
            for k in 0..3 {
                assert_eq!(b.v[k], reference.f64() * 2.0 - 1.0);
            }
            assert_eq!(b.m, reference.f64() * 9.0 + 1.0);
        }
    }

    #[test]
    fn soa_init_matches_record_init() {
        let rng = Rng::with_seed(SEED);
        let bodies = random_cloud(50, &rng);
        let rng = Rng::with_seed(SEED);
        let system = random_cloud_soa(50, &rng);
        assert_eq!(system.to_bodies(), bodies);
    }

    #[test]
    fn layout_round_trip() {
        let rng = Rng::with_seed(SEED);
        let bodies = random_cloud(17, &rng);
        let system = BodySystem::from_bodies(&bodies);
        assert_eq!(system.count, 17);
        assert_eq!(system.to_bodies(), bodies);
    }

    #[test]
    fn kinetic_energy_of_known_body() {
        let bodies = vec![Body {
            p: [0.0, 0.0, 0.0],
            v: [1.0, 2.0, 3.0],
            m: 2.0,
        }];
        assert_eq!(calc_kinetic_energy(&bodies), 14.0);
    }

    #[test]
    fn total_energy_of_resting_pair() {
        let bodies = two_bodies();
        // No motion, so the total is the pair potential -1/10.
        assert_eq!(calc_total_energy(&bodies), -0.1);
        let system = BodySystem::from_bodies(&bodies);
        assert_eq!(calc_total_energy_soa(&system), -0.1);
    }
}
