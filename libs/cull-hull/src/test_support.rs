//! Point cloud fixtures shared by the unit tests.

use glam::{DVec3, IVec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Corners of the cube `{0, size}^3`.
pub fn cube(size: i32) -> Vec<IVec3> {
    (0..8)
        .map(|i| IVec3::new(i & 1, (i >> 1) & 1, (i >> 2) & 1) * size)
        .collect()
}

/// Cube of side 100 with a point 1 unit above the centre of every side.
pub fn bumped_cube() -> Vec<IVec3> {
    let mut points = cube(100);
    points.extend([
        IVec3::new(50, 50, 101),
        IVec3::new(50, 50, -1),
        IVec3::new(101, 50, 50),
        IVec3::new(-1, 50, 50),
        IVec3::new(50, 101, 50),
        IVec3::new(50, -1, 50),
    ]);
    points
}

/// Evenly spread points on a sphere (Fibonacci lattice), rounded to integers.
pub fn sphere_surface(count: usize, radius: f64) -> Vec<IVec3> {
    let golden = PI * (3.0 - 5.0_f64.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / count as f64;
            let r = (1.0 - y * y).sqrt();
            let theta = golden * i as f64;
            (DVec3::new(r * theta.cos(), y, r * theta.sin()) * radius)
                .round()
                .as_ivec3()
        })
        .collect()
}

/// Deterministic pseudo-random points inside a ball.
pub fn ball_points(count: usize, radius: i32, seed: u64) -> Vec<IVec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let p = IVec3::new(
            rng.gen_range(-radius..=radius),
            rng.gen_range(-radius..=radius),
            rng.gen_range(-radius..=radius),
        );
        if p.as_dvec3().length() <= f64::from(radius) {
            points.push(p);
        }
    }
    points
}
