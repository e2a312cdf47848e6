//! Shared point cloud generators for integration tests.

#![allow(dead_code)]

use glam::{DVec3, IVec3};
use std::f64::consts::PI;

/// Corners of the cube `{0, size}^3`.
pub fn cube(size: i32) -> Vec<IVec3> {
    (0..8)
        .map(|i| IVec3::new(i & 1, (i >> 1) & 1, (i >> 2) & 1) * size)
        .collect()
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

pub fn as_dvec3(points: &[IVec3]) -> Vec<DVec3> {
    points.iter().map(|p| p.as_dvec3()).collect()
}
