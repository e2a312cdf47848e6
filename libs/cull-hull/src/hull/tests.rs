//! # Hull Tests
//!
//! Construction scenarios for the QuickHull builder.

use super::*;
use crate::error::HullError;
use crate::test_support::{ball_points, cube, sphere_surface};
use crate::validate::{closed_manifold, containment, convexity};
use approx::assert_relative_eq;
use config::constants::HULL_EPSILON;

fn as_dvec3(points: &[IVec3]) -> Vec<DVec3> {
    points.iter().map(|p| p.as_dvec3()).collect()
}

#[test]
fn test_hull_tetrahedron() {
    let points = vec![
        IVec3::new(0, 0, 0),
        IVec3::new(10, 0, 0),
        IVec3::new(5, 10, 0),
        IVec3::new(5, 5, 10),
    ];
    let hull = build(&points).unwrap();

    assert_eq!(hull.vertex_count(), 4);
    assert_eq!(hull.face_count(), 4);
    hull.validate(HULL_EPSILON).unwrap();
}

#[test]
fn test_hull_unit_cube() {
    let points = cube(1);
    let hull = build(&points).unwrap();

    // Cube has 8 vertices and 12 triangles (6 sides * 2)
    assert_eq!(hull.vertex_count(), 8);
    assert_eq!(hull.face_count(), 12);

    for plane in hull.planes() {
        let normal = plane.unwrap().normal;
        let abs = normal.abs();
        assert_relative_eq!(abs.x + abs.y + abs.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(abs.max_element(), 1.0, epsilon = 1e-12);
    }

    // Two triangles per side
    let mut per_side = std::collections::HashMap::new();
    for plane in hull.planes().into_iter().flatten() {
        let key = (plane.normal.round().as_ivec3(), (plane.offset.round()) as i64);
        *per_side.entry(key).or_insert(0) += 1;
    }
    assert_eq!(per_side.len(), 6);
    assert!(per_side.values().all(|&count| count == 2));

    hull.validate(HULL_EPSILON).unwrap();
}

#[test]
fn test_hull_cube_excludes_centroid() {
    let mut points = cube(2);
    points.push(IVec3::splat(1));
    let hull = build(&points).unwrap();

    assert_eq!(hull.vertex_count(), 8);
    assert_eq!(hull.face_count(), 12);
    assert!(!hull.points().contains(&IVec3::splat(1)));
    assert_eq!(hull, build(&cube(2)).unwrap());
}

#[test]
fn test_hull_with_duplicate_points() {
    let mut points = cube(5);
    points.extend(cube(5));
    points.push(IVec3::new(5, 5, 5));
    let hull = build(&points).unwrap();

    assert_eq!(hull.vertex_count(), 8);
    assert_eq!(hull.face_count(), 12);
    closed_manifold(&hull).unwrap();
}

#[test]
fn test_hull_adds_exterior_point() {
    let points = vec![
        IVec3::new(0, 0, 0),
        IVec3::new(10, 0, 0),
        IVec3::new(0, 10, 0),
        IVec3::new(0, 0, 10),
        IVec3::new(10, 10, 10),
    ];
    let hull = build(&points).unwrap();

    assert_eq!(hull.vertex_count(), 5);
    assert_eq!(hull.face_count(), 6);
    hull.validate(HULL_EPSILON).unwrap();
}

#[test]
fn test_hull_sphere_with_interior_points() {
    let surface = sphere_surface(20, 1000.0);
    let interior = ball_points(100, 500, 7);
    let mut points = interior.clone();
    points.extend(surface.iter().copied());

    let hull = build(&points).unwrap();

    assert!(hull.vertex_count() >= 4);
    assert!(hull.points().iter().all(|p| surface.contains(p)));
    assert!(hull.points().iter().all(|p| !interior.contains(p)));

    containment(&hull, &as_dvec3(&interior), HULL_EPSILON).unwrap();
    containment(&hull, &as_dvec3(&points), 1e-6).unwrap();
    convexity(&hull, 1e-6).unwrap();
    closed_manifold(&hull).unwrap();
}

#[test]
fn test_hull_is_deterministic() {
    let mut points = ball_points(200, 300, 42);
    points.extend(sphere_surface(30, 400.0));

    let first = build(&points).unwrap();
    let second = build(&points).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_hull_faces_point_away_from_centroid() {
    let hull = build(&sphere_surface(40, 250.0)).unwrap();
    let center = hull.centroid();
    for plane in hull.planes().into_iter().flatten() {
        assert!(plane.signed_distance(center) < 0.0);
    }
}

#[test]
fn test_hull_contains_query() {
    let hull = build(&cube(10)).unwrap();
    assert!(hull.contains(DVec3::splat(5.0), HULL_EPSILON));
    assert!(hull.contains(DVec3::new(10.0, 10.0, 10.0), HULL_EPSILON));
    assert!(!hull.contains(DVec3::new(5.0, 5.0, 10.5), HULL_EPSILON));
}

#[test]
fn test_hull_too_few_points() {
    let points = vec![IVec3::ZERO, IVec3::X, IVec3::Y];
    assert_eq!(
        build(&points).unwrap_err(),
        HullError::InsufficientPoints {
            count: 3,
            required: 4
        }
    );
}

#[test]
fn test_hull_collinear_points() {
    let points: Vec<IVec3> = [0, 3, 1, 9].iter().map(|&x| IVec3::new(x, 2, -4)).collect();
    let err = build(&points).unwrap_err();
    assert!(matches!(err, HullError::Degenerate { .. }));
    assert!(format!("{err}").contains("collinear"));
}

#[test]
fn test_hull_coplanar_points() {
    let points = vec![
        IVec3::new(0, 0, 7),
        IVec3::new(10, 0, 7),
        IVec3::new(0, 10, 7),
        IVec3::new(10, 10, 7),
        IVec3::new(3, 4, 7),
    ];
    let err = build(&points).unwrap_err();
    assert!(format!("{err}").contains("coplanar"));
}

#[test]
fn test_hull_coincident_points() {
    let points = vec![IVec3::splat(3); 6];
    assert!(matches!(
        build(&points).unwrap_err(),
        HullError::Degenerate { .. }
    ));
}
