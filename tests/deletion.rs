//! Deletion round-trip tests: removing vertices must leave a subdivision
//! that is still structurally sound and still Delaunay.

mod common;

use common::{assert_delaunay, assert_euler_count, assert_structural_invariants, build};
use quadedge_delaunay::prelude::*;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

#[test]
fn deleting_interior_point_restores_convex_triangulation() {
    let (mut sub, keys, _) = build(&[(0, 0), (10, 0), (0, 10), (10, 10), (5, 5)]);
    let center = keys
        .iter()
        .copied()
        .find(|&v| sub.point(v) == Point::new(5, 5))
        .unwrap();
    assert!(!sub.on_convex_hull(center));

    delete_and_triangulate(&mut sub, center).unwrap();

    assert_eq!(sub.vertex_count(), 4);
    assert_eq!(sub.edge_count() / 2, 5);
    assert_structural_invariants(&sub);
    assert_delaunay(&sub);
}

#[test]
fn deleting_hull_vertex_leaves_hole_open() {
    // Removing a hull corner of the square must not re-triangulate across
    // the opened boundary.
    let (mut sub, keys, _) = build(&[(0, 0), (10, 0), (0, 10), (10, 10)]);
    let corner = keys
        .iter()
        .copied()
        .find(|&v| sub.point(v) == Point::new(10, 10))
        .unwrap();

    delete_and_triangulate(&mut sub, corner).unwrap();

    assert_eq!(sub.vertex_count(), 3);
    assert_eq!(sub.edge_count() / 2, 3);
    assert_structural_invariants(&sub);
    assert_delaunay(&sub);
}

#[test]
fn deleting_high_degree_hub_retriangulates_the_wheel() {
    // Hexagon with a hub of degree six.
    let mut points = vec![(0, 0)];
    let ring = [(8, 0), (4, 7), (-4, 7), (-8, 0), (-4, -7), (4, -7)];
    points.extend(ring);

    let (mut sub, keys, _) = build(&points);
    let hub = keys
        .iter()
        .copied()
        .find(|&v| sub.point(v) == Point::new(0, 0))
        .unwrap();
    assert_eq!(sub.edge_count() / 2, 12);

    delete_and_triangulate(&mut sub, hub).unwrap();

    // Hexagon: 6 boundary edges + 3 diagonals.
    assert_eq!(sub.edge_count() / 2, 9);
    assert_structural_invariants(&sub);
    assert_delaunay(&sub);
}

#[test]
fn deleted_vertex_key_is_invalidated() {
    let (mut sub, keys, _) = build(&[(0, 0), (10, 0), (0, 10), (10, 10), (5, 5)]);
    let center = keys
        .iter()
        .copied()
        .find(|&v| sub.point(v) == Point::new(5, 5))
        .unwrap();

    delete_and_triangulate(&mut sub, center).unwrap();
    assert!(!sub.contains_vertex(center));
}

#[test]
fn grid_interior_deletions_stay_delaunay() {
    // Delete interior vertices one at a time; the result must stay
    // Delaunay after every single removal.
    let points: Vec<(i64, i64)> = (0..4)
        .flat_map(|x| (0..4).map(move |y| (3 * x, 3 * y)))
        .collect();
    let (mut sub, keys, _) = build(&points);

    let interior: Vec<VertexKey> = keys
        .iter()
        .copied()
        .filter(|&v| !sub.on_convex_hull(v))
        .collect();
    assert_eq!(interior.len(), 4);

    for v in interior {
        delete_and_triangulate(&mut sub, v).unwrap();
        assert_structural_invariants(&sub);
        assert_delaunay(&sub);
    }
    assert_eq!(sub.vertex_count(), 12);
}

#[test]
fn random_interior_deletions_stay_delaunay() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xde1e7e);
    let mut seen = HashSet::new();
    while seen.len() < 60 {
        let p: (i64, i64) = (rng.random_range(-300..300), rng.random_range(-300..300));
        seen.insert(p);
    }
    let points: Vec<(i64, i64)> = seen.into_iter().collect();
    let (mut sub, keys, _) = build(&points);
    assert_delaunay(&sub);

    let mut interior: Vec<VertexKey> = keys
        .iter()
        .copied()
        .filter(|&v| !sub.on_convex_hull(v))
        .collect();
    interior.shuffle(&mut rng);

    for v in interior.into_iter().take(10) {
        // A previous deletion may have promoted this vertex to the hull;
        // deletion handles both cases.
        delete_and_triangulate(&mut sub, v).unwrap();
        assert_structural_invariants(&sub);
        assert_delaunay(&sub);
    }
}

#[test]
fn deletion_preserves_the_euler_relation() {
    let (mut sub, keys, _) = build(&[(0, 0), (10, 0), (0, 10), (10, 10), (5, 5)]);
    let edges_before = sub.edge_count();
    let center = keys
        .iter()
        .copied()
        .find(|&v| sub.point(v) == Point::new(5, 5))
        .unwrap();

    delete_and_triangulate(&mut sub, center).unwrap();
    assert!(sub.edge_count() < edges_before);
    assert_euler_count(
        &sub,
        &keys.iter().copied().filter(|&v| v != center).collect::<Vec<_>>(),
    );
}
