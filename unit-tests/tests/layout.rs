//! Tests for voxel addressing and coordinates.

use std::collections::HashSet;

use l3d_cube::{Layout, Point};

// -----------------------------------------------------------------------------
// Strip order
// -----------------------------------------------------------------------------

#[test]
fn index_follows_strip_wiring() {
    let layout = Layout::new(5);

    assert_eq!(layout.index(0, 0, 0), Some(0));
    assert_eq!(layout.index(0, 1, 0), Some(1));
    assert_eq!(layout.index(1, 0, 0), Some(5));
    assert_eq!(layout.index(0, 0, 1), Some(25));
    assert_eq!(layout.index(1, 2, 3), Some(3 * 25 + 5 + 2));
    assert_eq!(layout.index(4, 4, 4), Some(124));
}

#[test]
fn index_is_injective_inside_the_cube() {
    let layout = Layout::new(5);
    let mut seen = HashSet::new();

    for x in 0..5 {
        for y in 0..5 {
            for z in 0..5 {
                let index = layout.index(x, y, z).unwrap();
                assert!(index < layout.voxel_count());
                assert!(seen.insert(index), "index {index} repeated");
            }
        }
    }
    assert_eq!(seen.len(), 125);
}

#[test]
fn coords_invert_index() {
    let layout = Layout::new(4);

    for (x, y, z) in layout.voxels() {
        let index = layout.index(x, y, z).unwrap();
        assert_eq!(layout.coords(index), Some((x, y, z)));
    }
    assert_eq!(layout.voxels().count(), 64);
}

// -----------------------------------------------------------------------------
// Bounds
// -----------------------------------------------------------------------------

#[test]
fn out_of_range_coordinates_have_no_index() {
    let layout = Layout::new(5);

    assert_eq!(layout.index(5, 0, 0), None);
    assert_eq!(layout.index(0, 5, 0), None);
    assert_eq!(layout.index(0, 0, 5), None);
    assert_eq!(layout.index(-1, 0, 0), None);
    assert!(!layout.contains(0, -1, 2));
    assert_eq!(layout.coords(125), None);
}

// -----------------------------------------------------------------------------
// Points
// -----------------------------------------------------------------------------

#[test]
fn point_truncates_to_voxel() {
    assert_eq!(Point::new(1.9, 2.2, 3.0).to_voxel(), (1, 2, 3));
    assert_eq!(Point::new(-0.5, 0.0, 4.99).to_voxel(), (0, 0, 4));
    assert_eq!(Point::from((2, 3, 4)), Point::new(2.0, 3.0, 4.0));
}

#[test]
fn point_distance_squared() {
    let a = Point::new(1.0, 2.0, 3.0);
    let b = Point::new(4.0, 6.0, 3.0);

    assert!((a.distance_squared(b) - 25.0).abs() < f32::EPSILON);
    assert_eq!(b - a, Point::new(3.0, 4.0, 0.0));
    assert_eq!(a + Point::ZERO, a);
}
