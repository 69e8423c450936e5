//! Tests for the cube buffer and drawing API.

use l3d_cube::color::palette;
use l3d_cube::{ChannelOrder, Color, Cube, CubeConfig, CubeError, PIXEL_COUNT, Point};
use tests::{MockDriver, MockError, rgb};

type TestCube = Cube<MockDriver, 125>;

fn cube() -> TestCube {
    let mut cube = TestCube::new(MockDriver::new(), CubeConfig::new(5, 50)).unwrap();
    cube.begin().unwrap();
    cube
}

fn lit(cube: &TestCube) -> Vec<(i32, i32, i32)> {
    cube.layout()
        .voxels()
        .filter(|&(x, y, z)| cube.get_voxel(x, y, z).unwrap() != palette::BLACK)
        .collect()
}

const C: Color = rgb(10, 20, 30);

// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

#[test]
fn rejects_cube_larger_than_strip() {
    let result = TestCube::new(MockDriver::new(), CubeConfig::new(6, 50));
    assert!(matches!(
        result,
        Err(CubeError::InvalidSize { size: 6, capacity: 125 })
    ));
}

#[test]
fn rejects_empty_cube() {
    let result = TestCube::new(MockDriver::new(), CubeConfig::new(0, 50));
    assert!(matches!(result, Err(CubeError::InvalidSize { .. })));
}

#[test]
fn default_cube_uses_preset() {
    let cube = Cube::<MockDriver, PIXEL_COUNT>::default_cube(MockDriver::new()).unwrap();

    assert_eq!(cube.config(), &CubeConfig::default());
    assert_eq!(cube.max_brightness(), 50);
}

#[test]
fn begin_initializes_driver_and_center() {
    let cube = cube();

    assert_eq!(cube.driver().init_calls, 1);
    assert_eq!(cube.driver().brightness, Some(50));
    assert_eq!(cube.center(), Point::new(2.0, 2.0, 2.0));
    assert!(lit(&cube).is_empty());
}

#[test]
fn begin_uses_configured_strip_brightness() {
    let config = CubeConfig::new(4, 50).with_strip_brightness(20);
    let mut cube = Cube::<MockDriver, 64>::new(MockDriver::new(), config).unwrap();
    cube.begin().unwrap();

    assert_eq!(cube.driver().brightness, Some(20));
    assert_eq!(cube.center(), Point::new(2.0, 2.0, 2.0));
}

#[test]
fn begin_reports_driver_failure() {
    let mut cube = TestCube::new(MockDriver::failing_init(), CubeConfig::new(5, 50)).unwrap();
    assert_eq!(cube.begin(), Err(CubeError::Driver(MockError)));
}

// -----------------------------------------------------------------------------
// Voxel access
// -----------------------------------------------------------------------------

#[test]
fn voxel_round_trips_through_packing() {
    let mut cube = cube();

    for (x, y, z) in [(0, 0, 0), (1, 2, 3), (4, 4, 4), (4, 0, 2)] {
        let color = rgb(x as u8 * 50, y as u8 * 40 + 1, z as u8 * 30 + 2);
        cube.set_voxel(x, y, z, color).unwrap();
        assert_eq!(cube.get_voxel(x, y, z), Ok(color));
    }
}

#[test]
fn voxel_is_stored_at_strip_index_in_grb_order() {
    let mut cube = cube();
    cube.set_voxel(1, 2, 3, rgb(1, 2, 3)).unwrap();

    assert_eq!(cube.pixels()[3 * 25 + 5 + 2], 0x0002_0103);
}

#[test]
fn rgb_order_cube_stores_rgb_words() {
    let config = CubeConfig::new(5, 50).with_channel_order(ChannelOrder::Rgb);
    let mut cube = TestCube::new(MockDriver::new(), config).unwrap();
    cube.set_voxel(0, 0, 0, rgb(1, 2, 3)).unwrap();

    assert_eq!(cube.pixels()[0], 0x0001_0203);
    assert_eq!(cube.get_voxel(0, 0, 0), Ok(rgb(1, 2, 3)));
}

#[test]
fn voxel_by_point_truncates() {
    let mut cube = cube();
    cube.set_voxel_at(Point::new(1.7, 0.2, 3.9), C).unwrap();

    assert_eq!(cube.get_voxel(1, 0, 3), Ok(C));
    assert_eq!(cube.get_voxel_at(Point::new(1.0, 0.9, 3.5)), Ok(C));
}

#[test]
fn out_of_bounds_voxel_is_rejected() {
    let mut cube = cube();

    assert_eq!(cube.set_voxel(5, 0, 0, C), Err(CubeError::OutOfBounds));
    assert_eq!(cube.set_voxel(0, -1, 0, C), Err(CubeError::OutOfBounds));
    assert_eq!(cube.get_voxel(0, 0, 5), Err(CubeError::OutOfBounds));
    assert!(lit(&cube).is_empty());
}

#[test]
fn pixels_past_the_cube_are_addressable() {
    let mut cube = Cube::<MockDriver, 130>::new(MockDriver::new(), CubeConfig::new(5, 50)).unwrap();
    cube.begin().unwrap();

    cube.set_pixel(127, C).unwrap();
    cube.background(palette::WHITE);

    assert_eq!(cube.get_pixel(127), Ok(C));
    assert_eq!(cube.get_pixel(124), Ok(palette::WHITE));
    assert_eq!(cube.get_pixel(128), Ok(palette::BLACK));
    assert_eq!(cube.set_pixel(130, C), Err(CubeError::OutOfBounds));
}

#[test]
fn set_pixel_matches_voxel_index() {
    let mut cube = cube();
    cube.set_pixel(26, C).unwrap();

    assert_eq!(cube.get_voxel(0, 1, 1), Ok(C));
}

// -----------------------------------------------------------------------------
// Primitives
// -----------------------------------------------------------------------------

#[test]
fn background_fills_every_voxel() {
    let mut cube = cube();
    cube.background(C);

    for (x, y, z) in cube.layout().voxels() {
        assert_eq!(cube.get_voxel(x, y, z), Ok(C));
    }
}

#[test]
fn line_to_same_point_sets_one_voxel() {
    let mut cube = cube();
    cube.line(Point::new(2.0, 3.0, 1.0), Point::new(2.0, 3.0, 1.0), C);

    assert_eq!(lit(&cube), vec![(2, 3, 1)]);
    assert_eq!(cube.get_voxel(2, 3, 1), Ok(C));
}

#[test]
fn axis_line_sets_five_voxels() {
    let mut cube = cube();
    cube.line(Point::new(0.0, 0.0, 0.0), Point::new(4.0, 0.0, 0.0), C);

    let mut voxels = lit(&cube);
    voxels.sort_unstable();
    assert_eq!(voxels, vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0), (4, 0, 0)]);
}

#[test]
fn line_is_clipped_to_cube() {
    let mut cube = cube();
    cube.line(Point::new(-2.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0), C);

    assert_eq!(lit(&cube).len(), 3);
}

#[test]
fn line_with_far_endpoints_is_clipped() {
    let mut cube = cube();
    cube.line(Point::new(-3.0e9, 0.0, 0.0), Point::new(3.0e9, 0.0, 0.0), C);

    let mut voxels = lit(&cube);
    voxels.sort_unstable();
    assert_eq!(voxels, vec![(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0), (4, 0, 0)]);
}

#[test]
fn line_passing_beside_the_cube_draws_nothing() {
    let mut cube = cube();
    cube.line(Point::new(0.0, -3.0e9, 9.0), Point::new(4.0, 3.0e9, 9.0), C);

    assert!(lit(&cube).is_empty());
}

#[test]
fn large_sphere_fills_the_cube() {
    let mut cube = cube();
    cube.sphere(cube.center(), 50_000, C);

    assert_eq!(lit(&cube).len(), 125);
}

#[test]
fn far_away_sphere_draws_nothing() {
    let mut cube = cube();
    cube.sphere(Point::new(-3.0e9, 2.0, 2.0), i32::MAX, C);
    cube.sphere(Point::new(3.0e9, 3.0e9, 3.0e9), 10, C);

    assert!(lit(&cube).is_empty());
}

#[test]
fn circle_far_from_the_cube_draws_nothing() {
    let mut cube = cube();
    cube.empty_flat_circle(i32::MAX, 2, i32::MIN, 3, C);
    cube.empty_flat_circle(2, i32::MAX, 2, 2, C);

    assert!(lit(&cube).is_empty());
}

#[test]
fn sphere_of_radius_zero_sets_center() {
    let mut cube = cube();
    cube.sphere(cube.center(), 0, C);

    assert_eq!(lit(&cube), vec![(2, 2, 2)]);
}

#[test]
fn sphere_of_radius_one() {
    let mut cube = cube();
    cube.sphere(Point::new(2.0, 2.0, 2.0), 1, C);

    let voxels = lit(&cube);
    assert_eq!(voxels.len(), 7);
    assert!(voxels.contains(&(2, 2, 3)));
    assert!(!voxels.contains(&(3, 3, 2)));
}

#[test]
fn sphere_in_corner_is_clipped() {
    let mut cube = cube();
    cube.sphere(Point::ZERO, 1, C);

    let mut voxels = lit(&cube);
    voxels.sort_unstable();
    assert_eq!(voxels, vec![(0, 0, 0), (0, 0, 1), (0, 1, 0), (1, 0, 0)]);
}

#[test]
fn thin_shell_keeps_voxels_at_radius() {
    let mut cube = cube();
    cube.shell(Point::new(2.0, 2.0, 2.0), 2.0, C);

    let mut voxels = lit(&cube);
    voxels.sort_unstable();
    assert_eq!(
        voxels,
        vec![(0, 2, 2), (2, 0, 2), (2, 2, 0), (2, 2, 4), (2, 4, 2), (4, 2, 2)]
    );
}

#[test]
fn thick_shell_covers_the_cube() {
    let mut cube = cube();
    cube.shell_with_thickness(cube.center(), 0.0, 10.0, C);

    assert_eq!(lit(&cube).len(), 125);
}

#[test]
fn flat_circle_stays_in_its_layer() {
    let mut cube = cube();
    cube.empty_flat_circle(2, 3, 2, 2, C);

    let voxels = lit(&cube);
    assert_eq!(voxels.len(), 12);
    assert!(voxels.iter().all(|&(_, y, _)| y == 3));
    assert!(voxels.contains(&(4, 3, 2)));
    assert!(voxels.contains(&(1, 3, 0)));
    assert!(!voxels.contains(&(2, 3, 2)));
}

#[test]
fn flat_circle_is_clipped() {
    let mut cube = cube();
    cube.empty_flat_circle(0, 0, 0, 2, C);

    let mut voxels = lit(&cube);
    voxels.sort_unstable();
    assert_eq!(voxels, vec![(0, 0, 2), (1, 0, 2), (2, 0, 0), (2, 0, 1)]);
}

// -----------------------------------------------------------------------------
// Colors
// -----------------------------------------------------------------------------

#[test]
fn color_map_uses_cube_brightness() {
    let cube = cube();

    assert_eq!(cube.color_map(0.0, 0.0, 10.0), rgb(0, 0, 50));
    assert_eq!(cube.ramp().stops()[4], rgb(50, 0, 0));
}

#[test]
fn limit_applies_brightness_cap() {
    let cube = cube();

    assert_eq!(cube.limit(palette::WHITE), rgb(50, 50, 50));
    assert_eq!(cube.lerp_color(palette::BLACK, rgb(10, 10, 10), 1, 0, 3), rgb(3, 3, 3));
}

#[test]
fn set_voxel_does_not_limit_colors() {
    let mut cube = cube();
    cube.set_voxel(0, 0, 0, palette::WHITE).unwrap();

    assert_eq!(cube.get_voxel(0, 0, 0), Ok(palette::WHITE));
}

// -----------------------------------------------------------------------------
// Flush
// -----------------------------------------------------------------------------

#[test]
fn show_sends_buffer_to_driver() {
    let mut cube = cube();
    cube.set_voxel(0, 1, 0, C).unwrap();
    cube.show().unwrap();

    let frame = cube.driver().last_frame().unwrap();
    assert_eq!(frame.len(), 125);
    assert_eq!(frame[1], ChannelOrder::Grb.pack(C));
}

#[test]
fn show_is_idempotent() {
    let mut cube = cube();
    cube.background(C);
    cube.show().unwrap();
    cube.show().unwrap();

    let frames = &cube.driver().frames;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], frames[1]);
}

#[test]
fn writes_are_invisible_until_show() {
    let mut cube = cube();
    cube.show().unwrap();
    cube.set_voxel(0, 0, 0, C).unwrap();

    assert_eq!(cube.driver().last_frame().unwrap()[0], 0);
    cube.show().unwrap();
    assert_ne!(cube.driver().last_frame().unwrap()[0], 0);
}

#[test]
fn show_propagates_driver_failure() {
    let mut cube = TestCube::new(MockDriver::failing_write(), CubeConfig::new(5, 50)).unwrap();

    assert_eq!(cube.show(), Err(CubeError::Driver(MockError)));
    assert!(cube.driver().frames.is_empty());
}

#[test]
fn error_messages() {
    assert_eq!(
        CubeError::<MockError>::OutOfBounds.to_string(),
        "Coordinate out of bounds"
    );
    assert_eq!(
        CubeError::<MockError>::Driver(MockError).to_string(),
        "LED driver error: MockError"
    );
}
