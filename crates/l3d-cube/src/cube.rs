//! Cube - pixel buffer owner and drawing API
//!
//! The cube holds one packed word per strip pixel. Drawing calls only
//! mutate that buffer; [`Cube::show`] is the single point where the buffer
//! reaches the hardware.
//!
//! Direct access (`set_voxel`, `get_voxel`, `set_pixel`, `get_pixel`)
//! rejects positions outside of the cube or strip with
//! [`CubeError::OutOfBounds`]. Drawing primitives clip instead: voxels that
//! fall outside of the cube are skipped.

use log::{debug, trace, warn};

use crate::{
    color::{ColorRamp, lerp_color, limit_color, palette},
    config::{CUBE, CubeConfig},
    driver::LedDriver,
    error::CubeError,
    layout::Layout,
    point::Point,
    raster::{CircleOffsets, Line, ShellBounds, SphereOffsets},
    Color,
};

/// Shell thickness used by [`Cube::shell`]
pub const DEFAULT_SHELL_THICKNESS: f32 = 0.1;

/// LED cube backed by a single strip of `N` pixels
///
/// Generic over `D: LedDriver` to support different hardware backends.
/// `N` may exceed the voxel count; the extra pixels are reachable through
/// [`Cube::set_pixel`].
pub struct Cube<D: LedDriver, const N: usize> {
    /// Hardware driver for LED output
    driver: D,
    /// Settings the cube was built with
    config: CubeConfig,
    /// Voxel addressing
    layout: Layout,
    /// Hue ramp built from the brightness cap
    ramp: ColorRamp,
    /// Center voxel, set by `begin`
    center: Point,
    /// Packed pixel words in strip order
    pixels: [u32; N],
}

impl<D: LedDriver, const N: usize> Cube<D, N> {
    /// Create a new cube
    ///
    /// Fails with [`CubeError::InvalidSize`] when the size is zero or the
    /// cube needs more than `N` pixels.
    pub fn new(driver: D, config: CubeConfig) -> Result<Self, CubeError<D::Error>> {
        if config.size == 0 || config.voxel_count() > N {
            return Err(CubeError::InvalidSize {
                size: config.size as usize,
                capacity: N,
            });
        }

        Ok(Self {
            driver,
            config,
            layout: Layout::new(config.size as usize),
            ramp: ColorRamp::new(config.max_brightness),
            center: Point::ZERO,
            pixels: [0; N],
        })
    }

    /// Create a cube with the compile-time preset settings
    pub fn default_cube(driver: D) -> Result<Self, CubeError<D::Error>> {
        Self::new(driver, CUBE)
    }

    /// Initialize the hardware and the cube state
    ///
    /// Sets up the driver, applies the strip brightness, clears the buffer
    /// and computes the center voxel.
    pub fn begin(&mut self) -> Result<(), CubeError<D::Error>> {
        debug!(
            "Cube begin: size={}, max_brightness={}, strip_brightness={}, order={:?}",
            self.config.size,
            self.config.max_brightness,
            self.config.strip_brightness,
            self.config.channel_order
        );
        self.driver.init().map_err(CubeError::Driver)?;
        self.driver.set_brightness(self.config.strip_brightness);

        let black = self.pack(palette::BLACK);
        self.pixels.fill(black);

        let half = i32::from(self.config.size / 2);
        self.center = Point::from_voxel(half, half, half);
        Ok(())
    }

    /// Edge length in voxels
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Per-channel cap for synthesized colors
    pub fn max_brightness(&self) -> u8 {
        self.config.max_brightness
    }

    /// Center voxel (valid after `begin`)
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Release the LED driver
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Packed pixel words in strip order
    pub fn pixels(&self) -> &[u32; N] {
        &self.pixels
    }

    // === Voxel access ===

    /// Set a voxel to a color
    ///
    /// The color is written as given; it is not limited by the brightness
    /// cap. Use [`Cube::limit`] for palette colors.
    pub fn set_voxel(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        color: Color,
    ) -> Result<(), CubeError<D::Error>> {
        let index = self.layout.index(x, y, z).ok_or(CubeError::OutOfBounds)?;
        self.pixels[index] = self.pack(color);
        Ok(())
    }

    /// Set the voxel containing a point to a color
    pub fn set_voxel_at(&mut self, point: Point, color: Color) -> Result<(), CubeError<D::Error>> {
        let (x, y, z) = point.to_voxel();
        self.set_voxel(x, y, z, color)
    }

    /// Set a pixel at an arbitrary position in the chain
    pub fn set_pixel(&mut self, index: usize, color: Color) -> Result<(), CubeError<D::Error>> {
        let word = self.pack(color);
        let pixel = self.pixels.get_mut(index).ok_or(CubeError::OutOfBounds)?;
        *pixel = word;
        Ok(())
    }

    /// Get the color of a voxel
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> Result<Color, CubeError<D::Error>> {
        let index = self.layout.index(x, y, z).ok_or(CubeError::OutOfBounds)?;
        Ok(self.unpack(self.pixels[index]))
    }

    /// Get the color of the voxel containing a point
    pub fn get_voxel_at(&self, point: Point) -> Result<Color, CubeError<D::Error>> {
        let (x, y, z) = point.to_voxel();
        self.get_voxel(x, y, z)
    }

    /// Get the color of a pixel at an arbitrary position in the chain
    pub fn get_pixel(&self, index: usize) -> Result<Color, CubeError<D::Error>> {
        self.pixels
            .get(index)
            .map(|&word| self.unpack(word))
            .ok_or(CubeError::OutOfBounds)
    }

    // === Drawing primitives ===

    /// Draw a line in 3D space
    ///
    /// Uses the 3D form of Bresenham's algorithm on the truncated endpoints.
    /// Only the part of the line that crosses the cube is walked.
    pub fn line(&mut self, from: Point, to: Point, color: Color) {
        let line = Line::new(from.to_voxel(), to.to_voxel()).within(0, self.edge());
        for (x, y, z) in line {
            self.plot(x, y, z, color);
        }
    }

    /// Draw a filled sphere
    pub fn sphere(&mut self, center: Point, radius: i32, color: Color) {
        let center = center.to_voxel();
        for offset in SphereOffsets::new(radius).within(center, 0, self.edge()) {
            self.plot_offset(center, offset, color);
        }
    }

    /// Draw a thin spherical shell with the default thickness
    pub fn shell(&mut self, center: Point, radius: f32, color: Color) {
        self.shell_with_thickness(center, radius, DEFAULT_SHELL_THICKNESS, color);
    }

    /// Draw a spherical shell
    ///
    /// Every voxel of the cube whose distance from `center` differs from
    /// `radius` by less than `thickness` is set.
    pub fn shell_with_thickness(&mut self, center: Point, radius: f32, thickness: f32, color: Color) {
        let bounds = ShellBounds::new(center, radius, thickness);
        let word = self.pack(color);
        for index in 0..self.layout.voxel_count() {
            let Some((x, y, z)) = self.layout.coords(index) else {
                continue;
            };
            if bounds.contains(Point::from_voxel(x, y, z)) {
                self.pixels[index] = word;
            }
        }
    }

    /// Draw an empty circle in the XZ plane at height `y`
    ///
    /// Uses the midpoint circle algorithm.
    pub fn empty_flat_circle(&mut self, x: i32, y: i32, z: i32, radius: i32, color: Color) {
        if !(0..self.edge()).contains(&y) {
            return;
        }
        for (dx, dz) in CircleOffsets::new(radius) {
            self.plot_offset((x, y, z), (dx, 0, dz), color);
        }
    }

    /// Set the entire cube to one color
    ///
    /// Pixels past the last voxel are left untouched.
    pub fn background(&mut self, color: Color) {
        let word = self.pack(color);
        self.pixels[..self.layout.voxel_count()].fill(word);
    }

    // === Colors ===

    /// Map a value into a color
    ///
    /// The colors fade from blue to green to red and back again, never
    /// exceeding the brightness cap.
    pub fn color_map(&self, value: f32, min: f32, max: f32) -> Color {
        self.ramp.color_map(value, min, max)
    }

    /// Method form of [`lerp_color`]
    ///
    /// Interpolation does not depend on the cube; this mirrors the color
    /// helpers being reachable from the cube alongside [`Cube::color_map`].
    pub fn lerp_color(&self, a: Color, b: Color, val: i32, min: i32, max: i32) -> Color {
        lerp_color(a, b, val, min, max)
    }

    /// Scale a color down to the brightness cap of this cube
    pub fn limit(&self, color: Color) -> Color {
        limit_color(color, self.config.max_brightness)
    }

    /// Hue ramp used by [`Cube::color_map`]
    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    // === Output ===

    /// Make changes to the cube visible
    ///
    /// Sends the pixel buffer to the LED strip. Driver failures are
    /// returned as-is and never retried.
    pub fn show(&mut self) -> Result<(), CubeError<D::Error>> {
        trace!("Cube show: {} pixels", N);
        self.driver.write(&self.pixels).map_err(|e| {
            warn!("LED strip write failed");
            CubeError::Driver(e)
        })
    }

    /// Edge length as a coordinate bound
    fn edge(&self) -> i32 {
        i32::from(self.config.size)
    }

    /// Plot `origin + offset`, skipping sums outside of the cube
    fn plot_offset(&mut self, origin: (i32, i32, i32), offset: (i32, i32, i32), color: Color) {
        let sum = |a: i32, b: i32| i32::try_from(i64::from(a) + i64::from(b)).ok();
        if let (Some(x), Some(y), Some(z)) = (
            sum(origin.0, offset.0),
            sum(origin.1, offset.1),
            sum(origin.2, offset.2),
        ) {
            self.plot(x, y, z, color);
        }
    }

    fn plot(&mut self, x: i32, y: i32, z: i32, color: Color) {
        if let Some(index) = self.layout.index(x, y, z) {
            self.pixels[index] = self.pack(color);
        }
    }

    fn pack(&self, color: Color) -> u32 {
        self.config.channel_order.pack(color)
    }

    fn unpack(&self, word: u32) -> Color {
        self.config.channel_order.unpack(word)
    }
}
