//! Raster pictures of a simulation run
//!
//! Rendering is downstream of estimation only: nothing here feeds back into
//! an [`Estimate`](crate::estimate::Estimate).
use image::{Rgb, RgbImage};
use rand::Rng;
use std::f64::consts::TAU;
use std::fmt;

use crate::result::Result;
use crate::sample_set::SampleSet;
use crate::simulation::Simulation;

/// Turns a [`SampleSet`] into a picture
pub trait Renderer {
    type Output;

    fn render(&self, samples: &SampleSet) -> Self::Output;
}

/// Fraction of the radius left as blank space around the square
const MARGIN: f64 = 0.05;
/// Vertices used to approximate the circle outline
const CIRCLE_VERTICES: usize = 100;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The canvas has no pixels
    EmptyCanvas { width: u32, height: u32 },
}

impl std::error::Error for RenderError {}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCanvas { width, height } => {
                write!(f, "canvas has no pixels: {}x{}", width, height)
            }
        }
    }
}

/// Draws the circle outline, the bounding square, and every point, colored
/// by whether it is inside the circle, onto an RGB image.
///
/// Both axes share one scale, so the circle is round on non-square canvases.
///
/// # Example
///
/// ```
/// use mcpi::render::{RasterRenderer, Renderer};
/// use mcpi::simulation::Simulation;
///
/// let run = Simulation::seeded(3).run(2_000).unwrap();
/// let img = RasterRenderer::default().render(run.samples());
///
/// assert_eq!(img.dimensions(), (600, 600));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RasterRenderer {
    width: u32,
    height: u32,
    line_width: u32,
    marker_size: u32,
    /// Opacity of the point markers
    alpha: f64,
    background: Rgb<u8>,
    outline: Rgb<u8>,
    inside: Rgb<u8>,
    outside: Rgb<u8>,
}

impl Default for RasterRenderer {
    /// 600 × 600, white background, red points inside and blue outside
    fn default() -> Self {
        RasterRenderer {
            width: 600,
            height: 600,
            line_width: 2,
            marker_size: 2,
            alpha: 0.6,
            background: WHITE,
            outline: BLACK,
            inside: RED,
            outside: BLUE,
        }
    }
}

impl RasterRenderer {
    /// A renderer with the default style on a `width × height` canvas
    pub fn new(
        width: u32,
        height: u32,
    ) -> std::result::Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas { width, height });
        }
        Ok(RasterRenderer {
            width,
            height,
            ..RasterRenderer::default()
        })
    }

    #[must_use]
    pub fn with_colors(mut self, inside: Rgb<u8>, outside: Rgb<u8>) -> Self {
        self.inside = inside;
        self.outside = outside;
        self
    }

    /// Marker opacity, clamped to [0, 1]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_marker_size(mut self, marker_size: u32) -> Self {
        self.marker_size = marker_size.max(1);
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Maps data coordinates onto pixel coordinates with y pointing up
struct Canvas {
    img: RgbImage,
    scale: f64,
    cx: f64,
    cy: f64,
}

impl Canvas {
    fn new(width: u32, height: u32, radius: f64, bg: Rgb<u8>) -> Self {
        // divide by the radius last so a huge radius cannot overflow
        let pixels_per_radius =
            f64::from(width.min(height)) / (2.0 * (1.0 + MARGIN));
        Canvas {
            img: RgbImage::from_pixel(width, height, bg),
            scale: pixels_per_radius / radius,
            cx: f64::from(width) / 2.0,
            cy: f64::from(height) / 2.0,
        }
    }

    fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (x.mul_add(self.scale, self.cx), (-y).mul_add(self.scale, self.cy))
    }

    /// Blend a `size × size` block centred on pixel `(px, py)`
    fn stamp(
        &mut self,
        px: f64,
        py: f64,
        size: u32,
        color: Rgb<u8>,
        alpha: f64,
    ) {
        let half = i64::from(size / 2);
        let (x0, y0) = (px.round() as i64 - half, py.round() as i64 - half);
        let w = i64::from(self.img.width());
        let h = i64::from(self.img.height());

        for x in x0..x0 + i64::from(size) {
            for y in y0..y0 + i64::from(size) {
                if (0..w).contains(&x) && (0..h).contains(&y) {
                    let pixel = self.img.get_pixel_mut(x as u32, y as u32);
                    *pixel = blend(*pixel, color, alpha);
                }
            }
        }
    }

    /// Straight segment between two points in data coordinates
    fn segment(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        width: u32,
        color: Rgb<u8>,
    ) {
        let (x0, y0) = self.to_pixel(from.0, from.1);
        let (x1, y1) = self.to_pixel(to.0, to.1);
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0);
        let n = steps as usize;
        for i in 0..=n {
            let t = i as f64 / steps;
            self.stamp(
                t.mul_add(x1 - x0, x0),
                t.mul_add(y1 - y0, y0),
                width,
                color,
                1.0,
            );
        }
    }

    fn polyline(
        &mut self,
        vertices: &[(f64, f64)],
        width: u32,
        color: Rgb<u8>,
    ) {
        for pair in vertices.windows(2) {
            self.segment(pair[0], pair[1], width, color);
        }
    }
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, alpha: f64) -> Rgb<u8> {
    let mix = |u: u8, o: u8| {
        alpha
            .mul_add(f64::from(o), (1.0 - alpha) * f64::from(u))
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgb([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
    ])
}

impl Renderer for RasterRenderer {
    type Output = RgbImage;

    fn render(&self, samples: &SampleSet) -> RgbImage {
        let r = samples.radius();
        let mut canvas =
            Canvas::new(self.width, self.height, r, self.background);

        let circle: Vec<(f64, f64)> = (0..CIRCLE_VERTICES)
            .map(|k| {
                let theta = TAU * k as f64 / (CIRCLE_VERTICES - 1) as f64;
                (r * theta.cos(), r * theta.sin())
            })
            .collect();
        canvas.polyline(&circle, self.line_width, self.outline);

        let square = [(-r, -r), (-r, r), (r, r), (r, -r), (-r, -r)];
        canvas.polyline(&square, self.line_width, self.outline);

        for (x, y, inside) in samples.points() {
            let color = if inside { self.inside } else { self.outside };
            let (px, py) = canvas.to_pixel(x, y);
            canvas.stamp(px, py, self.marker_size, color, self.alpha);
        }

        canvas.img
    }
}

/// A rendered run together with the numbers it illustrates
#[derive(Debug, Clone)]
pub struct Plot<T> {
    pub image: T,
    pub pi_estimate: f64,
    pub points_inside: usize,
    pub total_points: usize,
}

/// Run `n` points through `sim` and render them.
///
/// # Example
///
/// ```
/// use mcpi::render::{generate_plot, RasterRenderer};
/// use mcpi::simulation::Simulation;
///
/// let mut sim = Simulation::seeded(0);
/// let renderer = RasterRenderer::new(300, 200).unwrap();
///
/// let plot = generate_plot(&mut sim, &renderer, 500).unwrap();
/// assert_eq!(plot.total_points, 500);
/// assert_eq!(plot.image.dimensions(), (300, 200));
/// ```
pub fn generate_plot<R, Rd>(
    sim: &mut Simulation<R>,
    renderer: &Rd,
    n: usize,
) -> Result<Plot<Rd::Output>>
where
    R: Rng,
    Rd: Renderer,
{
    let run = sim.run(n)?;
    let image = renderer.render(run.samples());
    let estimate = run.estimate();
    Ok(Plot {
        image,
        pi_estimate: estimate.pi_estimate(),
        points_inside: estimate.n_inside(),
        total_points: estimate.n_samples(),
    })
}
