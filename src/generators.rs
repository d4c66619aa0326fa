//! Point-cloud generators for exercising and benchmarking the hull builders.
//!
//! Each generator produces a plain `Vec` of points; none of the builders
//! depend on how their input was produced.

use rand::Rng;

use crate::data::Point;

/// $O(n)$ `n` points drawn uniformly from `[0, width) x [0, height)`.
pub fn uniform_rect<R>(n: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point<f64, 2>>
where
  R: Rng + ?Sized,
{
  (0..n)
    .map(|_| Point::new([rng.gen::<f64>() * width, rng.gen::<f64>() * height]))
    .collect()
}

/// $O(n)$ `n` points at evenly spaced angles around the origin, each at a
/// radius scaled uniformly from `[1 - jitter, 1 + jitter]`.
///
/// With `jitter = 0` every point lies exactly on the circle and therefore on
/// the hull, the worst case for output-sensitive wrapping.
pub fn ring<R>(n: usize, radius: f64, jitter: f64, rng: &mut R) -> Vec<Point<f64, 2>>
where
  R: Rng + ?Sized,
{
  (0..n)
    .map(|i| {
      let angle = std::f64::consts::TAU * (i as f64) / (n as f64);
      let scale = 1.0 - jitter + 2.0 * jitter * rng.gen::<f64>();
      Point::new([radius * scale * angle.cos(), radius * scale * angle.sin()])
    })
    .collect()
}

/// $O(n)$ Deterministic grid points on the four sides of a square of the
/// given size, `per_side` per side with shared corners. Every edge is one
/// long colinear run.
pub fn square_boundary(per_side: usize, size: f64) -> Vec<Point<f64, 2>> {
  if per_side < 2 {
    return Vec::new();
  }
  let step = size / ((per_side - 1) as f64);
  let mut pts = Vec::with_capacity(4 * (per_side - 1));
  for i in 0..per_side {
    let t = step * (i as f64);
    pts.push(Point::new([t, 0.0]));
    pts.push(Point::new([t, size]));
  }
  for i in 1..per_side - 1 {
    let t = step * (i as f64);
    pts.push(Point::new([0.0, t]));
    pts.push(Point::new([size, t]));
  }
  pts
}

/// $O(n)$ `n` points evenly spaced on the horizontal segment from `(0, y)`
/// to `(100, y)`. Fully degenerate input: the hull collapses to a segment.
pub fn collinear(n: usize, y: f64) -> Vec<Point<f64, 2>> {
  if n == 1 {
    return vec![Point::new([0.0, y])];
  }
  (0..n)
    .map(|i| Point::new([100.0 * (i as f64) / ((n - 1) as f64), y]))
    .collect()
}
