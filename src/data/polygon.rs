use crate::data::Point;
use crate::Error;
use crate::Orientation;
use crate::PolygonScalar;
use crate::TotalOrd;

mod convex;
pub use convex::*;

/// A ring of vertices in counter-clockwise order.
#[derive(Debug, Clone)]
pub struct Polygon<T> {
  pub(crate) vertices: Vec<Point<T, 2>>,
}

impl<T> Polygon<T> {
  pub fn new_unchecked(vertices: Vec<Point<T, 2>>) -> Polygon<T> {
    Polygon { vertices }
  }

  pub fn new(vertices: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error>
  where
    T: PolygonScalar,
  {
    let mut p = Self::new_unchecked(vertices);
    p.ensure_ccw();
    p.validate()?;
    Ok(p)
  }
}

impl<T> Polygon<T> {
  // Validate that a polygon is simple.
  // https://en.wikipedia.org/wiki/Simple_polygon
  pub fn validate(&self) -> Result<(), Error>
  where
    T: PolygonScalar,
  {
    // Has no duplicate points.
    let mut seen: Vec<&Point<T, 2>> = self.vertices.iter().collect();
    seen.sort_unstable_by(|a, b| {
      TotalOrd::total_cmp(&(a.x_coord(), a.y_coord()), &(b.x_coord(), b.y_coord()))
    });
    if seen.windows(2).any(|w| w[0] == w[1]) {
      return Err(Error::DuplicatePoints);
    }

    self.validate_weakly()
  }

  pub fn validate_weakly(&self) -> Result<(), Error>
  where
    T: PolygonScalar,
  {
    // Has at least three points.
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    // Is counter-clockwise.
    if !self.winding().is_ccw() {
      return Err(Error::ClockWiseViolation);
    }
    Ok(())
  }

  /// Reverse the vertex ring if it is wound clockwise. Rings without area
  /// are left untouched.
  pub fn ensure_ccw(&mut self)
  where
    T: PolygonScalar,
  {
    if self.winding().is_cw() {
      self.vertices.reverse();
    }
  }

  // Winding judged by the turn at the lexicographically smallest vertex.
  // The shoelace sum would overflow narrow scalar types; the orientation
  // predicate stays exact.
  fn winding(&self) -> Orientation
  where
    T: PolygonScalar,
  {
    let n = self.vertices.len();
    if n < 3 {
      return Orientation::CoLinear;
    }
    let min = (0..n)
      .min_by(|&a, &b| {
        let p = &self.vertices[a];
        let q = &self.vertices[b];
        TotalOrd::total_cmp(&(p.x_coord(), p.y_coord()), &(q.x_coord(), q.y_coord()))
      })
      .unwrap_or(0);
    let prev = &self.vertices[(min + n - 1) % n];
    let next = &self.vertices[(min + 1) % n];
    prev.orientation(&self.vertices[min], next)
  }

  pub fn signed_area(&self) -> T
  where
    T: PolygonScalar,
  {
    self.signed_area_2x() / T::from_constant(2)
  }

  /// Twice the signed area of the ring. Positive iff the winding is
  /// counter-clockwise. The sum accumulates in `T` and can overflow narrow
  /// scalar types; winding checks go through the orientation predicate.
  pub fn signed_area_2x(&self) -> T
  where
    T: PolygonScalar,
  {
    let n = self.vertices.len();
    (0..n)
      .map(|i| {
        let p = &self.vertices[i];
        let q = &self.vertices[(i + 1) % n];
        p.array[0].clone() * q.array[1].clone() - q.array[0].clone() * p.array[1].clone()
      })
      .sum()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Point<T, 2>> {
    self.vertices.iter()
  }

  pub fn boundary_slice(&self) -> &[Point<T, 2>] {
    &self.vertices
  }
}
