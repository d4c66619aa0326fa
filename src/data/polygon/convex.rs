use claims::debug_assert_ok;
use std::ops::Deref;

use crate::data::Point;
use crate::data::PointLocation;
use crate::{Error, Orientation, PolygonScalar};

use super::Polygon;

#[derive(Debug, Clone)]
pub struct PolygonConvex<T>(Polygon<T>);

///////////////////////////////////////////////////////////////////////////////
// PolygonConvex

impl<T> PolygonConvex<T>
where
  T: PolygonScalar,
{
  /// $O(1)$ Assume that a polygon is convex.
  ///
  /// # Safety
  /// The input polygon has to be strictly convex, ie. no vertices are allowed to
  /// be concave or colinear.
  pub fn new_unchecked(poly: Polygon<T>) -> PolygonConvex<T> {
    let convex = PolygonConvex(poly);
    debug_assert_ok!(convex.validate());
    convex
  }

  /// $O(n \log n)$ Validate a polygon and wrap it.
  pub fn new(poly: Polygon<T>) -> Result<PolygonConvex<T>, Error> {
    let convex = PolygonConvex(poly);
    convex.validate()?;
    Ok(convex)
  }

  /// $O(\log n)$ Locate a point relative to the convex boundary.
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    let vertices = self.0.boundary_slice();
    let p0 = &vertices[0];
    let mut lower = 1;
    let mut upper = vertices.len() - 1;
    while lower + 1 < upper {
      let middle = (lower + upper) / 2;
      if p0.orientation(&vertices[middle], pt) == Orientation::CounterClockWise {
        lower = middle;
      } else {
        upper = middle;
      }
    }
    let p1 = &vertices[lower];
    let p2 = &vertices[upper];
    let o1 = p0.orientation(p1, pt);
    let o2 = p1.orientation(p2, pt);
    let o3 = p2.orientation(p0, pt);
    if o1.is_cw() || o2.is_cw() || o3.is_cw() {
      return PointLocation::Outside;
    }
    // p0->p1 and p2->p0 are internal chords of the fan except at its two
    // ends; a point on an internal chord is strictly inside the hull.
    if o2.is_colinear()
      || (o1.is_colinear() && lower == 1)
      || (o3.is_colinear() && upper == vertices.len() - 1)
    {
      return PointLocation::OnBoundary;
    }
    PointLocation::Inside
  }

  /// $O(n \log n)$ Validate that the polygon is strictly convex.
  pub fn validate(&self) -> Result<(), Error> {
    let vertices = self.0.boundary_slice();
    let n = vertices.len();
    if n < 3 {
      return Err(Error::InsufficientVertices);
    }
    for i in 0..n {
      let q = &vertices[(i + 1) % n];
      let r = &vertices[(i + 2) % n];
      if vertices[i].orientation(q, r) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    self.0.validate()
  }

  /// $O(1)$
  pub fn polygon(&self) -> &Polygon<T> {
    self.into()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl<T: PolygonScalar> Deref for PolygonConvex<T> {
  type Target = Polygon<T>;
  fn deref(&self) -> &Self::Target {
    self.polygon()
  }
}

impl<T> From<PolygonConvex<T>> for Polygon<T> {
  fn from(convex: PolygonConvex<T>) -> Polygon<T> {
    convex.0
  }
}

impl<'a, T> From<&'a PolygonConvex<T>> for &'a Polygon<T> {
  fn from(convex: &'a PolygonConvex<T>) -> &'a Polygon<T> {
    &convex.0
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
