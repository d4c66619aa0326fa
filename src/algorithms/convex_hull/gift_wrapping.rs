use std::cmp::Ordering;

use super::chain::monotone_chain;
use crate::data::Point;
use crate::{Orientation, PolygonScalar, TotalOrd};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All results with three or more vertices are strictly convex.
//    No points are outside the resulting convex polygon.
/// Convex hull of a set of points, in counter-clockwise order.
///
/// [Gift Wrapping][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Returns an empty result iff the input set
/// contains less than three distinct, non-colinear points.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
/// * The first vertex is the lexicographically smallest input point.
///
/// # Time complexity
/// $O(n h)$ where h is the number of vertices on the convex hull.
///
/// # Examples
///
/// ```rust
/// # use hull2d::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use hull2d::data::Point;
/// let empty_set: Vec<Point<i32, 2>> = vec![];
/// assert!(convex_hull(&empty_set).is_empty());
///
/// let dups = vec![Point::new([0, 0])].repeat(3);
/// assert!(convex_hull(&dups).is_empty());
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: &[Point<T, 2>]) -> Vec<Point<T, 2>>
where
  T: PolygonScalar,
{
  let hull = march(pts);
  if hull.len() < 3 {
    return Vec::new();
  }
  hull
}

/// $O(n h)$ Raw gift-wrapping walk.
///
/// Unlike [convex_hull] this keeps degenerate results: an all-identical input
/// yields a single vertex and an all-colinear input yields its two extreme
/// endpoints. The divide-and-conquer builder relies on this for its base
/// cases.
pub fn march<T>(pts: &[Point<T, 2>]) -> Vec<Point<T, 2>>
where
  T: PolygonScalar,
{
  let n = pts.len();
  let start = match leftmost_point_index(pts) {
    Some(index) => index,
    None => return Vec::new(),
  };

  let mut hull: Vec<Point<T, 2>> = Vec::with_capacity(n);
  let mut p = start;

  loop {
    hull.push(pts[p].clone());
    let mut q = (p + 1) % n;

    for i in 0..n {
      let orientation = pts[p].orientation(&pts[i], &pts[q]);
      // On exact colinearity keep the farther candidate so mid-segment
      // points never enter the hull.
      if orientation == Orientation::CounterClockWise
        || (orientation == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[i], &pts[q]) == Ordering::Greater)
      {
        q = i;
      }
    }

    p = q;
    // Compare by value, not index: the walk may return to a duplicate of the
    // starting point.
    if pts[p] == pts[start] {
      break;
    }
    // A hull can never have more vertices than there are input points. The
    // walk only gets here if inexact distance ties sent it in a cycle that
    // skips the start; rebuild with the tie-free monotone chain instead.
    if hull.len() == n {
      return monotone_chain(pts);
    }
  }

  hull
}

// Lexicographically smallest point: min x, ties by min y.
// O(n)
fn leftmost_point_index<T>(pts: &[Point<T, 2>]) -> Option<usize>
where
  T: PolygonScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| {
      TotalOrd::total_cmp(&(a.x_coord(), a.y_coord()), &(b.x_coord(), b.y_coord()))
    })
    .map(|(index, _)| index)
}
