use std::cmp::Ordering;

use super::chain::convex_chain;
use crate::data::Point;
use crate::{Orientation, PolygonScalar, TotalOrd};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All results with three or more vertices are strictly convex.
//    No points are outside the resulting convex polygon.
/// $O(n \log n)$ Convex hull of a set of points, in counter-clockwise order.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points: sort by polar angle around the bottom-most
/// point, then reduce the sorted sequence with the monotone stack scan.
/// Returns an empty result iff the input set contains less than three
/// distinct, non-colinear points.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
///
/// # Examples
///
/// ```rust
/// # use hull2d::algorithms::convex_hull::graham_scan::convex_hull;
/// # use hull2d::data::Point;
/// let empty_set: Vec<Point<i32, 2>> = vec![];
/// assert!(convex_hull(&empty_set).is_empty());
///
/// let dups = vec![Point::new([0, 0])].repeat(3);
/// assert!(convex_hull(&dups).is_empty());
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(pts: &[Point<T, 2>]) -> Vec<Point<T, 2>>
where
  T: PolygonScalar,
{
  let pivot = match bottom_most_point(pts) {
    Some(pt) => pt,
    None => return Vec::new(),
  };
  // The pivot is extreme, so every other point lies in the half-plane above
  // it and the orientation predicate alone is a strict weak order on angles.
  // Exact angular ties are ordered nearer-first; the strict stack scan then
  // pops the interior points of every colinear run, including runs through
  // the first and last angular positions.
  let mut sorted: Vec<Point<T, 2>> = pts.iter().filter(|pt| **pt != pivot).cloned().collect();
  sorted.sort_unstable_by(|a, b| {
    match pivot.orientation(a, b) {
      Orientation::CounterClockWise => Ordering::Less,
      Orientation::ClockWise => Ordering::Greater,
      Orientation::CoLinear => pivot.cmp_distance_to(a, b),
    }
  });
  sorted.dedup();
  sorted.insert(0, pivot);

  let hull = convex_chain(sorted);
  if hull.len() < 3 {
    return Vec::new();
  }
  hull
}

// Bottom-most point: min y, ties by min x.
// O(n)
fn bottom_most_point<T>(pts: &[Point<T, 2>]) -> Option<Point<T, 2>>
where
  T: PolygonScalar,
{
  pts
    .iter()
    .min_by(|a, b| TotalOrd::total_cmp(&(a.y_coord(), a.x_coord()), &(b.y_coord(), b.x_coord())))
    .cloned()
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::data::{PointLocation, Polygon, PolygonConvex};
  use crate::testing::*;

  use claims::assert_ok;
  use ordered_float::NotNan;

  use proptest::collection::*;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn convex_hull_colinear() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 0]),
      Point::new([3, 0]),
      Point::new([4, 0]),
      Point::new([1, 1]),
    ];
    let hull = convex_hull(&points);
    assert_eq!(
      hull,
      vec![Point::new([0, 0]), Point::new([4, 0]), Point::new([1, 1])]
    );
  }

  #[test]
  fn convex_hull_colinear_rev() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([0, 9]),
      Point::new([0, 8]),
      Point::new([0, 7]),
      Point::new([0, 6]),
    ];
    let hull = convex_hull(&points);
    assert_eq!(
      hull,
      vec![Point::new([0, 0]), Point::new([1, 0]), Point::new([0, 9])]
    );
  }

  // The closing edge back to the pivot is a colinear run; its interior
  // points must not survive the scan.
  #[test]
  fn convex_hull_colinear_closing_run() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([10, 0]),
      Point::new([5, 5]),
      Point::new([10, 10]),
      Point::new([2, 2]),
    ];
    let hull = convex_hull(&points);
    assert_eq!(
      hull,
      vec![Point::new([0, 0]), Point::new([10, 0]), Point::new([10, 10])]
    );
  }

  #[test]
  fn convex_hull_dups() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 2]),
      Point::new([2, 2]),
      Point::new([5, 1]),
      Point::new([5, 1]),
    ];
    let hull = convex_hull(&points);
    assert_ok!(PolygonConvex::new(Polygon::new_unchecked(hull)));
  }

  #[test]
  fn convex_hull_insufficient() {
    let points = vec![Point::new([0, 0]), Point::new([2, 2])];
    assert!(convex_hull(&points).is_empty());
    let colinear = vec![Point::new([0, 0]), Point::new([5, 0]), Point::new([10, 0])];
    assert!(convex_hull(&colinear).is_empty());
  }

  #[proptest]
  fn convex_hull_prop_i8(#[strategy(vec(any::<Point<i8, 2>>(), 0..100))] pts: Vec<Point<i8, 2>>) {
    let hull = convex_hull(&pts);
    if !hull.is_empty() {
      // Prop #1: Results are valid, strictly convex polygons.
      let poly = PolygonConvex::new(Polygon::new_unchecked(hull.clone()));
      prop_assert!(poly.is_ok());
      // Prop #2: No points from the input set are outside the polygon.
      let poly = poly.unwrap();
      for pt in pts.iter() {
        prop_assert_ne!(poly.locate(pt), PointLocation::Outside)
      }
      // Prop #3: All vertices are in the input set.
      for pt in hull.iter() {
        prop_assert!(pts.contains(pt))
      }
    }
  }

  #[proptest]
  fn convex_hull_prop_nn(
    #[strategy(vec(any_nn::<2>(), 0..100))] pts: Vec<Point<NotNan<f64>, 2>>,
  ) {
    let hull = convex_hull(&pts);
    if !hull.is_empty() {
      let poly = PolygonConvex::new(Polygon::new_unchecked(hull.clone()));
      prop_assert!(poly.is_ok());
      let poly = poly.unwrap();
      for pt in pts.iter() {
        prop_assert_ne!(poly.locate(pt), PointLocation::Outside)
      }
    }
  }

  // Gift wrapping and the Graham scan agree on the vertex set.
  #[proptest]
  fn agrees_with_gift_wrapping(
    #[strategy(vec(any::<Point<i8, 2>>(), 0..60))] pts: Vec<Point<i8, 2>>,
  ) {
    let mut graham = convex_hull(&pts);
    let mut jarvis = super::super::gift_wrapping::convex_hull(&pts);
    graham.sort_unstable();
    jarvis.sort_unstable();
    prop_assert_eq!(graham, jarvis);
  }
}
