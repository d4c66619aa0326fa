use crate::data::Point;
use crate::PolygonScalar;

pub mod chain;
pub mod divide_and_conquer;
pub mod gift_wrapping;
pub mod graham_scan;

/// Hull construction strategy. All strategies compute the same vertex set;
/// they differ in time complexity and in how degenerate inputs are reported
/// (see [build_hull]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
  /// Jarvis march, $O(n h)$.
  GiftWrap,
  /// Graham scan, $O(n \log n)$.
  AngularSort,
  /// Preparata-Hong divide and conquer, $O(n \log n)$.
  DivideAndConquer,
}

/// Convex hull of a set of points, in counter-clockwise order.
///
/// The result is empty iff the input contains fewer than three distinct,
/// non-colinear points. [Strategy::DivideAndConquer] reports such inputs
/// with more precision: a single point yields that point, two distinct
/// points (or a fully colinear input) yield the two extreme endpoints.
///
/// # Examples
///
/// ```rust
/// # use hull2d::algorithms::{build_hull, Strategy};
/// # use hull2d::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([10, 0]),
///   Point::new([10, 10]),
///   Point::new([0, 10]),
///   Point::new([5, 5]),
/// ];
/// let hull = build_hull(&pts, Strategy::DivideAndConquer);
/// assert_eq!(hull.len(), 4);
/// assert!(!hull.contains(&Point::new([5, 5])));
/// ```
pub fn build_hull<T>(pts: &[Point<T, 2>], strategy: Strategy) -> Vec<Point<T, 2>>
where
  T: PolygonScalar,
{
  match strategy {
    Strategy::GiftWrap => gift_wrapping::convex_hull(pts),
    Strategy::AngularSort => graham_scan::convex_hull(pts),
    Strategy::DivideAndConquer => divide_and_conquer::convex_hull(pts),
  }
}
