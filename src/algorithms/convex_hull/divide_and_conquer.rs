use super::chain::{convex_chain, monotone_chain};
use super::gift_wrapping;
use crate::data::Point;
use crate::{PolygonScalar, TotalOrd};

// https://en.wikipedia.org/wiki/Convex_hull_algorithms#Divide_and_conquer
//
// Preparata-Hong construction: sort once, split by count, gift-wrap the small
// partitions, merge sub-hulls by discovering their two common tangents.

// Partitions of at most this many points are gift-wrapped directly.
const BASE_SIZE: usize = 6;

// Properties:
//    No panics.
//    All results with three or more vertices are strictly convex.
//    No points are outside the resulting convex polygon.
//    Degenerate inputs come back as 0-, 1-, or 2-point results.
/// $O(n \log n)$ Convex hull of a set of points, in counter-clockwise order.
///
/// Divide-and-conquer construction: the points are sorted lexicographically
/// by `(x, y)` and deduplicated once, the sorted slice is split at its
/// midpoint, both halves are solved recursively, and the two sub-hulls are
/// merged by finding their upper and lower common tangents ("bridges").
///
/// Unlike the other strategies this reports degenerate inputs faithfully
/// instead of returning an empty result: a single point yields that point,
/// and two distinct points or a fully colinear input yield the two extreme
/// endpoints. The ring always starts at the lexicographically smallest
/// vertex.
///
/// # Examples
///
/// ```rust
/// # use hull2d::algorithms::convex_hull::divide_and_conquer::convex_hull;
/// # use hull2d::data::Point;
/// let colinear = vec![Point::new([0, 0]), Point::new([5, 0]), Point::new([10, 0])];
/// assert_eq!(
///   convex_hull(&colinear),
///   vec![Point::new([0, 0]), Point::new([10, 0])]);
/// ```
pub fn convex_hull<T>(pts: &[Point<T, 2>]) -> Vec<Point<T, 2>>
where
  T: PolygonScalar,
{
  let mut sorted: Vec<Point<T, 2>> = pts.to_vec();
  sorted.sort_unstable_by(|a, b| {
    TotalOrd::total_cmp(&(a.x_coord(), a.y_coord()), &(b.x_coord(), b.y_coord()))
  });
  sorted.dedup();
  if sorted.len() <= 2 {
    return sorted;
  }
  hull_sorted(&sorted)
}

// Recursive construction over a lexicographically sorted, deduplicated slice.
// The sort makes split-by-count a split-by-coordinate as well: the two
// sub-hulls are linearly separable, which the tangent walks below require.
fn hull_sorted<T>(pts: &[Point<T, 2>]) -> Vec<Point<T, 2>>
where
  T: PolygonScalar,
{
  if pts.len() <= BASE_SIZE {
    return gift_wrapping::march(pts);
  }
  let mid = pts.len() / 2;
  let left = hull_sorted(&pts[..mid]);
  let right = hull_sorted(&pts[mid..]);
  merge(left, right)
}

// Merge two counter-clockwise sub-hulls, `left` entirely left of `right`.
fn merge<T>(left: Vec<Point<T, 2>>, right: Vec<Point<T, 2>>) -> Vec<Point<T, 2>>
where
  T: PolygonScalar,
{
  // Tangent walks need a previous and next vertex to rotate through; a 1- or
  // 2-point sub-hull has neither, so rebuild from the union instead.
  if left.len() < 3 || right.len() < 3 {
    let mut union = left;
    union.extend(right);
    return monotone_chain(&union);
  }

  let l_start = rightmost_index(&left);
  let r_start = leftmost_index(&right);

  let (upper_l, upper_r) = upper_bridge(&left, &right, l_start, r_start);
  let (lower_l, lower_r) = lower_bridge(&left, &right, l_start, r_start);

  // Stitch: the outer arc of `left` from the upper bridge down to the lower
  // bridge, then the outer arc of `right` from the lower bridge back up to
  // the upper bridge. Both arcs run counter-clockwise, so the merged cycle
  // does too.
  let mut merged: Vec<Point<T, 2>> = Vec::with_capacity(left.len() + right.len());
  let mut i = upper_l;
  loop {
    merged.push(left[i].clone());
    if i == lower_l {
      break;
    }
    i = (i + 1) % left.len();
  }
  let mut i = lower_r;
  loop {
    merged.push(right[i].clone());
    if i == upper_r {
      break;
    }
    i = (i + 1) % right.len();
  }

  canonicalize(merged)
}

// Upper common tangent of two counter-clockwise hulls, starting from the
// rightmost vertex of `left` and the leftmost vertex of `right`.
//
// Alternate between the hulls until a full pass moves neither index: the
// left index advances counter-clockwise while its successor still lies above
// the candidate tangent, the right index retreats clockwise while its
// predecessor does. Colinear verdicts never advance a walk, so each index
// moves at most once around and the walk terminates.
fn upper_bridge<T>(
  left: &[Point<T, 2>],
  right: &[Point<T, 2>],
  l_start: usize,
  r_start: usize,
) -> (usize, usize)
where
  T: PolygonScalar,
{
  let (ln, rn) = (left.len(), right.len());
  let (mut l, mut r) = (l_start, r_start);
  loop {
    let mut moved = false;
    while right[r].orientation(&left[l], &left[(l + 1) % ln]).is_cw() {
      l = (l + 1) % ln;
      moved = true;
    }
    while left[l].orientation(&right[r], &right[(r + rn - 1) % rn]).is_ccw() {
      r = (r + rn - 1) % rn;
      moved = true;
    }
    if !moved {
      return (l, r);
    }
  }
}

// Lower common tangent; mirror image of [upper_bridge]. The left index
// retreats clockwise, the right index advances counter-clockwise.
fn lower_bridge<T>(
  left: &[Point<T, 2>],
  right: &[Point<T, 2>],
  l_start: usize,
  r_start: usize,
) -> (usize, usize)
where
  T: PolygonScalar,
{
  let (ln, rn) = (left.len(), right.len());
  let (mut l, mut r) = (l_start, r_start);
  loop {
    let mut moved = false;
    while right[r].orientation(&left[l], &left[(l + ln - 1) % ln]).is_ccw() {
      l = (l + ln - 1) % ln;
      moved = true;
    }
    while left[l].orientation(&right[r], &right[(r + 1) % rn]).is_cw() {
      r = (r + 1) % rn;
      moved = true;
    }
    if !moved {
      return (l, r);
    }
  }
}

// Rotate the merged cycle to its lexicographically smallest vertex and scan
// it once. The strict tangent walks stop early when a hull edge is exactly
// colinear with the true tangent, which can leave on-edge vertices in the
// stitched cycle; the scan removes them. The lexicographic minimum of a
// positive-area ring is a strict corner, so it survives as the anchor and
// the output canonically starts there.
fn canonicalize<T>(mut ring: Vec<Point<T, 2>>) -> Vec<Point<T, 2>>
where
  T: PolygonScalar,
{
  let min_idx = leftmost_index(&ring);
  ring.rotate_left(min_idx);
  // Sentinel copy of the anchor so the scan also judges the closing edge.
  ring.push(ring[0].clone());
  let mut hull = convex_chain(ring);
  hull.pop();
  hull
}

// Index of the lexicographically smallest vertex: min x, ties by min y.
// O(n)
fn leftmost_index<T>(pts: &[Point<T, 2>]) -> usize
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
    .unwrap_or(0)
}

// Index of the lexicographically greatest vertex: max x, ties by max y.
// O(n)
fn rightmost_index<T>(pts: &[Point<T, 2>]) -> usize
where
  T: PolygonScalar,
{
  pts
    .iter()
    .enumerate()
    .max_by(|(_, a), (_, b)| {
      TotalOrd::total_cmp(&(a.x_coord(), a.y_coord()), &(b.x_coord(), b.y_coord()))
    })
    .map(|(index, _)| index)
    .unwrap_or(0)
}
