use crate::data::Point;
use crate::{PolygonScalar, TotalOrd};

// https://en.wikipedia.org/wiki/Graham_scan#Pseudocode (the stack phase)
//
// Shared by the Graham scan (applied to an angularly sorted sequence), by
// Andrew's monotone chain below, and by the divide-and-conquer merge when it
// re-canonicalizes a stitched cycle.

/// $O(n)$ Reduce an ordered point sequence to a convex chain.
///
/// Keeps exactly the points forming strictly counter-clockwise turns: while
/// the last two kept points and the candidate do not turn strictly left, the
/// last kept point is dropped. The input must already be ordered along a
/// monotone chain or by angle around a pivot; the scan itself never reorders.
///
/// Inputs with fewer than two points are returned unchanged.
pub fn convex_chain<T>(pts: Vec<Point<T, 2>>) -> Vec<Point<T, 2>>
where
  T: PolygonScalar,
{
  if pts.len() < 2 {
    return pts;
  }
  let mut stack: Vec<Point<T, 2>> = Vec::with_capacity(pts.len());
  for pt in pts {
    while stack.len() >= 2 && !stack[stack.len() - 2].orientation(&stack[stack.len() - 1], &pt).is_ccw() {
      stack.pop();
    }
    stack.push(pt);
  }
  stack
}

/// $O(n \log n)$ Convex hull by Andrew's monotone chain construction.
///
/// Sorts lexicographically by `(x, y)`, deduplicates, then builds the lower
/// chain from the forward pass and the upper chain from the reversed pass.
/// Unlike the gift-wrapping and Graham entry points this function reports
/// degenerate inputs faithfully: up to two distinct points (including a fully
/// colinear input, which collapses to its extreme endpoints) come back as a
/// 0-, 1-, or 2-point result.
pub fn monotone_chain<T>(pts: &[Point<T, 2>]) -> Vec<Point<T, 2>>
where
  T: PolygonScalar,
{
  let mut sorted: Vec<Point<T, 2>> = pts.to_vec();
  sorted.sort_unstable_by(|a, b| {
    TotalOrd::total_cmp(&(a.x_coord(), a.y_coord()), &(b.x_coord(), b.y_coord()))
  });
  sorted.dedup();
  if sorted.len() < 3 {
    return sorted;
  }
  let mut reversed = sorted.clone();
  reversed.reverse();

  let mut lower = convex_chain(sorted);
  let mut upper = convex_chain(reversed);
  // The chains share their endpoints; drop each chain's final point before
  // concatenating into a single counter-clockwise ring.
  lower.pop();
  upper.pop();
  lower.append(&mut upper);
  lower
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use proptest::collection::vec;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn chain_short_inputs_unchanged() {
    let empty: Vec<Point<i64, 2>> = vec![];
    assert_eq!(convex_chain(empty), vec![]);
    let single = vec![Point::new([3i64, 4])];
    assert_eq!(convex_chain(single.clone()), single);
    let pair = vec![Point::new([3i64, 4]), Point::new([5, 6])];
    assert_eq!(convex_chain(pair.clone()), pair);
  }

  #[test]
  fn chain_drops_right_turn() {
    let pts = vec![
      Point::new([0i64, 0]),
      Point::new([5, 1]),
      Point::new([10, 0]),
    ];
    assert_eq!(
      convex_chain(pts),
      vec![Point::new([0, 0]), Point::new([10, 0])]
    );
  }

  #[test]
  fn chain_drops_colinear_midpoints() {
    let pts = vec![
      Point::new([0i64, 0]),
      Point::new([5, 0]),
      Point::new([10, 0]),
    ];
    assert_eq!(
      convex_chain(pts),
      vec![Point::new([0, 0]), Point::new([10, 0])]
    );
  }

  #[test]
  fn chain_keeps_left_turns() {
    let pts = vec![
      Point::new([0i64, 0]),
      Point::new([10, 0]),
      Point::new([10, 10]),
      Point::new([0, 10]),
    ];
    assert_eq!(convex_chain(pts.clone()), pts);
  }

  #[test]
  fn monotone_chain_square() {
    let pts = vec![
      Point::new([10i64, 10]),
      Point::new([0, 10]),
      Point::new([5, 5]),
      Point::new([10, 0]),
      Point::new([0, 0]),
    ];
    assert_eq!(
      monotone_chain(&pts),
      vec![
        Point::new([0, 0]),
        Point::new([10, 0]),
        Point::new([10, 10]),
        Point::new([0, 10]),
      ]
    );
  }

  #[test]
  fn monotone_chain_colinear_endpoints() {
    let pts = vec![
      Point::new([5i64, 0]),
      Point::new([0, 0]),
      Point::new([10, 0]),
      Point::new([5, 0]),
    ];
    assert_eq!(
      monotone_chain(&pts),
      vec![Point::new([0, 0]), Point::new([10, 0])]
    );
  }

  #[test]
  fn monotone_chain_degenerate() {
    let empty: Vec<Point<i64, 2>> = vec![];
    assert_eq!(monotone_chain(&empty), vec![]);
    let dups = vec![Point::new([2i64, 2]); 4];
    assert_eq!(monotone_chain(&dups), vec![Point::new([2, 2])]);
  }

  // The ring starts at the lexicographic minimum and turns strictly left at
  // every vertex.
  #[proptest]
  fn monotone_chain_prop(#[strategy(vec(any::<Point<i8, 2>>(), 0..50))] pts: Vec<Point<i8, 2>>) {
    let hull = monotone_chain(&pts);
    if hull.len() >= 3 {
      let n = hull.len();
      for i in 0..n {
        prop_assert!(hull[i]
          .orientation(&hull[(i + 1) % n], &hull[(i + 2) % n])
          .is_ccw());
      }
    }
  }
}
