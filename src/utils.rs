use array_init::array_init;

///////////////////////////////////////////////////////////////////////////////
// Iterator permutations

// Cartesian product over N option slices; used for exhaustive
// extreme-coordinate sweeps in the predicate tests.
pub fn permutations<T, const N: usize>(source: [&[T]; N]) -> impl Iterator<Item = [T; N]> + '_
where
  T: Copy,
{
  let mut indices: [usize; N] = [0; N];
  let mut done = false;
  std::iter::from_fn(move || {
    if done {
      return None;
    }
    let out = array_init(|i| source[i][indices[i]]);
    indices[0] += 1;
    let mut i = 0;
    while !(indices[i] < source[i].len()) {
      indices[i] = 0;
      i += 1;
      if i == N {
        done = true;
        break;
      } else {
        indices[i] += 1;
      }
    }
    Some(out)
  })
}
