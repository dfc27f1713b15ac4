use num_traits::Float;
use std::iter::Sum;

use crate::data::{Point, Triangle, TriangleView};
use crate::Error;

// Doesn't mutate its input.
// Properties:
//    No panics.
//    The returned perimeter is minimal over all C(n,3) vertex triples.
//    Ties resolve to the first triple in ascending (i,j,k) index order.
/// $O(n^3)$ Minimum-perimeter triangle of a set of points.
///
/// Exhaustively checks every unordered triple of input points and keeps the
/// one with the smallest sum of pairwise euclidean distances. A candidate
/// replaces the current best only on strict improvement, so equal-perimeter
/// triples resolve to the first one encountered in ascending `(i, j, k)`
/// index order and the result is reproducible for any fixed input order.
///
/// Collinear and coincident points are legal input: a degenerate triple is a
/// valid candidate and its zero-length sides count as zero. Non-finite
/// coordinates are not validated; the result for such inputs is unspecified
/// but never a panic.
///
/// # Errors
/// Will return an error iff the input set contains less than three points.
///
/// # Properties
/// * All vertices of the returned triangle are from the input set.
/// * No triple of input points has a strictly smaller perimeter.
/// * The vertices are returned in ascending input index order.
///
/// # Examples
///
/// ```rust
/// # pub fn main() {
/// # use smallest_triangle::algorithms::min_perimeter_triangle;
/// # use smallest_triangle::data::Point;
/// # use smallest_triangle::Error;
/// let too_few = vec![Point::new([0.0, 0.0]), Point::new([1.0, 0.0])];
/// assert_eq!(
///   min_perimeter_triangle::<f64, f64>(&too_few).err(),
///   Some(Error::InsufficientPoints))
/// # }
/// ```
///
/// ```rust
/// # pub fn main() {
/// # use smallest_triangle::algorithms::min_perimeter_triangle;
/// # use smallest_triangle::data::Point;
/// let pts = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([0.0, 1.0]),
///   Point::new([10.0, 10.0]),
/// ];
/// let (triangle, perimeter): (_, f64) = min_perimeter_triangle(&pts).unwrap();
/// assert_eq!(triangle.vertices(), &[pts[0], pts[1], pts[2]]);
/// assert!((perimeter - (2.0 + 2f64.sqrt())).abs() < 1e-9);
/// # }
/// ```
pub fn min_perimeter_triangle<T, F>(pts: &[Point<T, 2>]) -> Result<(Triangle<T>, F), Error>
where
  T: Clone + Into<F>,
  F: Float + Sum<F>,
{
  let n = pts.len();
  if n < 3 {
    return Err(Error::InsufficientPoints);
  }

  let mut best = [0, 1, 2];
  let mut min_perimeter = F::infinity();

  for i in 0..n - 2 {
    for j in i + 1..n - 1 {
      for k in j + 1..n {
        let perimeter = TriangleView::new([&pts[i], &pts[j], &pts[k]]).perimeter();
        if perimeter < min_perimeter {
          min_perimeter = perimeter;
          best = [i, j, k];
        }
      }
    }
  }

  let [i, j, k] = best;
  let triangle = Triangle::new([pts[i].clone(), pts[j].clone(), pts[k].clone()]);
  Ok((triangle, min_perimeter))
}
