use array_init::{array_init, try_array_init};
use num_traits::*;
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::convert::TryFrom;
use std::iter::Sum;
use std::ops::Deref;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [T; N]) -> Point<NotNan<T>, N>
  where
    T: Float + ordered_float::FloatCore,
  {
    Point::new(array_init(|i| NotNan::new(array[i]).unwrap()))
  }

  /// Squared euclidean distance, computed in the result type `F`.
  pub fn squared_euclidean_distance<F>(&self, rhs: &Point<T, N>) -> F
  where
    T: Clone + Into<F>,
    F: Clone + NumOps<F, F> + Sum<F>,
  {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .map(|(a, b)| {
        let diff: F = a.clone().into() - b.clone().into();
        diff.clone() * diff
      })
      .sum()
  }

  /// Euclidean distance: `sqrt((x1-x2)^2 + (y1-y2)^2 + ...)`.
  pub fn euclidean_distance<F>(&self, rhs: &Point<T, N>) -> F
  where
    T: Clone + Into<F>,
    F: Float + Sum<F>,
  {
    self.squared_euclidean_distance::<F>(rhs).sqrt()
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<const N: usize> TryFrom<Point<f64, N>> for Point<NotNan<f64>, N> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64, N>) -> Result<Point<NotNan<f64>, N>, FloatIsNan> {
    Ok(Point {
      array: try_array_init(|i| NotNan::try_from(point.array[i]))?,
    })
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

// Methods on two-dimensional points.
impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }
  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;

  proptest! {
    #[test]
    fn squared_euclidean_distance_fuzz(pt1 in any_nn::<2>(), pt2 in any_nn::<2>()) {
      let _: f64 = pt1.squared_euclidean_distance(&pt2);
    }

    #[test]
    fn euclidean_distance_symmetric(pt1 in any_nn::<2>(), pt2 in any_nn::<2>()) {
      let d1: f64 = pt1.euclidean_distance(&pt2);
      let d2: f64 = pt2.euclidean_distance(&pt1);
      prop_assert_eq!(d1, d2);
    }

    #[test]
    fn euclidean_distance_non_negative(pt1 in any_nn::<2>(), pt2 in any_nn::<2>()) {
      let d: f64 = pt1.euclidean_distance(&pt2);
      prop_assert!(d >= 0.0);
    }
  }

  #[test]
  fn unit_distances() {
    assert_eq!(
      Point::new([0, 0]).euclidean_distance::<f64>(&Point::new([3, 4])),
      5.0
    );
    assert_eq!(
      Point::new([1.0, 1.0]).euclidean_distance::<f64>(&Point::new([1.0, 1.0])),
      0.0
    );
    assert_eq!(
      Point::new_nn([0.0, 0.0]).euclidean_distance::<f64>(&Point::new_nn([0.0, 2.0])),
      2.0
    );
  }
}
