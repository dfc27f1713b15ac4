use num_traits::*;
use std::iter::Sum;

use super::Point;

/// An ordered triple of vertices.
///
/// No orientation or non-degeneracy invariant is imposed: collinear and even
/// coincident vertex triples are representable. Degenerate triangles still
/// have a well-defined perimeter; their signed area is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle<T>([Point<T, 2>; 3]);

impl<T> Triangle<T> {
  pub fn new(pts: [Point<T, 2>; 3]) -> Triangle<T> {
    Triangle(pts)
  }

  pub fn vertices(&self) -> &[Point<T, 2>; 3] {
    &self.0
  }

  pub fn view(&'_ self) -> TriangleView<'_, T> {
    TriangleView([&self.0[0], &self.0[1], &self.0[2]])
  }

  /// Sum of the three pairwise euclidean distances between the vertices.
  pub fn perimeter<F>(&self) -> F
  where
    T: Clone + Into<F>,
    F: Float + Sum<F>,
  {
    self.view().perimeter()
  }

  pub fn signed_area<F>(&self) -> F
  where
    T: Clone + Into<F>,
    F: NumOps<F, F> + FromPrimitive + Clone,
  {
    self.view().signed_area()
  }
}

#[derive(Debug, Clone, Copy)]
pub struct TriangleView<'a, T>([&'a Point<T, 2>; 3]);

impl<'a, T> TriangleView<'a, T> {
  // O(1)
  pub fn new(pts: [&'a Point<T, 2>; 3]) -> TriangleView<'a, T> {
    TriangleView(pts)
  }

  /// Sum of the three pairwise euclidean distances between the vertices.
  ///
  /// Always non-negative. A zero-length side between coincident vertices
  /// contributes zero.
  pub fn perimeter<F>(&self) -> F
  where
    T: Clone + Into<F>,
    F: Float + Sum<F>,
  {
    let [a, b, c] = self.0;
    a.euclidean_distance::<F>(b) + b.euclidean_distance::<F>(c) + c.euclidean_distance::<F>(a)
  }

  pub fn signed_area<F>(&self) -> F
  where
    T: Clone + Into<F>,
    F: NumOps<F, F> + FromPrimitive + Clone,
  {
    self.signed_area_2x::<F>() / F::from_usize(2).unwrap()
  }

  pub fn signed_area_2x<F>(&self) -> F
  where
    T: Clone + Into<F>,
    F: NumOps<F, F> + Clone,
  {
    let [a, b, c] = self.0;
    let ax: F = a.x_coord().clone().into();
    let ay: F = a.y_coord().clone().into();
    let bx: F = b.x_coord().clone().into();
    let by: F = b.y_coord().clone().into();
    let cx: F = c.x_coord().clone().into();
    let cy: F = c.y_coord().clone().into();
    ax.clone() * by.clone() - bx.clone() * ay.clone() + bx * cy.clone() - cx.clone() * by + cx * ay
      - ax * cy
    // x1*y2 - x2*y1 +
    // x2*y3 - x3*y2 +
    // x3*y1 - x1*y3
  }
}
