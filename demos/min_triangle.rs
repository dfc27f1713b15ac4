// Reads whitespace-separated `x y` coordinate pairs from stdin and prints
// the minimum-perimeter triangle. A trailing unpaired number is ignored.
//
//     printf '0 0  1 0  0 1  10 10' | cargo run --example min_triangle
use smallest_triangle::algorithms::min_perimeter_triangle;
use smallest_triangle::data::Point;

use std::io::Read;

fn main() {
  let mut input = String::new();
  if let Err(err) = std::io::stdin().read_to_string(&mut input) {
    eprintln!("stdin: {}", err);
    std::process::exit(1);
  }

  let coords: Vec<f64> = input
    .split_whitespace()
    .filter_map(|word| word.parse().ok())
    .collect();
  let points: Vec<Point<f64, 2>> = coords
    .chunks_exact(2)
    .map(|pair| Point::from((pair[0], pair[1])))
    .collect();

  match min_perimeter_triangle::<f64, f64>(&points) {
    Ok((triangle, perimeter)) => {
      for vertex in triangle.vertices() {
        println!("({}, {})", vertex.x_coord(), vertex.y_coord());
      }
      println!("perimeter: {}", perimeter);
    }
    Err(err) => {
      eprintln!("{}", err);
      std::process::exit(1);
    }
  }
}
