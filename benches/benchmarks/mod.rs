pub mod editor;
pub mod shapes;

use std::f64::consts::TAU;

use polyedit::cartesian::Ring;
use rand::Rng;

/// Returns a random star-shaped ring of the given amount of vertices around the given center.
pub fn random_ring(center: [f64; 2], vertices: usize) -> Ring {
    let mut rng = rand::rng();
    let [x, y] = center;

    (0..vertices)
        .map(|index| {
            let angle = TAU * index as f64 / vertices as f64;
            let radius = rng.random_range(5.0..10.0);
            [x + radius * angle.cos(), y + radius * angle.sin()]
        })
        .collect::<Vec<_>>()
        .into()
}
