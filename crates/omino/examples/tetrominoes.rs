//! Print the five free tetrominoes as text grids.
//!
//! Quick visual check that rotation + mirror dedup collapses the chiral
//! pairs (S/Z, L/J) while keeping I, O, and T distinct.

use omino::pattern::generate;

fn main() {
    let shapes = generate(4).expect("small enumeration succeeds");
    println!("{} free tetrominoes", shapes.len());
    for shape in &shapes {
        println!();
        print!("{}", shape.grid_string().expect("non-empty shape"));
    }
}
