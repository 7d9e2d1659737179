//! Console demo: the six-matrix chain from CLRS.
//!
//! Prints the full cost table as a tab-separated grid (row and column 0
//! are unused and stay zero), then the optimal parenthesization for the
//! whole chain, with no trailing newline.

use chain_order::solve_chain;

fn main() {
    // A1..A6 with dimensions 30x35, 35x15, 15x5, 5x10, 10x20, 20x25.
    let dims = [30, 35, 15, 5, 10, 20, 25];

    let order = solve_chain(&dims).expect("demo dimensions are valid");

    print!("{}", order.costs);
    print!("{}", order.expression);
}
