//! Console demo: ordered compositions of 4 from parts {1, 2, 3}.

use chain_order::compositions::composition_counts;

fn main() {
    let counts = composition_counts(4, &[1, 2, 3]).expect("demo parts are valid");

    for c in counts {
        print!("{c}, ");
    }
}
