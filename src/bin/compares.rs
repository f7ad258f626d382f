//! Reads tree sizes from stdin until a non-positive one, printing the comparisons and time taken
//! to build a tree of random values and a tree of sorted values for each.

use std::io;

use ordered_tree::driver::{self, DriverError};

fn main() -> Result<(), DriverError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    driver::run(stdin.lock(), stdout.lock(), &mut rand::thread_rng())
}
