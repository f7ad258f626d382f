//! A small harness showing how insertion order affects an [`OrderedTree`]. For each requested size
//! it builds one tree from random values and one from already-sorted values, then reports how many
//! comparisons each took and how long.
//!
//! Only available with the `driver` feature, which also builds the `compares` binary.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::driver;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut output = Vec::new();
//! driver::run(&b"3 0"[..], &mut output, &mut StdRng::seed_from_u64(7)).unwrap();
//!
//! let output = String::from_utf8(output).unwrap();
//! let lines: Vec<_> = output.lines().collect();
//! assert_eq!(lines.len(), 2);
//! // 1, 2, 3 in order: 0 + 1 + 2 comparisons.
//! assert!(lines[1].starts_with("compares = 3 "));
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use rand::Rng;

use crate::OrderedTree;

/// Errors that can occur while running the harness.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Reading sizes or writing reports failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Returned when a token in the input isn't an integer.
    #[error("expected a tree size but found {0:?}")]
    InvalidSize(String),
}

/// What building one tree cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Comparisons made by every insert.
    pub comparisons: u64,
    /// Wall-clock time spent building the tree.
    pub elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "compares = {}   time= {}",
            self.comparisons,
            self.elapsed.as_secs_f64()
        )
    }
}

fn build(values: impl Iterator<Item = i32>) -> Report {
    let instant = Instant::now();
    let mut tree = OrderedTree::new();
    for value in values {
        tree.insert(value);
    }
    Report {
        comparisons: tree.comparisons(),
        elapsed: instant.elapsed(),
    }
}

/// Builds a tree from `size` uniformly random values.
pub fn build_random<R: Rng>(size: usize, rng: &mut R) -> Report {
    build((0..size).map(|_| rng.gen::<i32>()))
}

/// Builds a tree from `1..=size` inserted in ascending order, which makes every insert walk the
/// whole right spine. A size below 1 builds an empty tree.
pub fn build_sequential(size: i32) -> Report {
    build(1..=size)
}

/// Reads whitespace separated tree sizes from `input` and writes two reports per size to
/// `output`: random values first, then sorted values. Stops at the first size that isn't positive
/// or at the end of the input.
pub fn run<R, W, G>(input: R, mut output: W, rng: &mut G) -> Result<(), DriverError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let size: i64 = token
                .parse()
                .map_err(|_| DriverError::InvalidSize(token.to_string()))?;
            if size <= 0 {
                return Ok(());
            }
            // Sorted values run from 1 to `size`, so it has to fit in an `i32`.
            let size = i32::try_from(size)
                .map_err(|_| DriverError::InvalidSize(token.to_string()))?;
            let count = usize::try_from(size)
                .map_err(|_| DriverError::InvalidSize(token.to_string()))?;

            writeln!(output, "{}", build_random(count, rng))?;
            writeln!(output, "{}", build_sequential(size))?;
        }
    }

    Ok(())
}
