//! Text matching primitives for PayShield
//!
//! Normalization, tokenization and similarity metrics used to compare
//! payment parties against watchlist records. Everything here is pure:
//! no I/O, no configuration, no failure modes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod normalize;
pub mod similarity;

pub use normalize::{normalize, tokenize};
pub use similarity::{jaccard, jaro, jaro_winkler};
