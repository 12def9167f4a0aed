//! # BWTS - Bijective Burrows-Wheeler Transform
//!
//! A Rust implementation of the bijective (sentinel-free) Burrows-Wheeler
//! transform.
//!
//! The transform permutes a byte sequence so that bytes sharing a context end
//! up next to each other, which helps a later entropy coder. Unlike the
//! classic BWT it needs neither a sentinel byte nor a primary index:
//! 1. **Bijective**: every byte sequence of length n is the encoding of exactly
//!    one byte sequence of length n
//! 2. **Length preserving**: the output is a permutation of the input bytes
//!
//! ## Example
//!
//! ```
//! use bwts_rs::{decode, encode};
//!
//! let encoded = encode(b"BANANA");
//! assert_eq!(encoded, b"ANNBAA");
//!
//! // Reconstructs the original sequence
//! assert_eq!(decode(&encoded), b"BANANA");
//! ```
//!
//! ## Performance
//!
//! - Lyndon factorization and decoding are O(n)
//! - Rotations are offset views, never copied
//! - Sorting compares rotations in O(lcm) of their lengths, so encoding is
//!   O(n² log n) in the worst case

mod cyclic;
mod decode;
mod encode;
mod lyndon;
mod rotation;
mod stats;


pub use cyclic::{cyclic_cmp, Cyclic};
pub use decode::decode;
pub use encode::encode;
pub use lyndon::{is_lyndon_word, lyndon_breaks, lyndon_factors, LyndonFactors};
pub use rotation::{rotations, rotations_of_all, Rotation, Rotations};
pub use stats::{encode_with_stats, TransformStats};
