//! Binvis - view binary files as Hilbert-curve images and write image edits back
//!
//! This library provides functionality to:
//! - Lay out a byte region along a Hilbert curve so nearby bytes stay nearby
//! - Color each byte with a categorical or gradient scheme
//! - Reconstruct a binary from an edited image, touching only edited bytes
//!
//! ```
//! use binvis::curve::{Layout, SizePolicy};
//! use binvis::decode::{decode, DecodeOptions};
//! use binvis::encode::encode;
//! use binvis::region::Region;
//! use binvis::schemes::SchemeName;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let data = b"hello, hilbert".to_vec();
//! let layout = Layout::with_policy(SizePolicy::Fit, Region::full(data.len()).unwrap());
//! let scheme = SchemeName::Categorical.build();
//!
//! let grid = encode(&data, &layout, &scheme).unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//! let (rebuilt, report) =
//!     decode(&grid, &data, &layout, &scheme, DecodeOptions::default(), &mut rng).unwrap();
//! assert_eq!(rebuilt, data);
//! assert!(report.is_unchanged());
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod curve;
pub mod decode;
pub mod encode;
pub mod error;
pub mod output;
pub mod region;
pub mod schemes;
pub mod synth;

pub use error::{BinvisError, Result};
