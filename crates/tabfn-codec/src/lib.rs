//! Lossless external encodings of tabulated functions.
//!
//! Three formats over one semantic model: every encoder is a pure function
//! of a table's ordered point sequence ([`to_points`]), and every decoder
//! parses into that sequence and reconstructs through [`from_points`], so
//! the strict-ordering check lives in the core and is never duplicated
//! here. A failed read returns no partial table.
//!
//! - [`binary`]: big-endian count and coordinate pairs, the compact form.
//! - [`text`]: whitespace-delimited, human-readable, still bit-exact.
//! - [`snapshot`]: the full-object persisted form (bincode).
//!
//! All readers are generic over the backend:
//!
//! ```
//! use std::io::Cursor;
//! use tabfn_core::{ArrayTabulated, LinkedTabulated, Point, TabulatedFunction};
//! use tabfn_codec::binary;
//!
//! let table = ArrayTabulated::from_points(vec![
//!     Point::new(0.0, 1.0),
//!     Point::new(2.0, 3.0),
//! ])?;
//!
//! let mut buffer = Vec::new();
//! binary::write(&table, &mut buffer)?;
//! let restored: LinkedTabulated = binary::read(&mut Cursor::new(buffer))?;
//! assert_eq!(restored.to_points(), table.to_points());
//! # Ok::<(), tabfn_codec::CodecError>(())
//! ```
//!
//! [`to_points`]: tabfn_core::TabulatedFunction::to_points
//! [`from_points`]: tabfn_core::TabulatedFunction::from_points

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod binary;
pub mod error;
pub mod snapshot;
pub mod text;

pub use error::CodecError;
