//! Full-object table snapshot.
//!
//! The snapshot is the bincode encoding (standard configuration) of the
//! table's point sequence: a length prefix followed by the coordinate
//! pairs, self-describing enough to reconstruct an equivalent table with
//! either backend. Like the other codecs it carries only the ordered
//! points, so a snapshot taken from one backend restores into the other.

use std::io::{Read, Write};

use tabfn_core::{Point, TabulatedFunction};
use tracing::debug;

use crate::error::CodecError;

/// Write a snapshot of `table` to `writer`.
///
/// # Errors
///
/// [`CodecError::Encode`] when encoding fails, which subsumes any
/// underlying stream failure.
pub fn write<T, W>(table: &T, writer: &mut W) -> Result<(), CodecError>
where
    T: TabulatedFunction,
    W: Write,
{
    let points = table.to_points();
    let bytes =
        bincode::serde::encode_into_std_write(&points, writer, bincode::config::standard())?;
    debug!(count = points.len(), bytes, "wrote table snapshot");
    Ok(())
}

/// Restore a table from a snapshot.
///
/// # Errors
///
/// [`CodecError::Decode`] for a malformed or truncated snapshot;
/// [`CodecError::Table`] when the decoded points are not strictly
/// increasing in x.
pub fn read<T, R>(reader: &mut R) -> Result<T, CodecError>
where
    T: TabulatedFunction,
    R: Read,
{
    let points: Vec<Point> =
        bincode::serde::decode_from_std_read(reader, bincode::config::standard())?;
    debug!(count = points.len(), "read table snapshot");
    Ok(T::from_points(points)?)
}
