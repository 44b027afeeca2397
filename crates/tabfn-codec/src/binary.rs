//! Binary table format.
//!
//! Layout, as one contiguous stream: a 4-byte big-endian signed point
//! count `n >= 2`, then `n` repetitions of x and y as 8-byte big-endian
//! IEEE-754 doubles in ascending x order. Every field is network byte
//! order.
//!
//! Reading validates the count and the strictly increasing x order before
//! any table is handed back; a malformed or truncated stream fails with
//! [`CodecError`] and returns nothing.

use std::io::{self, Read, Write};

use tabfn_core::{Point, TabulatedFunction};
use tracing::debug;

use crate::error::CodecError;

/// Write `table`'s point sequence to `writer` in the binary layout.
///
/// # Errors
///
/// [`CodecError::Io`] on a stream failure; [`CodecError::InvalidCount`]
/// when the point count does not fit the 4-byte count field.
pub fn write<T, W>(table: &T, writer: &mut W) -> Result<(), CodecError>
where
    T: TabulatedFunction,
    W: Write,
{
    let points = table.to_points();
    let count = i32::try_from(points.len()).map_err(|_| CodecError::InvalidCount {
        count: i64::try_from(points.len()).unwrap_or(i64::MAX),
    })?;
    writer.write_all(&count.to_be_bytes())?;
    for point in &points {
        writer.write_all(&point.x.to_be_bytes())?;
        writer.write_all(&point.y.to_be_bytes())?;
    }
    debug!(count, "wrote binary table");
    Ok(())
}

/// Read a table from `reader` in the binary layout.
///
/// # Errors
///
/// [`CodecError::InvalidCount`] for a count below 2,
/// [`CodecError::Truncated`] when the stream ends early,
/// [`CodecError::Table`] when the points are not strictly increasing in x,
/// and [`CodecError::Io`] for any other stream failure.
pub fn read<T, R>(reader: &mut R) -> Result<T, CodecError>
where
    T: TabulatedFunction,
    R: Read,
{
    let mut header = [0u8; 4];
    reader
        .read_exact(&mut header)
        .map_err(|e| eof_as_truncation(e, 0, 0))?;
    let declared = i32::from_be_bytes(header);
    if declared < 2 {
        return Err(CodecError::InvalidCount {
            count: i64::from(declared),
        });
    }
    let count = usize::try_from(declared).map_err(|_| CodecError::InvalidCount {
        count: i64::from(declared),
    })?;

    // The declared count is not trusted for allocation; a lying header
    // fails at the first short read instead.
    let mut points = Vec::with_capacity(count.min(1024));
    for index in 0..count {
        let x = read_f64(reader).map_err(|e| eof_as_truncation(e, count, index))?;
        let y = read_f64(reader).map_err(|e| eof_as_truncation(e, count, index))?;
        points.push(Point::new(x, y));
    }
    debug!(count, "read binary table");
    Ok(T::from_points(points)?)
}

fn read_f64<R: Read>(reader: &mut R) -> io::Result<f64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(f64::from_be_bytes(buf))
}

fn eof_as_truncation(err: io::Error, expected: usize, read: usize) -> CodecError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        CodecError::Truncated { expected, read }
    } else {
        CodecError::Io(err)
    }
}
