//! Text table format.
//!
//! Layout: an integer point count on the first line, then one `x y` pair
//! per line in ascending x order. Values are rendered with Rust's
//! shortest-round-trip `f64` formatting, so reading a written table
//! reproduces every coordinate bit for bit; no precision is lost.
//!
//! The reader only cares about token order: any run of whitespace,
//! including newlines, separates tokens. Content after the final declared
//! pair is ignored.

use std::io::{Read, Write};

use tabfn_core::{Point, TabulatedFunction};
use tracing::debug;

use crate::error::CodecError;

/// Write `table`'s point sequence to `writer` as text.
///
/// # Errors
///
/// [`CodecError::Io`] on a stream failure.
pub fn write<T, W>(table: &T, writer: &mut W) -> Result<(), CodecError>
where
    T: TabulatedFunction,
    W: Write,
{
    let points = table.to_points();
    writeln!(writer, "{}", points.len())?;
    for point in &points {
        writeln!(writer, "{} {}", point.x, point.y)?;
    }
    debug!(count = points.len(), "wrote text table");
    Ok(())
}

/// Read a table from a text stream.
///
/// # Errors
///
/// [`CodecError::Parse`] for a non-numeric token,
/// [`CodecError::InvalidCount`] for a count below 2,
/// [`CodecError::MissingTokens`] when the stream runs out before the
/// declared count is met, [`CodecError::Table`] when the points are not
/// strictly increasing in x, and [`CodecError::Io`] for stream failures.
pub fn read<T, R>(reader: &mut R) -> Result<T, CodecError>
where
    T: TabulatedFunction,
    R: Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or(CodecError::MissingTokens {
        expected: 1,
        found: 0,
    })?;
    let declared: i64 = count_token.parse().map_err(|_| CodecError::Parse {
        token: count_token.to_owned(),
    })?;
    if declared < 2 {
        return Err(CodecError::InvalidCount { count: declared });
    }
    let count = usize::try_from(declared)
        .map_err(|_| CodecError::InvalidCount { count: declared })?;

    let expected_tokens = 1 + 2 * count;
    let mut found = 1;
    let mut points = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let x = next_number(&mut tokens, expected_tokens, &mut found)?;
        let y = next_number(&mut tokens, expected_tokens, &mut found)?;
        points.push(Point::new(x, y));
    }
    debug!(count, "read text table");
    Ok(T::from_points(points)?)
}

fn next_number<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: usize,
    found: &mut usize,
) -> Result<f64, CodecError> {
    let token = tokens.next().ok_or(CodecError::MissingTokens {
        expected,
        found: *found,
    })?;
    *found += 1;
    token.parse().map_err(|_| CodecError::Parse {
        token: token.to_owned(),
    })
}
