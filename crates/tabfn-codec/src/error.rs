//! Error types for table encoding and decoding.

use tabfn_core::TableError;

/// Errors returned by the table codecs.
///
/// A failed read never returns a partial table, and I/O failures propagate
/// unchanged without internal retries.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Underlying stream or device failure.
    #[error("i/o failure while transferring a table")]
    Io(#[from] std::io::Error),

    /// The stream ended before the declared point count was read.
    #[error("stream ended after {read} of {expected} declared points")]
    Truncated {
        /// Point count the stream declared.
        expected: usize,
        /// Points fully read before the stream ended.
        read: usize,
    },

    /// The declared point count cannot describe a table.
    #[error("declared point count {count} is not a valid table size (need at least 2)")]
    InvalidCount {
        /// The offending count.
        count: i64,
    },

    /// A token in a text stream is not a number.
    #[error("token {token:?} is not a number")]
    Parse {
        /// The offending token.
        token: String,
    },

    /// A text stream ran out of tokens before the declared count was met.
    #[error("expected {expected} whitespace-separated values, found {found}")]
    MissingTokens {
        /// Tokens the declared count requires.
        expected: usize,
        /// Tokens actually present.
        found: usize,
    },

    /// Snapshot encoding failed.
    #[error("snapshot encoding failed")]
    Encode(#[from] bincode::error::EncodeError),

    /// Snapshot decoding failed.
    #[error("snapshot decoding failed")]
    Decode(#[from] bincode::error::DecodeError),

    /// The decoded point sequence does not form a valid table.
    #[error("decoded points do not form a valid table")]
    Table(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_display_names_both_counts() {
        let err = CodecError::Truncated {
            expected: 10,
            read: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("3"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_table_error_keeps_its_source() {
        let err = CodecError::from(TableError::MinimumSize);
        assert!(matches!(err, CodecError::Table(TableError::MinimumSize)));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = CodecError::from(io);
        assert!(matches!(err, CodecError::Io(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = CodecError::InvalidCount { count: -1 };
        let _: &dyn std::error::Error = &err;
    }
}
