//! Contains the Error and Result type used by the reader, writer and the tree
//! containers.
use std::fmt::Display;
use std::io;

use crate::Tag;

/// Various errors that can occur while building, reading or writing NBT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed or truncated input while decoding. A document that fails
    /// with this kind has been rejected entirely.
    Input,

    /// A tag was used as a type it is not. Raised by the checked accessors,
    /// by [`Value::assign`][crate::Value::assign], by list insertion, and when
    /// trying to encode a `Null` slot. The target is never modified.
    Cast,

    /// Checked index or key access failed.
    OutOfRange,

    /// An array, list or string is too long for its length field on the wire,
    /// or a tree nests deeper than the writer allows.
    Length,

    /// The DEFLATE/GZIP layer failed, e.g. a corrupt compressed stream.
    Compression,

    /// The underlying sink failed while writing.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorKind::Input => "input error",
            ErrorKind::Cast => "cast error",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::Length => "length error",
            ErrorKind::Compression => "compression error",
            ErrorKind::Io => "io error",
        })
    }
}

/// Marks an I/O error as coming from a compression adapter, so it keeps its
/// own kind after passing through the reader or writer.
#[derive(Debug)]
pub(crate) struct CompressionFault(pub(crate) io::Error);

impl Display for CompressionFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for CompressionFault {}

fn is_compression_fault(e: &io::Error) -> bool {
    e.get_ref()
        .map_or(false, |inner| inner.is::<CompressionFault>())
}

/// Write side conversion. Read side failures go through [`Error::read_io`]
/// instead, since any failed read is an input error.
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        if is_compression_fault(&e) {
            return Error::new(ErrorKind::Compression, format!("compression: {}", e));
        }
        Error::new(ErrorKind::Io, format!("io error: {}", e))
    }
}

impl Error {
    fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind,
        }
    }

    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_input(&self) -> bool {
        self.kind == ErrorKind::Input
    }

    pub fn is_cast(&self) -> bool {
        self.kind == ErrorKind::Cast
    }

    pub(crate) fn read_io(e: io::Error) -> Error {
        if is_compression_fault(&e) {
            return Error::new(ErrorKind::Compression, format!("compression: {}", e));
        }
        match e.kind() {
            io::ErrorKind::UnexpectedEof => Error::unexpected_eof(),
            _ => Error::new(ErrorKind::Input, format!("io error: {}", e)),
        }
    }

    pub(crate) fn unexpected_eof() -> Error {
        Error::new(ErrorKind::Input, "eof: unexpectedly ran out of input")
    }

    /// Like [`Error::read_io`], but running out of input is reported as a
    /// missing tag type.
    pub(crate) fn read_type_io(e: io::Error) -> Error {
        if e.kind() == io::ErrorKind::UnexpectedEof && !is_compression_fault(&e) {
            return Error::new(ErrorKind::Input, "error reading tag type: eof");
        }
        Error::read_io(e)
    }

    pub(crate) fn invalid_tag(tag: u8) -> Error {
        Error::new(ErrorKind::Input, format!("invalid tag type: {}", tag))
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Error {
        Error::new(
            ErrorKind::Input,
            format!(
                "invalid string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
        )
    }

    pub(crate) fn negative_len(tag: Tag, len: i32) -> Error {
        Error::new(
            ErrorKind::Input,
            format!("negative length {} for {}", len, tag),
        )
    }

    pub(crate) fn seq_too_long(tag: Tag, len: usize, max: usize) -> Error {
        Error::new(
            ErrorKind::Input,
            format!("{} of length {} exceeds max_seq_len of {}", tag, len, max),
        )
    }

    pub(crate) fn too_deep(max: usize) -> Error {
        Error::new(
            ErrorKind::Input,
            format!("nesting exceeds max_depth of {}", max),
        )
    }

    pub(crate) fn too_deep_to_write(max: usize) -> Error {
        Error::new(
            ErrorKind::Length,
            format!("tree nesting exceeds max_depth of {}", max),
        )
    }

    pub(crate) fn end_list_not_empty(len: i32) -> Error {
        Error::new(
            ErrorKind::Input,
            format!("list of end tags must be empty, found length {}", len),
        )
    }

    pub(crate) fn no_payload(tag: Tag) -> Error {
        Error::new(ErrorKind::Input, format!("{} tag has no payload", tag))
    }

    pub(crate) fn failed_state() -> Error {
        Error::new(
            ErrorKind::Input,
            "reader is in a failed state from an earlier error",
        )
    }

    pub(crate) fn bad_cast(from: Tag, to: Tag) -> Error {
        Error::new(
            ErrorKind::Cast,
            format!("attempted to use a {} tag as {}", from, to),
        )
    }

    pub(crate) fn bad_insert(given: Tag, list: Tag) -> Error {
        Error::new(
            ErrorKind::Cast,
            format!(
                "attempted to insert a {} tag into a list of {}",
                given, list
            ),
        )
    }

    pub(crate) fn null_value() -> Error {
        Error::new(ErrorKind::Cast, "null value has no tag type")
    }

    pub(crate) fn key_not_found(key: &str) -> Error {
        Error::new(
            ErrorKind::OutOfRange,
            format!("key \"{}\" not found in compound", key),
        )
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Error {
        Error::new(
            ErrorKind::OutOfRange,
            format!("index {} is out of range, the length is {}", index, len),
        )
    }

    pub(crate) fn len_too_large(what: &str, len: usize) -> Error {
        Error::new(
            ErrorKind::Length,
            format!("{} of length {} does not fit its length field", what, len),
        )
    }
}
