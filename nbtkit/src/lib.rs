//! nbtkit is a library for the Named Binary Tag (NBT) format, the compact
//! tree-structured binary format used by *Minecraft* to store world data,
//! player files and more.
//!
//! * For the in-memory tree see [`Value`], [`Compound`] and [`List`].
//! * For NBT array types see [`ByteArray`] and [`IntArray`].
//! * For reading and writing the binary format see [`reader`] and [`writer`],
//!   or the shortcuts [`from_bytes`] and [`to_bytes`].
//! * For GZIP, zlib and raw DEFLATE wrapped data see [`compress`].
//!
//! # Quick example
//!
//! Build a document, encode it and decode it back:
//!
//! ```
//! use nbtkit::{Compound, List, Value};
//!
//! # fn main() -> nbtkit::error::Result<()> {
//! let mut root = Compound::new();
//! root.put("a", 1);
//! root.put("list", List::of::<i16>([2, 3]));
//!
//! let bytes = nbtkit::to_bytes("root", &Value::Compound(root.clone()))?;
//! let (key, value) = nbtkit::from_bytes(&bytes)?;
//!
//! assert_eq!(key, "root");
//! assert_eq!(value.as_compound()?, &root);
//! assert_eq!(value.as_compound()?.at("list")?.as_list()?[1], Value::Short(3));
//! # Ok(())
//! # }
//! ```
//!
//! # Type pinning
//!
//! Slots inside lists and compounds keep the tag type they were created with.
//! [`Value::assign`] only accepts a value of the exact same variant, and
//! [`Value::set`] only accepts primitives that widen into the slot's type. A
//! list fixes its element type on its first element and rejects any other
//! type afterwards.
//!
//! # Borrowing
//!
//! References handed out by [`Compound::at`], [`List::at`] and friends borrow
//! the container, so the borrow checker rejects any structural mutation of
//! that container while a reference is alive. Independent trees share no
//! state and can be used from different threads freely.

use std::convert::TryFrom;
use std::fmt::Display;

#[macro_use]
mod macros;

pub mod endian;
pub mod error;
pub mod reader;
pub mod writer;

#[cfg(feature = "compression")]
pub mod compress;

mod arrays;
mod compound;
mod list;
mod value;

pub use arrays::*;
pub use compound::Compound;
pub use endian::Endian;
pub use list::List;
pub use reader::{from_bytes, from_reader, from_reader_with_opts, Reader};
pub use value::*;
pub use writer::{to_bytes, to_writer, to_writer_with_opts, Writer};

#[doc(hidden)]
pub use macros::list_literal as __list_literal;

#[cfg(test)]
mod test;

/// An NBT tag type. This does not carry the value or the name of the data.
///
/// [`Tag::Null`] is not a wire type. It marks a slot that has no value yet,
/// such as a list that never received an element.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
pub enum Tag {
    /// Uninitialised slot. Never appears on the wire.
    Null,
    /// Represents the end of a Compound object.
    End,
    /// Equivalent to i8.
    Byte,
    /// Equivalent to i16.
    Short,
    /// Equivalent to i32.
    Int,
    /// Equivalent to i64.
    Long,
    /// Equivalent to f32.
    Float,
    /// Equivalent to f64.
    Double,
    /// Represents as array of Byte (i8).
    ByteArray,
    /// Represents a UTF-8 string.
    String,
    /// Represents a list of other objects, all of the same type.
    List,
    /// Represents a struct-like structure.
    Compound,
    /// Represents as array of Int (i32).
    IntArray,
}

impl Tag {
    /// The byte used for this tag on the wire, or `None` for [`Tag::Null`].
    pub fn id(self) -> Option<u8> {
        Some(match self {
            Tag::Null => return None,
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
        })
    }
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The tags will very rarely change.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12..=u8::MAX => return Err(()),
        })
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Tag::Null => "null",
            Tag::End => "end",
            Tag::Byte => "byte",
            Tag::Short => "short",
            Tag::Int => "int",
            Tag::Long => "long",
            Tag::Float => "float",
            Tag::Double => "double",
            Tag::ByteArray => "byte_array",
            Tag::String => "string",
            Tag::List => "list",
            Tag::Compound => "compound",
            Tag::IntArray => "int_array",
        })
    }
}

/// Options for reading NBT.
///
/// ```
/// use nbtkit::{Endian, ReadOpts};
///
/// let opts = ReadOpts::new().endian(Endian::Little).max_seq_len(1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOpts {
    pub(crate) endian: Endian,
    pub(crate) max_seq_len: usize,
    pub(crate) max_depth: usize,
}

impl ReadOpts {
    pub fn new() -> Self {
        Default::default()
    }

    /// Byte order of every multi-byte number, including length prefixes.
    pub fn endian(mut self, value: Endian) -> Self {
        self.endian = value;
        self
    }

    /// Maximum element count accepted for arrays and lists. Larger counts
    /// are rejected before anything is allocated. The default accepts every
    /// count the wire format can express.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    /// Maximum nesting of lists and compounds. Matches
    /// [`WriteOpts::max_depth`] by default, so anything the default writer
    /// produces reads back with the default reader.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }
}

impl Default for ReadOpts {
    fn default() -> Self {
        Self {
            endian: Endian::Big,
            max_seq_len: MAX_WIRE_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Options for writing NBT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOpts {
    pub(crate) endian: Endian,
    pub(crate) max_depth: usize,
}

impl WriteOpts {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn endian(mut self, value: Endian) -> Self {
        self.endian = value;
        self
    }

    /// Maximum nesting of lists and compounds. A deeper tree fails with
    /// [`ErrorKind::Length`][error::ErrorKind::Length] instead of producing
    /// a document the reader would reject.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }
}

impl Default for WriteOpts {
    fn default() -> Self {
        Self {
            endian: Endian::Big,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

// Array and list lengths are i32 on the wire.
const MAX_WIRE_LEN: usize = i32::MAX as usize;

const DEFAULT_MAX_DEPTH: usize = 512;
