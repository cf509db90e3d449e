//! Decoding of binary NBT into a [`Value`] tree.
//!
//! The whole document is materialised. A document that fails to decode is
//! rejected entirely; no partial tree is ever returned.
//!
//! ```
//! use nbtkit::{Reader, Value};
//!
//! // A document named "hello" holding Int(1).
//! let input = [3, 0, 5, b'h', b'e', b'l', b'l', b'o', 0, 0, 0, 1];
//!
//! let mut reader = Reader::new(&input[..]);
//! let (key, value) = reader.read_document().unwrap();
//! assert_eq!(key, "hello");
//! assert_eq!(value, Value::Int(1));
//! ```

use std::convert::TryFrom;
use std::io::Read;

use log::{debug, trace};

use crate::{
    endian::{self, Number},
    error::{Error, Result},
    ByteArray, Compound, IntArray, List, ReadOpts, Tag, Value,
};

/// Read NBT from a byte slice in big endian order.
pub fn from_bytes(input: &[u8]) -> Result<(String, Value)> {
    from_reader(input)
}

/// Read NBT from any reader in big endian order. The reader is not buffered
/// here; wrap it in a [`BufReader`][std::io::BufReader] if reads are costly.
pub fn from_reader<R: Read>(reader: R) -> Result<(String, Value)> {
    from_reader_with_opts(reader, ReadOpts::default())
}

pub fn from_reader_with_opts<R: Read>(reader: R, opts: ReadOpts) -> Result<(String, Value)> {
    Reader::with_opts(reader, opts).read_document()
}

/// Reader decodes NBT from any [`Read`]. It does not decompress; see
/// [`compress`][crate::compress] for that.
///
/// Any failed read leaves the reader in a failed state, after which every
/// further read fails until [`clear_failure`][Self::clear_failure] is called.
/// The position of the underlying stream after a failure is unspecified.
pub struct Reader<R: Read> {
    reader: R,
    opts: ReadOpts,
    failed: bool,
}

impl<R: Read> Reader<R> {
    /// Create a reader with default options: big endian, default limits.
    pub fn new(reader: R) -> Self {
        Self::with_opts(reader, ReadOpts::default())
    }

    pub fn with_opts(reader: R, opts: ReadOpts) -> Self {
        Self {
            reader,
            opts,
            failed: false,
        }
    }

    pub fn opts(&self) -> &ReadOpts {
        &self.opts
    }

    /// Whether an earlier read failed.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Allow reading again after a failure. The caller is responsible for
    /// putting the underlying stream somewhere sensible.
    pub fn clear_failure(&mut self) {
        self.failed = false;
    }

    /// Gets a reference to the underlying value in this reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying value in this reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes this reader, returning the underlying value.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read a whole document: the root tag type, its name and its payload.
    pub fn read_document(&mut self) -> Result<(String, Value)> {
        self.guarded(|r| {
            let tag = r.type_byte(false)?;
            let key = r.string()?;
            trace!("reading document {:?} of type {}", key, tag);
            let value = r.payload(tag, 0)?;
            Ok((key, value))
        })
    }

    /// Read a whole document whose root must be a Compound. Anything else is a
    /// cast error, raised before the payload is read.
    pub fn read_compound_document(&mut self) -> Result<(String, Compound)> {
        self.guarded(|r| {
            let tag = r.type_byte(false)?;
            if tag != Tag::Compound {
                return Err(Error::bad_cast(tag, Tag::Compound));
            }
            let key = r.string()?;
            match r.payload(tag, 0)? {
                Value::Compound(c) => Ok((key, c)),
                other => Err(Error::bad_cast(other.tag(), Tag::Compound)),
            }
        })
    }

    /// Read a single tag type byte. [`Tag::End`] is only accepted if
    /// `allow_end` is set.
    pub fn read_type(&mut self, allow_end: bool) -> Result<Tag> {
        self.guarded(|r| r.type_byte(allow_end))
    }

    /// Read a length prefixed UTF-8 string.
    pub fn read_string(&mut self) -> Result<String> {
        self.guarded(|r| r.string())
    }

    /// Read a single number in the configured byte order.
    pub fn read_num<T: Number>(&mut self) -> Result<T> {
        self.guarded(|r| r.num())
    }

    /// Read the payload of a tag of the given type. [`Tag::End`] and
    /// [`Tag::Null`] have no payload and are input errors.
    pub fn read_payload(&mut self, tag: Tag) -> Result<Value> {
        self.guarded(|r| r.payload(tag, 0))
    }

    fn guarded<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.failed {
            return Err(Error::failed_state());
        }

        let res = f(self);
        if let Err(e) = &res {
            debug!("nbt read failed: {}", e);
            self.failed = true;
        }
        res
    }

    fn type_byte(&mut self, allow_end: bool) -> Result<Tag> {
        let id: u8 = endian::read_big(&mut self.reader).map_err(Error::read_type_io)?;

        match Tag::try_from(id) {
            Ok(Tag::End) if !allow_end => Err(Error::invalid_tag(id)),
            Ok(tag) => Ok(tag),
            Err(_) => Err(Error::invalid_tag(id)),
        }
    }

    fn string(&mut self) -> Result<String> {
        let len: u16 = self.num()?;
        let buf = self.bytes(len.into())?;

        String::from_utf8(buf).map_err(|e| Error::nonunicode_string(e.as_bytes()))
    }

    fn num<T: Number>(&mut self) -> Result<T> {
        endian::read(&mut self.reader, self.opts.endian).map_err(Error::read_io)
    }

    /// Read exactly `len` bytes without trusting `len` for the allocation.
    fn bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.reader
            .by_ref()
            .take(len as u64)
            .read_to_end(&mut buf)
            .map_err(Error::read_io)?;

        if buf.len() != len {
            return Err(Error::unexpected_eof());
        }
        Ok(buf)
    }

    fn seq_len(&mut self, tag: Tag) -> Result<usize> {
        let len: i32 = self.num()?;
        if len < 0 {
            return Err(Error::negative_len(tag, len));
        }

        let len = len as usize;
        if len > self.opts.max_seq_len {
            return Err(Error::seq_too_long(tag, len, self.opts.max_seq_len));
        }
        Ok(len)
    }

    fn payload(&mut self, tag: Tag, depth: usize) -> Result<Value> {
        Ok(match tag {
            Tag::Byte => Value::Byte(self.num()?),
            Tag::Short => Value::Short(self.num()?),
            Tag::Int => Value::Int(self.num()?),
            Tag::Long => Value::Long(self.num()?),
            Tag::Float => Value::Float(self.num()?),
            Tag::Double => Value::Double(self.num()?),
            Tag::String => Value::String(self.string()?),
            Tag::ByteArray => {
                let len = self.seq_len(tag)?;
                let buf = self.bytes(len)?;
                Value::ByteArray(ByteArray::new(vec_u8_into_i8(buf)))
            }
            Tag::IntArray => {
                let len = self.seq_len(tag)?;
                let mut data = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    data.push(self.num()?);
                }
                Value::IntArray(IntArray::new(data))
            }
            Tag::List => {
                let depth = self.enter(depth)?;
                let el_type = self.type_byte(true)?;
                let len = self.seq_len(tag)?;

                let mut list = List::with_type(el_type);
                if list.el_type() == Tag::Null && len > 0 {
                    return Err(Error::end_list_not_empty(len as i32));
                }

                list.reserve(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    list.push(self.payload(el_type, depth)?)?;
                }
                Value::List(list)
            }
            Tag::Compound => {
                let depth = self.enter(depth)?;
                let mut compound = Compound::new();

                loop {
                    let tag = self.type_byte(true)?;
                    if tag == Tag::End {
                        break;
                    }
                    let key = self.string()?;
                    let value = self.payload(tag, depth)?;
                    // Duplicate keys: the last one wins.
                    compound.put(key, value);
                }
                Value::Compound(compound)
            }
            Tag::End | Tag::Null => return Err(Error::no_payload(tag)),
        })
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        if depth > self.opts.max_depth {
            return Err(Error::too_deep(self.opts.max_depth));
        }
        Ok(depth)
    }
}

// Upper bound on elements reserved up front from a length prefix.
const PREALLOC_LIMIT: usize = 4096;

fn vec_u8_into_i8(v: Vec<u8>) -> Vec<i8> {
    v.into_iter().map(|b| b as i8).collect()
}
