//! Encoding of a [`Value`] tree into binary NBT.
//!
//! Writing mirrors [`reader`][crate::reader]: the same layout in the same
//! byte order. Lengths that do not fit their wire field are length errors
//! and are never truncated. List elements are checked against the list's
//! element type, and a [`Value::Null`] anywhere in the tree is a cast error.
//! Trees nested deeper than [`WriteOpts::max_depth`] are length errors.
//!
//! Bytes already handed to the sink before an error stay there.
//!
//! ```
//! use nbtkit::{Compound, Value};
//!
//! let mut root = Compound::new();
//! root.put("x", 1_i8);
//!
//! let bytes = nbtkit::to_bytes("", &Value::Compound(root)).unwrap();
//! assert_eq!(bytes, [10, 0, 0, 1, 0, 1, b'x', 1, 0]);
//! ```

use std::io::Write;

use log::trace;

use crate::{
    endian::{self, Number},
    error::{Error, Result},
    List, Tag, Value, WriteOpts,
};

/// Encode a document in big endian order into a new `Vec`.
pub fn to_bytes(key: &str, value: &Value) -> Result<Vec<u8>> {
    let mut out = vec![];
    to_writer(&mut out, key, value)?;
    Ok(out)
}

/// Encode a document in big endian order into `writer`.
pub fn to_writer<W: Write>(writer: W, key: &str, value: &Value) -> Result<()> {
    to_writer_with_opts(writer, key, value, WriteOpts::default())
}

pub fn to_writer_with_opts<W: Write>(
    writer: W,
    key: &str,
    value: &Value,
    opts: WriteOpts,
) -> Result<()> {
    Writer::with_opts(writer, opts).write_document(key, value)
}

/// Writer encodes NBT into any [`Write`]. It does not compress; see
/// [`compress`][crate::compress] for that.
pub struct Writer<W: Write> {
    writer: W,
    opts: WriteOpts,
}

impl<W: Write> Writer<W> {
    /// Create a big endian writer.
    pub fn new(writer: W) -> Self {
        Self::with_opts(writer, WriteOpts::default())
    }

    pub fn with_opts(writer: W, opts: WriteOpts) -> Self {
        Self { writer, opts }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a whole document: the value's tag type, the key and the payload.
    pub fn write_document(&mut self, key: &str, value: &Value) -> Result<()> {
        trace!("writing document {:?} of type {}", key, value.tag());
        self.write_type(value.tag())?;
        self.write_string(key)?;
        self.write_payload(value)
    }

    /// Write a tag type byte. [`Tag::Null`] has no byte and is a cast error.
    pub fn write_type(&mut self, tag: Tag) -> Result<()> {
        let id = tag.id().ok_or_else(Error::null_value)?;
        self.write_num(id)
    }

    /// Write a UTF-8 string with its 16 bit length prefix.
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        let len = u16::try_from(s.len()).map_err(|_| Error::len_too_large("string", s.len()))?;
        self.write_num(len)?;
        self.writer.write_all(s.as_bytes())?;
        Ok(())
    }

    /// Write a single number in the configured byte order.
    pub fn write_num<T: Number>(&mut self, x: T) -> Result<()> {
        endian::write(&mut self.writer, x, self.opts.endian)?;
        Ok(())
    }

    /// Write the payload of `value`, without its type byte or name.
    pub fn write_payload(&mut self, value: &Value) -> Result<()> {
        self.payload(value, 0)
    }

    fn payload(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Null => return Err(Error::null_value()),
            Value::Byte(v) => self.write_num(*v)?,
            Value::Short(v) => self.write_num(*v)?,
            Value::Int(v) => self.write_num(*v)?,
            Value::Long(v) => self.write_num(*v)?,
            Value::Float(v) => self.write_num(*v)?,
            Value::Double(v) => self.write_num(*v)?,
            Value::String(v) => self.write_string(v)?,
            Value::ByteArray(v) => {
                self.write_len("byte array", v.len())?;
                let bytes: Vec<u8> = v.iter().map(|&b| b as u8).collect();
                self.writer.write_all(&bytes)?;
            }
            Value::IntArray(v) => {
                self.write_len("int array", v.len())?;
                for &x in v.iter() {
                    self.write_num(x)?;
                }
            }
            Value::List(list) => {
                let depth = self.enter(depth)?;
                self.write_list(list, depth)?;
            }
            Value::Compound(compound) => {
                let depth = self.enter(depth)?;
                for (key, value) in compound {
                    self.write_type(value.tag())?;
                    self.write_string(key)?;
                    self.payload(value, depth)?;
                }
                self.write_type(Tag::End)?;
            }
        }
        Ok(())
    }

    fn write_list(&mut self, list: &List, depth: usize) -> Result<()> {
        let el_type = list.el_type();

        // An empty list without a type goes on the wire as a list of End.
        self.write_type(match el_type {
            Tag::Null => Tag::End,
            other => other,
        })?;
        self.write_len("list", list.len())?;

        for el in list {
            if el.tag() != el_type {
                return Err(Error::bad_insert(el.tag(), el_type));
            }
            self.payload(el, depth)?;
        }
        Ok(())
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        if depth > self.opts.max_depth {
            return Err(Error::too_deep_to_write(self.opts.max_depth));
        }
        Ok(depth)
    }

    fn write_len(&mut self, what: &str, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::len_too_large(what, len))?;
        self.write_num(len)
    }
}
