//! GZIP, zlib and raw DEFLATE wrapped NBT.
//!
//! The reader and writer only ever see a plain byte stream. These helpers put
//! a [`flate2`] decoder or encoder in between. Failures raised by the
//! decoder, such as a corrupt stream, are reported as
//! [`ErrorKind::Compression`][crate::error::ErrorKind::Compression].
//!
//! Minecraft's `level.dat` and player files are GZIP compressed:
//!
//! ```no_run
//! use std::{fs::File, io::BufReader};
//! use nbtkit::{compress, ReadOpts};
//!
//! let file = BufReader::new(File::open("level.dat").unwrap());
//! let (_, level) = compress::from_reader_auto(file, ReadOpts::new()).unwrap();
//! println!("{:?}", level);
//! ```

use std::io::{self, BufRead, Read, Write};

use flate2::{
    read::{DeflateDecoder, GzDecoder, ZlibDecoder},
    write::{DeflateEncoder, GzEncoder, ZlibEncoder},
    Compression,
};
use log::debug;

use crate::{
    error::{CompressionFault, Error, Result},
    ReadOpts, Reader, Value, WriteOpts, Writer,
};

/// How a document is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Uncompressed,
    /// GZIP, as used by `level.dat` and player data.
    Gzip,
    /// zlib, as used by chunks in region files.
    Zlib,
    /// Raw DEFLATE without any header. Never detected automatically.
    Deflate,
}

/// Guess the format from the first bytes of `reader` without consuming them.
///
/// A GZIP stream starts with `1f 8b`. A zlib stream starts with a deflate
/// method nibble and a header checksum. Anything else, including raw
/// DEFLATE, is reported as [`Format::Uncompressed`].
///
/// Looks only at what the reader has buffered; a reader that returns a single
/// byte from `fill_buf` is treated as uncompressed.
pub fn detect_format<R: BufRead>(reader: &mut R) -> Result<Format> {
    let head = reader.fill_buf().map_err(Error::read_io)?;

    let format = match *head {
        [0x1f, 0x8b, ..] => Format::Gzip,
        [cmf, flg, ..] if cmf & 0x0f == 8 && ((u16::from(cmf) << 8) | u16::from(flg)) % 31 == 0 => {
            Format::Zlib
        }
        _ => Format::Uncompressed,
    };

    debug!("detected nbt format {:?}", format);
    Ok(format)
}

/// Read a document wrapped in `format`.
pub fn from_reader_compressed<R: Read>(
    reader: R,
    format: Format,
    opts: ReadOpts,
) -> Result<(String, Value)> {
    match format {
        Format::Uncompressed => Reader::with_opts(reader, opts).read_document(),
        Format::Gzip => read_faulting(GzDecoder::new(reader), opts),
        Format::Zlib => read_faulting(ZlibDecoder::new(reader), opts),
        Format::Deflate => read_faulting(DeflateDecoder::new(reader), opts),
    }
}

/// Read a document, detecting GZIP and zlib wrapping with [`detect_format`].
pub fn from_reader_auto<R: BufRead>(mut reader: R, opts: ReadOpts) -> Result<(String, Value)> {
    let format = detect_format(&mut reader)?;
    from_reader_compressed(reader, format, opts)
}

/// Write a document wrapped in `format`, returning the sink once the
/// compressed stream is finished.
///
/// ```
/// use flate2::Compression;
/// use nbtkit::{compress::{self, Format}, ReadOpts, Value, WriteOpts};
///
/// let out = compress::to_writer_compressed(
///     vec![],
///     Format::Gzip,
///     Compression::fast(),
///     "",
///     &Value::Int(42),
///     WriteOpts::new(),
/// )
/// .unwrap();
///
/// let (_, value) = compress::from_reader_auto(&out[..], ReadOpts::new()).unwrap();
/// assert_eq!(value, Value::Int(42));
/// ```
pub fn to_writer_compressed<W: Write>(
    writer: W,
    format: Format,
    level: Compression,
    key: &str,
    value: &Value,
    opts: WriteOpts,
) -> Result<W> {
    Ok(match format {
        Format::Uncompressed => write_with(writer, key, value, opts)?,
        Format::Gzip => write_with(GzEncoder::new(writer, level), key, value, opts)?.finish()?,
        Format::Zlib => write_with(ZlibEncoder::new(writer, level), key, value, opts)?.finish()?,
        Format::Deflate => write_with(DeflateEncoder::new(writer, level), key, value, opts)?.finish()?,
    })
}

fn read_faulting<R: Read>(decoder: R, opts: ReadOpts) -> Result<(String, Value)> {
    Reader::with_opts(Faulting(decoder), opts).read_document()
}

fn write_with<W: Write>(writer: W, key: &str, value: &Value, opts: WriteOpts) -> Result<W> {
    let mut writer = Writer::with_opts(writer, opts);
    writer.write_document(key, value)?;
    Ok(writer.into_inner())
}

/// Tags every error coming out of a decoder so the reader reports it as a
/// compression error rather than bad input.
struct Faulting<R>(R);

impl<R: Read> Read for Faulting<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0
            .read(buf)
            .map_err(|e| io::Error::new(e.kind(), CompressionFault(e)))
    }
}
