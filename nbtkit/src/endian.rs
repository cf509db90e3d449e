//! Reading and writing fixed width numbers in a chosen byte order.
//!
//! This layer knows nothing about NBT. It works on any [`Read`] or [`Write`]
//! and reports failures as plain [`io::Error`]s. A read that runs out of
//! input fails with [`io::ErrorKind::UnexpectedEof`] and produces no value.
//!
//! ```
//! use nbtkit::endian;
//!
//! let mut buf = vec![];
//! endian::write_big(&mut buf, 0x0102_i16).unwrap();
//! endian::write_little(&mut buf, 0x0102_i16).unwrap();
//! assert_eq!(buf, [1, 2, 2, 1]);
//!
//! let mut input = buf.as_slice();
//! assert_eq!(endian::read_big::<i16, _>(&mut input).unwrap(), 0x0102);
//! assert_eq!(endian::read_little::<i16, _>(&mut input).unwrap(), 0x0102);
//! ```

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};

/// Byte order of multi-byte numbers. NBT is big endian unless stated
/// otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endian {
    /// Most significant byte first.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

mod private {
    // Only this crate can implement this trait. Other traits can inherit from
    // Sealed in order to prevent other crates from creating implementations.
    pub trait Sealed {}
}

/// A fixed width integer or IEEE-754 float that can be transferred in either
/// byte order. Floats travel as their bit pattern.
pub trait Number: Copy + private::Sealed {
    fn read_from<B: ByteOrder, R: Read + ?Sized>(r: &mut R) -> io::Result<Self>;
    fn write_to<B: ByteOrder, W: Write + ?Sized>(self, w: &mut W) -> io::Result<()>;
}

impl private::Sealed for u8 {}
impl Number for u8 {
    fn read_from<B: ByteOrder, R: Read + ?Sized>(r: &mut R) -> io::Result<Self> {
        r.read_u8()
    }

    fn write_to<B: ByteOrder, W: Write + ?Sized>(self, w: &mut W) -> io::Result<()> {
        w.write_u8(self)
    }
}

impl private::Sealed for i8 {}
impl Number for i8 {
    fn read_from<B: ByteOrder, R: Read + ?Sized>(r: &mut R) -> io::Result<Self> {
        r.read_i8()
    }

    fn write_to<B: ByteOrder, W: Write + ?Sized>(self, w: &mut W) -> io::Result<()> {
        w.write_i8(self)
    }
}

macro_rules! number {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            impl private::Sealed for $ty {}
            impl Number for $ty {
                fn read_from<B: ByteOrder, R: Read + ?Sized>(r: &mut R) -> io::Result<Self> {
                    r.$read::<B>()
                }

                fn write_to<B: ByteOrder, W: Write + ?Sized>(self, w: &mut W) -> io::Result<()> {
                    w.$write::<B>(self)
                }
            }
        )*
    };
}

number! {
    u16 => read_u16, write_u16;
    u32 => read_u32, write_u32;
    u64 => read_u64, write_u64;
    i16 => read_i16, write_i16;
    i32 => read_i32, write_i32;
    i64 => read_i64, write_i64;
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
}

pub fn read_big<T: Number, R: Read + ?Sized>(r: &mut R) -> io::Result<T> {
    T::read_from::<BigEndian, R>(r)
}

pub fn read_little<T: Number, R: Read + ?Sized>(r: &mut R) -> io::Result<T> {
    T::read_from::<LittleEndian, R>(r)
}

pub fn write_big<T: Number, W: Write + ?Sized>(w: &mut W, x: T) -> io::Result<()> {
    x.write_to::<BigEndian, W>(w)
}

pub fn write_little<T: Number, W: Write + ?Sized>(w: &mut W, x: T) -> io::Result<()> {
    x.write_to::<LittleEndian, W>(w)
}

/// Read a number in the given byte order.
pub fn read<T: Number, R: Read + ?Sized>(r: &mut R, endian: Endian) -> io::Result<T> {
    match endian {
        Endian::Big => read_big(r),
        Endian::Little => read_little(r),
    }
}

/// Write a number in the given byte order.
pub fn write<T: Number, W: Write + ?Sized>(w: &mut W, x: T, endian: Endian) -> io::Result<()> {
    match endian {
        Endian::Big => write_big(w, x),
        Endian::Little => write_little(w, x),
    }
}
