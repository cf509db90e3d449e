mod de;
mod ser;

use std::convert::TryFrom;

use crate::{
    error::{Error, Result},
    ByteArray, Compound, IntArray, List, Tag,
};

/// Value is a complete NBT value. It owns its data: lists and compounds own
/// their children exclusively, so cloning a value deep-copies the subtree.
///
/// `Value::Null` is an empty slot with no type yet. It is what
/// [`Compound::slot`] inserts for a missing key, and it adopts the type of the
/// first value assigned to it.
///
/// ```
/// use nbtkit::{Compound, Value};
///
/// # fn main() -> nbtkit::error::Result<()> {
/// let mut compound = Compound::new();
/// compound.slot("DataVersion").assign(3465)?;
///
/// match compound["DataVersion"] {
///     Value::Int(ver) => println!("Version: {}", ver),
///     _ => {}
/// }
///
/// // The slot is now pinned to Int.
/// assert!(compound.slot("DataVersion").assign(1_i8).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
}

macro_rules! widening_getter {
    ($(#[$meta:meta])* $name:ident -> $ty:ty, $tag:ident: $($variant:ident),+) => {
        $(#[$meta])*
        pub fn $name(&self) -> Result<$ty> {
            match *self {
                $(Value::$variant(v) => Ok(v as $ty),)+
                _ => Err(Error::bad_cast(self.tag(), Tag::$tag)),
            }
        }
    };
}

macro_rules! ref_getter {
    ($name:ident, $name_mut:ident -> $ty:ty, $variant:ident) => {
        pub fn $name(&self) -> Result<&$ty> {
            match self {
                Value::$variant(v) => Ok(v),
                other => Err(Error::bad_cast(other.tag(), Tag::$variant)),
            }
        }

        pub fn $name_mut(&mut self) -> Result<&mut $ty> {
            match self {
                Value::$variant(v) => Ok(v),
                other => Err(Error::bad_cast(other.tag(), Tag::$variant)),
            }
        }
    };
}

impl Value {
    /// The tag type of this value. [`Tag::Null`] for an empty slot.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    widening_getter!(
        /// Reads a Byte.
        as_i8 -> i8, Byte: Byte
    );
    widening_getter!(
        /// Reads a Short, or a Byte widened to i16.
        as_i16 -> i16, Short: Byte, Short
    );
    widening_getter!(
        /// Reads an Int, or any narrower integer widened to i32. A stored Long
        /// is a cast error.
        as_i32 -> i32, Int: Byte, Short, Int
    );
    widening_getter!(as_i64 -> i64, Long: Byte, Short, Int, Long);
    widening_getter!(as_f32 -> f32, Float: Byte, Short, Int, Long, Float);
    widening_getter!(as_f64 -> f64, Double: Byte, Short, Int, Long, Float, Double);

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(Error::bad_cast(other.tag(), Tag::String)),
        }
    }

    ref_getter!(as_byte_array, as_byte_array_mut -> ByteArray, ByteArray);
    ref_getter!(as_int_array, as_int_array_mut -> IntArray, IntArray);
    ref_getter!(as_list, as_list_mut -> List, List);
    ref_getter!(as_compound, as_compound_mut -> Compound, Compound);

    /// Overwrite this value with `other`, which must be of exactly the same
    /// variant. A `Null` slot accepts any value and takes on its type.
    ///
    /// Fails with [`ErrorKind::Cast`][crate::error::ErrorKind::Cast] and
    /// leaves `self` untouched on a mismatch, even when the conversion would
    /// be lossless. Use [`Value::set`] for widening stores.
    pub fn assign(&mut self, other: impl Into<Value>) -> Result<()> {
        let other = other.into();
        if !self.is_null() && self.tag() != other.tag() {
            return Err(Error::bad_cast(other.tag(), self.tag()));
        }
        *self = other;
        Ok(())
    }

    /// Store `val` into this slot, widening numbers to the slot's type: an
    /// `i8` can be stored into a Short slot, an `i32` into a Double slot, but
    /// an `i32` cannot be stored into a Byte slot. A `Null` slot takes on the
    /// natural type of `val`.
    ///
    /// ```
    /// use nbtkit::Value;
    ///
    /// let mut v = Value::Long(0);
    /// v.set(5_i8).unwrap();
    /// assert_eq!(v, Value::Long(5));
    ///
    /// let mut v = Value::Byte(0);
    /// assert!(v.set(5_i32).is_err());
    /// ```
    pub fn set(&mut self, val: impl Into<Value>) -> Result<()> {
        let val = val.into();
        let widened = if self.is_null() {
            val
        } else {
            val.widen_to(self.tag())?
        };
        *self = widened;
        Ok(())
    }

    fn widen_to(self, to: Tag) -> Result<Value> {
        use Value::*;

        Ok(match (to, self) {
            (to, v) if v.tag() == to => v,
            (Tag::Short, Byte(v)) => Short(v.into()),
            (Tag::Int, Byte(v)) => Int(v.into()),
            (Tag::Int, Short(v)) => Int(v.into()),
            (Tag::Long, Byte(v)) => Long(v.into()),
            (Tag::Long, Short(v)) => Long(v.into()),
            (Tag::Long, Int(v)) => Long(v.into()),
            (Tag::Float, Byte(v)) => Float(v.into()),
            (Tag::Float, Short(v)) => Float(v.into()),
            (Tag::Float, Int(v)) => Float(v as f32),
            (Tag::Float, Long(v)) => Float(v as f32),
            (Tag::Double, Byte(v)) => Double(v.into()),
            (Tag::Double, Short(v)) => Double(v.into()),
            (Tag::Double, Int(v)) => Double(v.into()),
            (Tag::Double, Long(v)) => Double(v as f64),
            (Tag::Double, Float(v)) => Double(v.into()),
            (to, v) => return Err(Error::bad_cast(v.tag(), to)),
        })
    }
}

/// Rust types that always become the same NBT tag. Lets typed constructors
/// like [`List::of`] know the tag before they see any element.
pub trait NbtType: Into<Value> {
    const TAG: Tag;
}

macro_rules! nbt_type {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl NbtType for $ty {
                const TAG: Tag = Tag::$tag;
            }
        )*
    };
}

nbt_type! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    ByteArray => ByteArray,
    IntArray => IntArray,
    List => List,
    Compound => Compound,
}

impl<'a> NbtType for &'a str {
    const TAG: Tag = Tag::String;
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

// ------------- TryFrom<&Value> impls -------------

macro_rules! try_from {
    ($($type:ty => $getter:ident),* $(,)?) => {
        $(
            impl TryFrom<&Value> for $type {
                type Error = Error;

                fn try_from(value: &Value) -> Result<Self> {
                    value.$getter()
                }
            }
        )*
    };
}

try_from! {
    i8 => as_i8,
    i16 => as_i16,
    i32 => as_i32,
    i64 => as_i64,
    f32 => as_f32,
    f64 => as_f64,
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        value.as_str()
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use Value::*;

        Ok(match u.arbitrary::<Tag>()? {
            Tag::Null | Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Byte(u.arbitrary()?),
            Tag::Short => Short(u.arbitrary()?),
            Tag::Int => Int(u.arbitrary()?),
            Tag::Long => Long(u.arbitrary()?),
            Tag::Float => Float(u.arbitrary()?),
            Tag::Double => Double(u.arbitrary()?),
            Tag::ByteArray => ByteArray(u.arbitrary()?),
            Tag::String => String(u.arbitrary()?),
            Tag::List => List(u.arbitrary()?),
            Tag::Compound => Compound(u.arbitrary()?),
            Tag::IntArray => IntArray(u.arbitrary()?),
        })
    }
}
