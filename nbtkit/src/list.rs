use std::convert::TryFrom;
use std::ops::Index;

use crate::{
    error::{Error, Result},
    NbtType, Tag, Value,
};

/// A homogeneous sequence of NBT values, the NBT List.
///
/// A list remembers one element type. It is [`Tag::Null`] until the list
/// receives its first element (or is created with a type), after which every
/// insertion must match it exactly. Lists never convert between element
/// types; [`clear`][Self::clear] keeps the element type, while
/// [`reset`][Self::reset] forgets it.
///
/// ```
/// use nbtkit::{List, Tag};
///
/// let mut list = List::new();
/// assert_eq!(list.el_type(), Tag::Null);
///
/// list.push(1_i32).unwrap();
/// assert_eq!(list.el_type(), Tag::Int);
///
/// // Rejected, and the list is left as it was.
/// assert!(list.push("two").is_err());
/// assert_eq!(list.len(), 1);
/// ```
///
/// Equality compares element types and contents, except that any two empty
/// lists are equal whatever their declared element types.
///
/// [`at_mut`][Self::at_mut] and [`iter_mut`][Self::iter_mut] hand out plain
/// `&mut Value`. Storing a value of another type through them directly,
/// rather than with [`Value::assign`] or [`Value::set`], leaves an element
/// that does not match [`el_type`][Self::el_type]. Equality sees the changed
/// element right away, and the writer rejects the list with a cast error.
#[derive(Debug, Clone)]
pub struct List {
    el_type: Tag,
    data: Vec<Value>,
}

impl Default for List {
    fn default() -> Self {
        Self {
            el_type: Tag::Null,
            data: Vec::new(),
        }
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        if self.data.is_empty() && other.data.is_empty() {
            return true;
        }
        self.el_type == other.el_type && self.data == other.data
    }
}

impl List {
    /// An empty list with no element type yet.
    pub fn new() -> Self {
        Default::default()
    }

    /// An empty list with a fixed element type. [`Tag::End`] is treated as
    /// [`Tag::Null`], as it is on the wire.
    pub fn with_type(el_type: Tag) -> Self {
        let el_type = match el_type {
            Tag::End => Tag::Null,
            other => other,
        };
        Self {
            el_type,
            data: Vec::new(),
        }
    }

    /// Build a list out of native values of one NBT type. The element type is
    /// fixed by `T` even if `items` is empty.
    ///
    /// ```
    /// use nbtkit::{List, Tag, Value};
    ///
    /// let shorts = List::of::<i16>([2, 3]);
    /// assert_eq!(shorts.el_type(), Tag::Short);
    /// assert_eq!(shorts[1], Value::Short(3));
    ///
    /// let names = List::of::<&str>(vec!["Steve", "Alex"]);
    /// assert_eq!(names.el_type(), Tag::String);
    /// ```
    pub fn of<T: NbtType>(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            el_type: T::TAG,
            data: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a list out of already constructed values. Every value must share
    /// the type of the first one, and none may be [`Value::Null`].
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let el_type = values.first().map_or(Tag::Null, Value::tag);

        for v in &values {
            if v.is_null() {
                return Err(Error::null_value());
            }
            if v.tag() != el_type {
                return Err(Error::bad_insert(v.tag(), el_type));
            }
        }

        Ok(Self {
            el_type,
            data: values,
        })
    }

    pub fn el_type(&self) -> Tag {
        self.el_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked access. Fails with [`ErrorKind::OutOfRange`] past the end.
    ///
    /// [`ErrorKind::OutOfRange`]: crate::error::ErrorKind::OutOfRange
    pub fn at(&self, i: usize) -> Result<&Value> {
        self.data
            .get(i)
            .ok_or_else(|| Error::index_out_of_range(i, self.data.len()))
    }

    /// Mutable checked access. Use [`Value::assign`] or [`Value::set`] on the
    /// result to keep the element type intact; a value of another type stored
    /// through this reference is rejected when the list is written.
    pub fn at_mut(&mut self, i: usize) -> Result<&mut Value> {
        let len = self.data.len();
        self.data
            .get_mut(i)
            .ok_or_else(|| Error::index_out_of_range(i, len))
    }

    pub fn get(&self, i: usize) -> Option<&Value> {
        self.data.get(i)
    }

    /// Append a value. The first value pushed into a list without an element
    /// type fixes it. Fails with [`ErrorKind::Cast`] on a `Null` value or on a
    /// value of another type, leaving the list unchanged.
    ///
    /// [`ErrorKind::Cast`]: crate::error::ErrorKind::Cast
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.check(&value)?;

        if self.el_type == Tag::Null {
            self.el_type = value.tag();
        }
        self.data.push(value);
        Ok(())
    }

    /// Construct a `T` from `args` and [`push`][Self::push] it.
    pub fn emplace<T, A>(&mut self, args: A) -> Result<()>
    where
        T: From<A> + Into<Value>,
    {
        self.push(T::from(args))
    }

    /// Replace the element at `i`. The value must have the list's element
    /// type.
    pub fn set(&mut self, i: usize, value: impl Into<Value>) -> Result<()> {
        let len = self.data.len();
        if i >= len {
            return Err(Error::index_out_of_range(i, len));
        }

        let value = value.into();
        self.check(&value)?;
        self.data[i] = value;
        Ok(())
    }

    /// Remove the last element, or `None` if the list is empty. The element
    /// type is kept.
    pub fn pop(&mut self) -> Option<Value> {
        self.data.pop()
    }

    /// Remove every element. The element type is kept.
    pub fn clear(&mut self) {
        self.data.clear()
    }

    /// Remove every element and forget the element type.
    pub fn reset(&mut self) {
        self.reset_to(Tag::Null)
    }

    /// Remove every element and fix a new element type.
    pub fn reset_to(&mut self, el_type: Tag) {
        *self = Self::with_type(el_type);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.data.iter_mut()
    }

    fn check(&self, value: &Value) -> Result<()> {
        if value.is_null() {
            return Err(Error::null_value());
        }
        if self.el_type != Tag::Null && value.tag() != self.el_type {
            return Err(Error::bad_insert(value.tag(), self.el_type));
        }
        Ok(())
    }
}

/// Unchecked access.
///
/// # Panics
///
/// Panics if `i` is out of range. Use [`List::at`] for a checked lookup.
impl Index<usize> for List {
    type Output = Value;

    fn index(&self, i: usize) -> &Value {
        &self.data[i]
    }
}

impl TryFrom<Vec<Value>> for List {
    type Error = Error;

    fn try_from(values: Vec<Value>) -> Result<Self> {
        Self::from_values(values)
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(feature = "arbitrary1")]
fn typed_list<'a, T>(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<List>
where
    T: arbitrary::Arbitrary<'a> + NbtType,
{
    Ok(List::of::<T>(
        u.arbitrary_iter::<T>()?
            .collect::<arbitrary::Result<Vec<_>>>()?,
    ))
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for List {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use crate::{ByteArray, Compound, IntArray};

        // Lists need to all be the same type.
        Ok(match u.arbitrary::<Tag>()? {
            Tag::Null | Tag::End => List::new(),
            Tag::Byte => typed_list::<i8>(u)?,
            Tag::Short => typed_list::<i16>(u)?,
            Tag::Int => typed_list::<i32>(u)?,
            Tag::Long => typed_list::<i64>(u)?,
            Tag::Float => typed_list::<f32>(u)?,
            Tag::Double => typed_list::<f64>(u)?,
            Tag::ByteArray => typed_list::<ByteArray>(u)?,
            Tag::String => typed_list::<String>(u)?,
            Tag::List => typed_list::<List>(u)?,
            Tag::Compound => typed_list::<Compound>(u)?,
            Tag::IntArray => typed_list::<IntArray>(u)?,
        })
    }
}
