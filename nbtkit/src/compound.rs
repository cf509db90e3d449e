use std::collections::{btree_map, BTreeMap};
use std::ops::Index;

use crate::{
    error::{Error, Result},
    Tag, Value,
};

/// A string keyed map of NBT values, the NBT Compound.
///
/// Iteration is in key order. Two compounds holding the same entries iterate
/// identically no matter the order they were filled in, but code should not
/// rely on any particular order beyond that.
///
/// References returned by [`at`][Self::at], [`get`][Self::get] and friends
/// borrow the compound. Inserting or erasing while such a reference is alive
/// is rejected at compile time.
///
/// ```
/// use nbtkit::{Compound, Value};
///
/// let mut level = Compound::new();
/// assert!(level.put("Name", "world"));
/// assert!(!level.put("Name", "other world"));
/// assert!(!level.insert("Name", "ignored"));
///
/// assert_eq!(level["Name"], Value::String("other world".into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
pub struct Compound {
    tags: BTreeMap<String, Value>,
}

impl Compound {
    pub fn new() -> Self {
        Default::default()
    }

    /// Checked access. Fails with [`ErrorKind::OutOfRange`] if the key is
    /// absent.
    ///
    /// [`ErrorKind::OutOfRange`]: crate::error::ErrorKind::OutOfRange
    pub fn at(&self, key: &str) -> Result<&Value> {
        self.tags.get(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Mutable checked access. The returned slot keeps its type under
    /// [`Value::assign`] and [`Value::set`]; replacing it through the
    /// reference directly is possible but bypasses that check.
    pub fn at_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.tags
            .get_mut(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Walk through nested compounds. Every key but the last must name a
    /// compound.
    ///
    /// ```
    /// use nbtkit::{nbt, Value};
    ///
    /// let root = nbt!({ "Data": { "Player": { "Health": 20_i16 } } });
    /// let health = root
    ///     .as_compound()
    ///     .unwrap()
    ///     .at_path(&["Data", "Player", "Health"])
    ///     .unwrap();
    /// assert_eq!(health, &Value::Short(20));
    /// ```
    pub fn at_path(&self, path: &[&str]) -> Result<&Value> {
        let (last, parents) = path.split_last().ok_or_else(|| Error::key_not_found(""))?;

        let mut current = self;
        for key in parents {
            current = current.at(key)?.as_compound()?;
        }
        current.at(last)
    }

    pub fn at_path_mut(&mut self, path: &[&str]) -> Result<&mut Value> {
        let (last, parents) = path.split_last().ok_or_else(|| Error::key_not_found(""))?;

        let mut current = self;
        for key in parents {
            current = current.at_mut(key)?.as_compound_mut()?;
        }
        current.at_mut(last)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.tags.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.tags.get_mut(key)
    }

    /// Get the slot under `key`, inserting an empty [`Value::Null`] slot if
    /// there is none. The first value assigned to a fresh slot fixes its type.
    ///
    /// ```
    /// use nbtkit::{Compound, Value};
    ///
    /// let mut c = Compound::new();
    /// c.slot("x").assign(5_i32).unwrap();
    /// assert_eq!(c["x"], Value::Int(5));
    /// ```
    pub fn slot(&mut self, key: &str) -> &mut Value {
        self.tags.entry(key.to_owned()).or_insert(Value::Null)
    }

    /// Insert or overwrite. Returns true if the key was not present before.
    /// An overwrite replaces the whole value, so the slot may change type.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        self.tags.insert(key.into(), value.into()).is_none()
    }

    /// Insert only if the key is absent. Returns false and leaves the
    /// existing value untouched otherwise.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        match self.tags.entry(key.into()) {
            btree_map::Entry::Vacant(e) => {
                e.insert(value.into());
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Construct a `T` from `args` and [`put`][Self::put] it.
    ///
    /// ```
    /// use nbtkit::{ByteArray, Compound, Tag};
    ///
    /// let mut c = Compound::new();
    /// c.emplace::<ByteArray, _>("bytes", vec![1, 2, 3]);
    /// assert!(c.has_key_of("bytes", Tag::ByteArray));
    /// ```
    pub fn emplace<T, A>(&mut self, key: impl Into<String>, args: A) -> bool
    where
        T: From<A> + Into<Value>,
    {
        self.put(key, T::from(args))
    }

    /// Remove the entry under `key`. Returns whether there was one.
    pub fn erase(&mut self, key: &str) -> bool {
        self.tags.remove(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.tags.remove(key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    /// True if `key` is present and holds a value of type `tag`.
    pub fn has_key_of(&self, key: &str, tag: Tag) -> bool {
        self.tags.get(key).map_or(false, |v| v.tag() == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.tags.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, Value> {
        self.tags.iter_mut()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.tags.keys()
    }
}

/// Unchecked access.
///
/// # Panics
///
/// Panics if the key is absent. Use [`Compound::at`] for a checked lookup.
impl Index<&str> for Compound {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.tags.get(key) {
            Some(v) => v,
            None => panic!("key \"{}\" not found in compound", key),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut c = Compound::new();
        c.extend(iter);
        c
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Compound {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
