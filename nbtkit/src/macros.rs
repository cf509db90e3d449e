/// Produce a [`Value`][`crate::Value`] using
/// JSON/[SNBT](https://minecraft.wiki/w/NBT_format#SNBT_format)-like
/// syntax.
///
/// Example:
/// ```rust
/// use nbtkit::nbt;
/// let _ = nbt!({
///     "key1": "value1",
///     "key2": 42,
///     "key3": [4, 2],
/// });
/// ```
///
/// Unlike SNBT, keys are single tokens: a string literal, a variable holding
/// anything that converts into a `String`, or a parenthesised expression.
/// `"key1"` above could not be written as a bare `key1`. Values are converted with
/// `Value::from`, so Rust literal types pick the tag: `42` is an Int,
/// `42_i16` a Short.
///
/// NBT Arrays are supported with
/// [SNBT](https://minecraft.wiki/w/NBT_format#SNBT_format) syntax:
///
/// ```rust
/// # use nbtkit::nbt;
/// let _ = nbt!({
///     "bytes": [B; 1, 2, 3],
///     "ints": [I; 1, 2, 3],
/// });
/// ```
///
/// # Panics
///
/// Lists must be homogeneous. A list literal mixing tag types, such as
/// `[1, "two"]`, panics.
#[macro_export]
macro_rules! nbt {
    ($($nbt:tt)+) => {
        $crate::__nbt_value!($($nbt)+)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __nbt_value {
    ([B; $($e:expr),* $(,)?]) => {
        $crate::Value::ByteArray($crate::ByteArray::new(::std::vec![$($e),*]))
    };

    ([I; $($e:expr),* $(,)?]) => {
        $crate::Value::IntArray($crate::IntArray::new(::std::vec![$($e),*]))
    };

    ([$($tt:tt)*]) => {
        $crate::Value::List($crate::__list_literal($crate::__nbt_seq!(() $($tt)*)))
    };

    ({$($tt:tt)*}) => {{
        let mut compound = $crate::Compound::new();
        $crate::__nbt_entries!(compound $($tt)*);
        $crate::Value::Compound(compound)
    }};

    // Numbers, strings, arrays, variables: anything with a Value conversion.
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Munches list elements into the parenthesised accumulator, converting each
/// one as it goes. Nested lists and compounds are single token trees, so they
/// are matched before falling back to an expression.
#[macro_export]
#[doc(hidden)]
macro_rules! __nbt_seq {
    (($($done:expr,)*)) => {
        ::std::vec![$($done),*]
    };

    (($($done:expr,)*) [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::__nbt_seq!(($($done,)* $crate::__nbt_value!([$($inner)*]),) $($($rest)*)?)
    };

    (($($done:expr,)*) {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        $crate::__nbt_seq!(($($done,)* $crate::__nbt_value!({$($inner)*}),) $($($rest)*)?)
    };

    (($($done:expr,)*) $next:expr $(, $($rest:tt)*)?) => {
        $crate::__nbt_seq!(($($done,)* $crate::__nbt_value!($next),) $($($rest)*)?)
    };
}

/// Puts `key: value` entries into the compound named by the first token.
#[macro_export]
#[doc(hidden)]
macro_rules! __nbt_entries {
    ($compound:ident) => {};

    ($compound:ident $key:tt : [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $compound.put($key, $crate::__nbt_value!([$($inner)*]));
        $crate::__nbt_entries!($compound $($($rest)*)?);
    };

    ($compound:ident $key:tt : {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        $compound.put($key, $crate::__nbt_value!({$($inner)*}));
        $crate::__nbt_entries!($compound $($($rest)*)?);
    };

    ($compound:ident $key:tt : $value:expr $(, $($rest:tt)*)?) => {
        $compound.put($key, $crate::__nbt_value!($value));
        $crate::__nbt_entries!($compound $($($rest)*)?);
    };
}

#[doc(hidden)]
pub fn list_literal(values: Vec<crate::Value>) -> crate::List {
    match crate::List::from_values(values) {
        Ok(list) => list,
        Err(e) => panic!("nbt! list literal: {}", e),
    }
}
