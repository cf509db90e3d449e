use std::convert::TryFrom;

use crate::{Endian, ReadOpts, Tag, WriteOpts};

pub mod builder;

mod fuzz;
mod list;
mod writer;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(Tag::$tag.id(), Some($val));
            assert_eq!(Tag::try_from($val), Ok(Tag::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
    }

    assert_eq!(Tag::Null.id(), None);

    for value in 12..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn tag_display() {
    assert_eq!(Tag::Null.to_string(), "null");
    assert_eq!(Tag::Byte.to_string(), "byte");
    assert_eq!(Tag::IntArray.to_string(), "int_array");
}

#[test]
fn opts_defaults() {
    let opts = ReadOpts::default();
    assert_eq!(opts.endian, Endian::Big);
    assert_eq!(opts.max_seq_len, i32::MAX as usize);
    assert_eq!(opts.max_depth, 512);

    let opts = ReadOpts::new().endian(Endian::Little).max_depth(3);
    assert_eq!(opts.endian, Endian::Little);
    assert_eq!(opts.max_depth, 3);

    let opts = WriteOpts::new();
    assert_eq!(opts.endian, Endian::Big);
    assert_eq!(opts.max_depth, ReadOpts::new().max_depth);
}
