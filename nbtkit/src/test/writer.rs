use std::io::{self, Write};

use crate::{
    error::{ErrorKind, Result},
    test::builder::Builder,
    from_reader_with_opts, to_bytes, to_writer_with_opts, ByteArray, Compound, Endian, IntArray,
    List, ReadOpts, Tag, Value, WriteOpts, Writer,
};

#[test]
fn matches_builder_layout() -> Result<()> {
    let mut root = Compound::new();
    root.put("b", 1_i8);
    root.put("ints", IntArray::from([1, 2]));
    root.put("list", List::of::<i16>([3]));
    root.put("s", "hi");

    // Keys are written in sorted order.
    let expected = Builder::new()
        .start_compound("root")
        .byte("b", 1)
        .int_array("ints", &[1, 2])
        .start_list("list", Tag::Short, 1)
        .short_payload(3)
        .string("s", "hi")
        .end_compound()
        .build();

    assert_eq!(to_bytes("root", &Value::Compound(root))?, expected);
    Ok(())
}

#[test]
fn scalar_root() -> Result<()> {
    let bytes = to_bytes("d", &Value::Double(0.5))?;
    assert_eq!(bytes, Builder::new().double("d", 0.5).build());
    Ok(())
}

#[test]
fn untyped_empty_list_written_as_list_of_end() -> Result<()> {
    let bytes = to_bytes("", &Value::List(List::new()))?;
    assert_eq!(bytes, [9, 0, 0, 0, 0, 0, 0, 0]);
    Ok(())
}

#[test]
fn typed_empty_list_keeps_type() -> Result<()> {
    let bytes = to_bytes("", &Value::List(List::with_type(Tag::Long)))?;
    assert_eq!(bytes, [9, 0, 0, 4, 0, 0, 0, 0]);
    Ok(())
}

#[test]
fn null_values_cannot_be_written() {
    assert_eq!(
        to_bytes("", &Value::Null).unwrap_err().kind(),
        ErrorKind::Cast
    );

    let mut root = Compound::new();
    root.slot("never assigned");
    let err = to_bytes("", &Value::Compound(root)).unwrap_err();
    assert!(err.is_cast());
}

#[test]
fn list_element_swapped_through_at_mut_is_rejected() {
    let mut list = List::of::<i32>([1, 2]);
    *list.at_mut(1).unwrap() = Value::Byte(2);

    let err = to_bytes("", &Value::List(list)).unwrap_err();
    assert!(err.is_cast());
}

#[test]
fn string_too_long() {
    let long = "a".repeat(u16::MAX as usize + 1);
    let err = to_bytes("", &Value::String(long)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Length);

    let err = to_bytes(&"k".repeat(70_000), &Value::Int(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Length);

    let longest = "a".repeat(u16::MAX as usize);
    assert!(to_bytes("", &Value::String(longest)).is_ok());
}

#[test]
fn little_endian() -> Result<()> {
    let mut out = vec![];
    to_writer_with_opts(
        &mut out,
        "x",
        &Value::Int(1),
        WriteOpts::new().endian(Endian::Little),
    )?;
    assert_eq!(out, [3, 1, 0, b'x', 1, 0, 0, 0]);
    Ok(())
}

#[test]
fn little_endian_containers() -> Result<()> {
    let mut root = Compound::new();
    root.put("heights", IntArray::from([1, -2, 300]));
    root.put("name", "hé");
    root.put("pos", List::of::<i16>([-1, 0x0102]));

    let mut out = vec![];
    to_writer_with_opts(
        &mut out,
        "level",
        &Value::Compound(root),
        WriteOpts::new().endian(Endian::Little),
    )?;

    let expected = Builder::little()
        .start_compound("level")
        .int_array("heights", &[1, -2, 300])
        .string("name", "hé")
        .start_list("pos", Tag::Short, 2)
        .short_payload(-1)
        .short_payload(0x0102)
        .end_compound()
        .build();
    assert_eq!(out, expected);

    // The list header and elements, least significant byte first.
    let tail = [9, 3, 0, b'p', b'o', b's', 2, 2, 0, 0, 0, 0xff, 0xff, 2, 1, 0];
    assert!(out.ends_with(&tail));
    Ok(())
}

#[test]
fn depth_limit() -> Result<()> {
    let mut value = Value::Int(1);
    for _ in 0..600 {
        value = Value::List(List::from_values(vec![value])?);
    }

    let err = to_bytes("", &value).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Length);
    assert!(err.to_string().contains("max_depth"));

    let mut out = vec![];
    to_writer_with_opts(&mut out, "", &value, WriteOpts::new().max_depth(600))?;
    let opts = ReadOpts::new().max_depth(600);
    let (_, decoded) = from_reader_with_opts(out.as_slice(), opts)?;
    assert_eq!(decoded, value);
    Ok(())
}

#[test]
fn byte_array_payload() -> Result<()> {
    let mut writer = Writer::new(vec![]);
    writer.write_payload(&Value::ByteArray(ByteArray::from([-1, 2])))?;
    assert_eq!(writer.into_inner(), [0, 0, 0, 2, 0xff, 2]);
    Ok(())
}

#[test]
fn primitives() -> Result<()> {
    let mut writer = Writer::new(vec![]);
    writer.write_type(Tag::Short)?;
    writer.write_string("name")?;
    writer.write_num(300_i16)?;

    let expected = Builder::new()
        .tag(Tag::Short)
        .string_payload("name")
        .short_payload(300)
        .build();
    assert_eq!(writer.get_ref(), &expected);

    assert!(writer.write_type(Tag::Null).unwrap_err().is_cast());
    Ok(())
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_is_io_error() {
    let err = Writer::new(FailingSink)
        .write_document("", &Value::Int(1))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("disk on fire"));
}
