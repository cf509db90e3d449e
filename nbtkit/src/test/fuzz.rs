use crate::{from_bytes, test::builder::Builder, to_bytes, Tag};

/// Inputs that once misbehaved under fuzzing.

#[test]
fn partial_input_in_name() {
    let input = Builder::new().start_compound("some long name").build();
    assert!(from_bytes(&input[0..3]).is_err());
}

#[test]
fn list_of_end() {
    let input = Builder::new()
        .start_compound("")
        .start_list("", Tag::End, 1)
        .tag(Tag::End)
        .end_compound()
        .build();

    assert!(from_bytes(&input).is_err());
}

#[test]
fn huge_byte_array_in_tiny_input() {
    let input = Builder::new()
        .start_compound("")
        .tag(Tag::ByteArray)
        .name("")
        .int_payload(9_999_999)
        .build();

    assert!(from_bytes(&input).is_err());
}

#[test]
fn deeply_nested_lists_do_not_overflow() {
    let mut input = Builder::new().tag(Tag::List).name("");
    for _ in 0..100_000 {
        input = input.tag(Tag::List).int_payload(1);
    }
    let input = input.build();

    let err = from_bytes(&input).unwrap_err();
    assert!(err.to_string().contains("max_depth"));
}

#[test]
fn nan_survives_reencoding() {
    let input = Builder::new()
        .start_compound("")
        .float("nan", f32::NAN)
        .end_compound()
        .build();

    let (key, value) = from_bytes(&input).unwrap();
    assert_eq!(to_bytes(&key, &value).unwrap(), input);
}
