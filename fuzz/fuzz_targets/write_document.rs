#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtkit::{from_reader_with_opts, to_writer_with_opts, Compound, ReadOpts, Value, WriteOpts};

// Arbitrary trees hold no Null slots and no oversized strings or sequences,
// so with matching depth limits every one of them must survive a round trip.
const DEPTH: usize = usize::MAX;

fuzz_target!(|v: Value| {
    let mut root = Compound::new();
    root.put("root", v);
    let root = Value::Compound(root);

    let mut bytes = vec![];
    to_writer_with_opts(&mut bytes, "doc", &root, WriteOpts::new().max_depth(DEPTH)).unwrap();

    let opts = ReadOpts::new().max_depth(DEPTH);
    let (key, decoded) = from_reader_with_opts(bytes.as_slice(), opts).unwrap();
    assert_eq!(key, "doc");

    // Bytes rather than values, so NaN payloads compare equal.
    let mut again = vec![];
    to_writer_with_opts(&mut again, &key, &decoded, WriteOpts::new().max_depth(DEPTH)).unwrap();
    assert_eq!(again, bytes);
});
