#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtkit::{from_bytes, from_reader_with_opts, to_bytes, ReadOpts};

fuzz_target!(|data: &[u8]| {
    let opts = ReadOpts::new().max_seq_len(100);
    if let Ok((key, value)) = from_reader_with_opts(data, opts) {
        let bs = to_bytes(&key, &value).unwrap();
        let (key2, value2) = from_bytes(&bs).unwrap();
        assert_eq!(key, key2);
        assert_eq!(bs, to_bytes(&key2, &value2).unwrap());
    }
});
