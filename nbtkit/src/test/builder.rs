use crate::{Endian, Tag};

/// Hand assembles NBT bytes in either byte order. Nothing here checks that
/// the output is a valid document, so truncated and malformed input is as
/// easy to produce as good input.
pub struct Builder {
    endian: Endian,
    payload: Vec<u8>,
}

// Numbers go through the std `to_*_bytes` conversions rather than the crate's
// own endian codec, so the expected bytes do not depend on the code under test.
macro_rules! numbers {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(mut self, x: $ty) -> Self {
                match self.endian {
                    Endian::Big => self.payload.extend_from_slice(&x.to_be_bytes()),
                    Endian::Little => self.payload.extend_from_slice(&x.to_le_bytes()),
                }
                self
            }
        )*
    };
}

impl Builder {
    /// Big endian, as Java edition files are.
    pub fn new() -> Self {
        Self::with_endian(Endian::Big)
    }

    pub fn little() -> Self {
        Self::with_endian(Endian::Little)
    }

    pub fn with_endian(endian: Endian) -> Self {
        Builder {
            endian,
            payload: Vec::new(),
        }
    }

    numbers! {
        byte_payload: i8,
        short_payload: i16,
        int_payload: i32,
        long_payload: i64,
        float_payload: f32,
        double_payload: f64,
        str_len: u16,
    }

    pub fn tag(mut self, t: Tag) -> Self {
        self.payload.push(t.id().expect("null tag has no id"));
        self
    }

    /// A length prefix that need not match what follows it.
    pub fn raw_str_len(self, len: usize) -> Self {
        self.str_len(u16::try_from(len).expect("test given length beyond u16"))
    }

    /// Anything not worth a method of its own.
    pub fn raw_bytes(mut self, bs: &[u8]) -> Self {
        self.payload.extend_from_slice(bs);
        self
    }

    pub fn string_payload(self, s: &str) -> Self {
        self.raw_str_len(s.len()).raw_bytes(s.as_bytes())
    }

    pub fn name(self, name: &str) -> Self {
        self.string_payload(name)
    }

    /// Type byte and name of a named tag, ready for its payload.
    fn entry(self, t: Tag, name: &str) -> Self {
        self.tag(t).name(name)
    }

    pub fn start_compound(self, name: &str) -> Self {
        self.entry(Tag::Compound, name)
    }

    pub fn end_compound(self) -> Self {
        self.tag(Tag::End)
    }

    pub fn start_list(self, name: &str, element_tag: Tag, size: i32) -> Self {
        self.entry(Tag::List, name).list_header(element_tag, size)
    }

    /// Element type and count of a list whose own type byte and name, if it
    /// has any, are already written.
    pub fn list_header(self, element_tag: Tag, size: i32) -> Self {
        self.tag(element_tag).int_payload(size)
    }

    pub fn byte(self, name: &str, b: i8) -> Self {
        self.entry(Tag::Byte, name).byte_payload(b)
    }

    pub fn short(self, name: &str, n: i16) -> Self {
        self.entry(Tag::Short, name).short_payload(n)
    }

    pub fn int(self, name: &str, n: i32) -> Self {
        self.entry(Tag::Int, name).int_payload(n)
    }

    pub fn long(self, name: &str, n: i64) -> Self {
        self.entry(Tag::Long, name).long_payload(n)
    }

    pub fn float(self, name: &str, n: f32) -> Self {
        self.entry(Tag::Float, name).float_payload(n)
    }

    pub fn double(self, name: &str, n: f64) -> Self {
        self.entry(Tag::Double, name).double_payload(n)
    }

    pub fn string(self, name: &str, s: &str) -> Self {
        self.entry(Tag::String, name).string_payload(s)
    }

    pub fn byte_array(self, name: &str, bs: &[i8]) -> Self {
        let bytes: Vec<u8> = bs.iter().map(|&b| b as u8).collect();
        self.entry(Tag::ByteArray, name)
            .int_payload(seq_len(bs.len()))
            .raw_bytes(&bytes)
    }

    pub fn int_array(self, name: &str, arr: &[i32]) -> Self {
        let header = self.entry(Tag::IntArray, name).int_payload(seq_len(arr.len()));
        arr.iter().fold(header, |b, &i| b.int_payload(i))
    }

    pub fn build(self) -> Vec<u8> {
        self.payload
    }
}

fn seq_len(len: usize) -> i32 {
    i32::try_from(len).expect("test given length beyond i32")
}
