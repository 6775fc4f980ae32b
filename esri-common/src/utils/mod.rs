// private sub-module defined in other files
mod byte_order_reader;
mod byte_order_writer;

// exports identifiers from private sub-modules in the current module namespace
pub use self::byte_order_reader::ByteOrderReader;
pub use self::byte_order_reader::Endianness;
pub use self::byte_order_writer::ByteOrderWriter;

/// Decodes a run of single-byte (ISO-8859-1) characters. Every byte value maps
/// to the Unicode scalar of the same number, so decoding never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encodes a string as single-byte (ISO-8859-1) characters. Characters outside
/// of the Latin-1 range are replaced with `?`.
pub fn encode_latin1(value: &str) -> Vec<u8> {
    value
        .chars()
        .map(|c| if (c as u32) <= 0xFF { c as u32 as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{decode_latin1, encode_latin1};

    #[test]
    fn test_latin1_round_trip() {
        let s = "Montr\u{e9}al";
        let bytes = encode_latin1(s);
        assert_eq!(bytes.len(), 8);
        assert_eq!(bytes[5], 0xE9);
        assert_eq!(decode_latin1(&bytes), s);
    }

    #[test]
    fn test_unmappable_chars() {
        assert_eq!(encode_latin1("a\u{4e2d}b"), b"a?b".to_vec());
    }
}
