//! Byte input is turned into text by a decoder, which takes a stream of bytes from an
//! underlying source and converts it into a stream of `char`s.
//!
//! The [DecoderSelector] implemented within this module is used to instantiate new `char`
//! iterators, based on different encodings. (Currently only ASCII and UTF-8 are supported).
use chisel_decoders::{ascii::AsciiDecoder, utf8::Utf8Decoder};
use std::io::{BufRead, BufReader};

/// Enumeration of different supported encoding types
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Ascii,
}

impl Encoding {
    /// Check that every byte sequence within `bytes` is valid for the encoding
    pub fn admits(&self, bytes: &[u8]) -> bool {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).is_ok(),
            Encoding::Ascii => bytes.is_ascii(),
        }
    }
}

/// A struct that is essentially a factory for creating new instances of [char] iterators,
/// based on a specified encoding type
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct DecoderSelector {}

impl DecoderSelector {
    /// Create and return an instance of a given byte decoder / char iterator based on a specific
    /// encoding
    pub fn new_decoder<'a, Buffer: BufRead>(
        &'a self,
        buffer: &'a mut Buffer,
        encoding: Encoding,
    ) -> Box<dyn Iterator<Item = char> + 'a> {
        match encoding {
            Encoding::Ascii => Box::new(AsciiDecoder::new(buffer)),
            Encoding::Utf8 => Box::new(Utf8Decoder::new(buffer)),
        }
    }

    /// Decode the entire contents of a buffer into a [String]
    pub fn decode_all<Buffer: BufRead>(&self, buffer: &mut Buffer, encoding: Encoding) -> String {
        self.new_decoder(buffer, encoding).collect()
    }

    /// Decode a complete slice of bytes, or `None` if the slice isn't valid for the encoding.
    /// Bytes are checked before they reach the decoder, and the decoded text must account for
    /// every input byte.
    pub fn decode_bytes(&self, bytes: &[u8], encoding: Encoding) -> Option<String> {
        if !encoding.admits(bytes) {
            return None;
        }
        let mut reader = BufReader::new(bytes);
        let decoded = self.decode_all(&mut reader, encoding);
        (decoded.len() == bytes.len()).then_some(decoded)
    }
}
