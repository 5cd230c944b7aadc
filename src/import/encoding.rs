use encoding_rs::{UTF_8, WINDOWS_1252};
use serde::Serialize;
use std::fmt;

use crate::config::ENCODING_CANDIDATES;

const REPLACEMENT: char = '\u{FFFD}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextEncoding {
    #[serde(rename = "UTF-8")]
    Utf8,
    #[serde(rename = "windows-1252")]
    Windows1252,
    #[serde(rename = "latin1")]
    Latin1,
    #[serde(rename = "ISO-8859-1")]
    Iso8859_1,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Windows1252 => "windows-1252",
            Self::Latin1 => "latin1",
            Self::Iso8859_1 => "ISO-8859-1",
        }
    }

    /// Decode `bytes`, substituting U+FFFD for anything malformed.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => UTF_8.decode_with_bom_removal(bytes).0.into_owned(),
            Self::Windows1252 => WINDOWS_1252
                .decode_without_bom_handling(bytes)
                .0
                .into_owned(),
            // encoding_rs treats the ISO-8859-1 label as windows-1252; the
            // real thing maps every byte to the code point of the same value.
            Self::Latin1 | Self::Iso8859_1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
    pub replacements: usize,
}

/// Decode with whichever candidate leaves the fewest replacement characters.
/// Ties go to the earlier candidate; a clean decode stops the search.
pub fn decode_best(bytes: &[u8]) -> DecodedText {
    decode_with(bytes, ENCODING_CANDIDATES)
}

pub(crate) fn decode_with(bytes: &[u8], candidates: &[TextEncoding]) -> DecodedText {
    let mut best: Option<DecodedText> = None;

    for &encoding in candidates {
        let text = encoding.decode(bytes);
        let replacements = text.chars().filter(|&c| c == REPLACEMENT).count();
        if replacements == 0 {
            return DecodedText {
                text,
                encoding,
                replacements,
            };
        }
        let improves = best
            .as_ref()
            .map_or(true, |b| replacements < b.replacements);
        if improves {
            best = Some(DecodedText {
                text,
                encoding,
                replacements,
            });
        }
    }

    best.unwrap_or_else(|| DecodedText {
        text: String::from_utf8_lossy(bytes).into_owned(),
        encoding: TextEncoding::Utf8,
        replacements: 0,
    })
}

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;
