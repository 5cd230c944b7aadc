#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_plain_ascii_is_utf8() {
    let decoded = decode_best(b"CODIGO,DESCRIPCION\n");
    assert_eq!(decoded.encoding, TextEncoding::Utf8);
    assert_eq!(decoded.text, "CODIGO,DESCRIPCION\n");
    assert_eq!(decoded.replacements, 0);
}

#[test]
fn test_utf8_accents_kept() {
    let decoded = decode_best("Código,Descripción".as_bytes());
    assert_eq!(decoded.encoding, TextEncoding::Utf8);
    assert_eq!(decoded.text, "Código,Descripción");
}

#[test]
fn test_utf8_bom_removed() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"NIT,NOMBRE");
    let decoded = decode_best(&bytes);
    assert_eq!(decoded.text, "NIT,NOMBRE");
}

#[test]
fn test_latin1_bytes_fall_back_to_windows_1252() {
    // "Dirección" with ó as the single byte 0xF3
    let bytes = b"Direcci\xF3n,Tel\xE9fono";
    let decoded = decode_best(bytes);
    assert_eq!(decoded.encoding, TextEncoding::Windows1252);
    assert_eq!(decoded.text, "Dirección,Teléfono");
    assert_eq!(decoded.replacements, 0);
}

#[test]
fn test_windows_1252_specific_bytes() {
    // 0x80 is the euro sign in windows-1252 but a C1 control in latin1
    let decoded = decode_best(b"\x80 45.000");
    assert_eq!(decoded.encoding, TextEncoding::Windows1252);
    assert_eq!(decoded.text, "€ 45.000");
}

#[test]
fn test_latin1_decoder_maps_bytes_directly() {
    assert_eq!(TextEncoding::Latin1.decode(b"\xD1\x80"), "Ñ\u{80}");
    assert_eq!(TextEncoding::Iso8859_1.decode(b"\xE1"), "á");
}

#[test]
fn test_picks_fewest_replacements() {
    // Only a utf8 candidate: best effort keeps the replacement count
    let decoded = decode_with(b"a\xFFb\xFE", &[TextEncoding::Utf8]);
    assert_eq!(decoded.encoding, TextEncoding::Utf8);
    assert_eq!(decoded.replacements, 2);
    assert_eq!(decoded.text, "a\u{FFFD}b\u{FFFD}");
}

#[test]
fn test_tie_prefers_earlier_candidate() {
    let decoded = decode_with(b"plain", &[TextEncoding::Latin1, TextEncoding::Utf8]);
    assert_eq!(decoded.encoding, TextEncoding::Latin1);
}

#[test]
fn test_empty_input() {
    let decoded = decode_best(b"");
    assert_eq!(decoded.text, "");
    assert_eq!(decoded.encoding, TextEncoding::Utf8);
}

#[test]
fn test_display_names() {
    assert_eq!(TextEncoding::Utf8.to_string(), "UTF-8");
    assert_eq!(TextEncoding::Windows1252.to_string(), "windows-1252");
}
