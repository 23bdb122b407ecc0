//! WinAnsiEncoding for text shown with the standard Type1 fonts.
//!
//! Report text comes from arbitrary documents, so anything outside the
//! encoding is replaced with `?` rather than emitted as raw UTF-8 bytes.

/// Byte used for characters the encoding cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Encode text as WinAnsi bytes.
///
/// Returns the encoded bytes and the number of characters that had to be
/// replaced.
pub fn encode_win_ansi(text: &str) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(text.len());
    let mut replaced = 0;
    for ch in text.chars() {
        match win_ansi_byte(ch) {
            Some(b) => out.push(b),
            None => {
                out.push(REPLACEMENT);
                replaced += 1;
            },
        }
    }
    (out, replaced)
}

fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        0x09 => Some(b' '),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}
