/// Encodes text for a standard-14 font declared with `/WinAnsiEncoding`.
///
/// Latin-1 maps straight through; the Windows-1252 extras in 0x80..=0x9F
/// (curly quotes, dashes, bullet, euro) are translated; anything else is `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\t' => b' ',
        c if (c as u32) < 0x20 => b' ',
        c if (c as u32) < 0x80 => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        c if (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(encode_win_ansi("Go, Rust, C++"), b"Go, Rust, C++".to_vec());
    }

    #[test]
    fn test_latin1_accents() {
        assert_eq!(encode_win_ansi("Zoë"), vec![b'Z', b'o', 0xEB]);
    }

    #[test]
    fn test_cp1252_punctuation() {
        assert_eq!(encode_win_ansi("a–b’"), vec![b'a', 0x96, b'b', 0x92]);
    }

    #[test]
    fn test_unmappable_becomes_question_mark() {
        assert_eq!(encode_win_ansi("🎓 Rust 漢"), b"? Rust ?".to_vec());
    }

    #[test]
    fn test_control_characters_become_spaces() {
        assert_eq!(encode_win_ansi("a\tb\u{7}c"), b"a b c".to_vec());
    }
}
