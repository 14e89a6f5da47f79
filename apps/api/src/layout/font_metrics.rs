//! Static font-metric tables for the two standard PDF fonts the résumé uses.
//!
//! Widths come from the Adobe AFM files for Helvetica and Helvetica-Bold and
//! are stored in em units (glyph width / 1000). All tables cover ASCII
//! 0x20..=0x7E (95 printable characters). Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font enum
// ────────────────────────────────────────────────────────────────────────────

/// Standard-14 fonts embedded by name (no font program is shipped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PdfFont {
    Helvetica,
    HelveticaBold,
}

impl PdfFont {
    pub const ALL: [PdfFont; 2] = [PdfFont::Helvetica, PdfFont::HelveticaBold];

    /// PostScript name written to the font dictionary's `BaseFont`.
    pub fn base_font(self) -> &'static str {
        match self {
            PdfFont::Helvetica => "Helvetica",
            PdfFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Key under the page resources' `Font` dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            PdfFont::Helvetica => "F1",
            PdfFont::HelveticaBold => "F2",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em units.
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Width of a string in points at the given font size.
    pub fn width_pt(&self, s: &str, font_size: f32) -> f32 {
        self.measure_str(s) * font_size
    }

    fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Greedy word-wrap of `text` into lines no wider than `max_width_pt`.
    ///
    /// Explicit newlines always start a new line and blank input lines are
    /// kept as empty strings. A single word wider than the line is broken
    /// between characters.
    pub fn wrap(&self, text: &str, font_size: f32, max_width_pt: f32) -> Vec<String> {
        let max_width = max_width_pt / font_size;
        let mut lines = Vec::new();

        for paragraph in text.lines() {
            let words: Vec<&str> = paragraph.split_whitespace().collect();
            if words.is_empty() {
                lines.push(String::new());
                continue;
            }

            let mut current = String::new();
            let mut current_width = 0.0_f32;

            for word in words {
                let word_w = self.measure_str(word);
                let space_w = if current.is_empty() { 0.0 } else { self.space_width };

                if !current.is_empty() && current_width + space_w + word_w > max_width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0.0;
                }

                if word_w > max_width {
                    // Hard-break an over-long word; the remainder stays on the open line.
                    for c in word.chars() {
                        let c_w = self.char_width(c);
                        if !current.is_empty() && current_width + c_w > max_width {
                            lines.push(std::mem::take(&mut current));
                            current_width = 0.0;
                        }
                        current.push(c);
                        current_width += c_w;
                    }
                    continue;
                }

                if !current.is_empty() {
                    current.push(' ');
                    current_width += self.space_width;
                }
                current.push_str(word);
                current_width += word_w;
            }
            lines.push(current);
        }

        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
    space_width: 0.278,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.611,
    space_width: 0.278,
};

/// Returns the static metric table for a given font.
pub fn get_metrics(font: PdfFont) -> &'static FontMetricTable {
    match font {
        PdfFont::Helvetica => &HELVETICA_TABLE,
        PdfFont::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(PdfFont::Helvetica).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(PdfFont::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(PdfFont::Helvetica);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Personal Information";
        assert!(
            get_metrics(PdfFont::HelveticaBold).measure_str(text)
                > get_metrics(PdfFont::Helvetica).measure_str(text)
        );
    }

    #[test]
    fn test_width_pt_scales_with_size() {
        let metrics = get_metrics(PdfFont::Helvetica);
        let w10 = metrics.width_pt("SmartResume", 10.0);
        let w20 = metrics.width_pt("SmartResume", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = get_metrics(PdfFont::Helvetica).wrap("Go, Rust, C++", 14.0, 512.0);
        assert_eq!(lines, vec!["Go, Rust, C++"]);
    }

    #[test]
    fn test_wrap_long_text_respects_width() {
        let metrics = get_metrics(PdfFont::Helvetica);
        let text = "Architected a distributed caching layer using consistent hashing ".repeat(6);
        let lines = metrics.wrap(&text, 14.0, 512.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.width_pt(line, 14.0) <= 512.0 + 1e-3, "line too wide: {line}");
        }
        assert_eq!(lines.join(" "), text.trim_end());
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        let lines = get_metrics(PdfFont::Helvetica).wrap("Acme Corp\n\nGlobex", 14.0, 512.0);
        assert_eq!(lines, vec!["Acme Corp", "", "Globex"]);
    }

    #[test]
    fn test_wrap_breaks_overlong_word() {
        let metrics = get_metrics(PdfFont::Helvetica);
        let url = format!("https://example.com/{}", "a".repeat(200));
        let lines = metrics.wrap(&url, 14.0, 200.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), url);
        for line in &lines {
            assert!(metrics.width_pt(line, 14.0) <= 200.0 + 1e-3);
        }
    }

    #[test]
    fn test_resource_names_are_distinct() {
        assert_ne!(
            PdfFont::Helvetica.resource_name(),
            PdfFont::HelveticaBold.resource_name()
        );
        assert_eq!(PdfFont::HelveticaBold.base_font(), "Helvetica-Bold");
    }
}
