use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::PdfFont;

/// An RGB colour with components in 0.0..=1.0, as PDF `rg`/`RG` expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub f32, pub f32, pub f32);

/// Font, size and paint for one run of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: PdfFont,
    pub size_pt: f32,
    pub color: Rgb,
    pub underline: bool,
}

/// Page geometry and the résumé's typographic scale.
///
/// Coordinates handed to the canvas are measured from the top-left corner;
/// the canvas flips them into PDF user space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_pt: f32,
    /// Line advance as a multiple of the font size.
    pub line_height: f32,
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub heading: TextStyle,
    pub body: TextStyle,
    pub link: TextStyle,
    pub title_rule: (f32, Rgb),
    pub section_rule: (f32, Rgb),
}

impl PageConfig {
    /// Usable text width between the left and right margins.
    pub fn text_width_pt(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_pt
    }

    /// Lowest top-origin y coordinate that content may reach.
    pub fn bottom_limit_pt(&self) -> f32 {
        self.page_height_pt - self.margin_pt
    }
}

const BRAND_BLUE: Rgb = Rgb(0.0, 0.337, 0.702); // #0056b3
const HEADING_INK: Rgb = Rgb(0.133, 0.133, 0.133); // #222222
const BODY_INK: Rgb = Rgb(0.267, 0.267, 0.267); // #444444
const LINK_BLUE: Rgb = Rgb(0.0, 0.0, 1.0);
const RULE_GREY: Rgb = Rgb(0.867, 0.867, 0.867); // #dddddd

/// US letter (8.5" × 11") with 50pt margins on every side.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_pt: 612.0,
        page_height_pt: 792.0,
        margin_pt: 50.0,
        line_height: 1.15,
        title: TextStyle {
            font: PdfFont::HelveticaBold,
            size_pt: 28.0,
            color: BRAND_BLUE,
            underline: false,
        },
        subtitle: TextStyle {
            font: PdfFont::Helvetica,
            size_pt: 16.0,
            color: HEADING_INK,
            underline: false,
        },
        heading: TextStyle {
            font: PdfFont::HelveticaBold,
            size_pt: 16.0,
            color: HEADING_INK,
            underline: true,
        },
        body: TextStyle {
            font: PdfFont::Helvetica,
            size_pt: 14.0,
            color: BODY_INK,
            underline: false,
        },
        link: TextStyle {
            font: PdfFont::Helvetica,
            size_pt: 14.0,
            color: LINK_BLUE,
            underline: true,
        },
        title_rule: (2.0, BRAND_BLUE),
        section_rule: (1.0, RULE_GREY),
    }
}
