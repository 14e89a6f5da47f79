//! Top-down drawing surface that turns text runs and rules into PDF content
//! operations, breaking onto a new page when the cursor reaches the bottom
//! margin.

use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

use crate::layout::{get_metrics, PageConfig, Rgb, TextStyle};
use crate::render::encoding::encode_win_ansi;

/// Baseline offset below the top of a line, as a fraction of the font size.
const ASCENT: f32 = 0.8;
/// Distance of the underline below the baseline, as a fraction of the font size.
const UNDERLINE_OFFSET: f32 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Clickable region on a page, in PDF user space (`[x1, y1, x2, y2]`).
#[derive(Debug, Clone, PartialEq)]
pub struct LinkArea {
    pub rect: [f32; 4],
    pub uri: String,
}

/// Everything drawn on a single page.
#[derive(Debug, Default)]
pub struct PageDraft {
    pub operations: Vec<Operation>,
    pub links: Vec<LinkArea>,
}

pub struct PdfCanvas<'a> {
    config: &'a PageConfig,
    finished: Vec<PageDraft>,
    current: PageDraft,
    /// Distance of the next line's top edge from the top of the page.
    cursor_y: f32,
}

impl<'a> PdfCanvas<'a> {
    pub fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            finished: Vec::new(),
            current: PageDraft::default(),
            cursor_y: config.margin_pt,
        }
    }

    #[cfg(test)]
    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    #[cfg(test)]
    pub fn page_count(&self) -> usize {
        self.finished.len() + 1
    }

    /// Height of one line of text in the given style.
    pub fn line_advance(&self, style: &TextStyle) -> f32 {
        style.size_pt * self.config.line_height
    }

    /// Closes the current page and moves the cursor to the top of a fresh one.
    pub fn new_page(&mut self) {
        let done = std::mem::take(&mut self.current);
        self.finished.push(done);
        self.cursor_y = self.config.margin_pt;
    }

    /// Starts a new page unless `height` still fits above the bottom margin.
    /// A page that is still empty is never skipped.
    pub fn ensure_room(&mut self, height: f32) {
        let at_top = self.cursor_y <= self.config.margin_pt;
        if !at_top && self.cursor_y + height > self.config.bottom_limit_pt() {
            self.new_page();
        }
    }

    /// Advances the cursor by `lines` line heights of `style`.
    pub fn move_down(&mut self, lines: f32, style: &TextStyle) {
        self.cursor_y += lines * self.line_advance(style);
    }

    /// Draws wrapped text and returns the number of lines it occupied.
    pub fn text(&mut self, text: &str, style: &TextStyle, align: Align) -> usize {
        self.draw_lines(text, style, align, None)
    }

    /// Draws wrapped text and makes every line a link to `uri`.
    pub fn link(&mut self, text: &str, uri: &str, style: &TextStyle) -> usize {
        self.draw_lines(text, style, Align::Left, Some(uri))
    }

    /// Full-width horizontal rule at the cursor. Does not move the cursor.
    pub fn rule(&mut self, line_width: f32, color: Rgb) {
        let y = self.pdf_y(self.cursor_y);
        let x1 = self.config.margin_pt;
        let x2 = self.config.page_width_pt - self.config.margin_pt;
        self.current.operations.extend(stroke_line(line_width, color, (x1, y), (x2, y)));
    }

    pub fn into_pages(mut self) -> Vec<PageDraft> {
        self.finished.push(self.current);
        self.finished
    }

    fn draw_lines(&mut self, text: &str, style: &TextStyle, align: Align, uri: Option<&str>) -> usize {
        let metrics = get_metrics(style.font);
        let text_width = self.config.text_width_pt();
        let lines = metrics.wrap(text, style.size_pt, text_width);
        let advance = self.line_advance(style);

        for line in &lines {
            self.ensure_room(advance);

            if !line.is_empty() {
                let width = metrics.width_pt(line, style.size_pt);
                let x = match align {
                    Align::Left => self.config.margin_pt,
                    Align::Center => self.config.margin_pt + ((text_width - width).max(0.0) / 2.0),
                };
                let baseline = self.pdf_y(self.cursor_y + style.size_pt * ASCENT);

                self.current.operations.extend(show_text(line, style, x, baseline));

                if style.underline {
                    let y = baseline - style.size_pt * UNDERLINE_OFFSET;
                    let thickness = (style.size_pt / 18.0).max(0.5);
                    self.current
                        .operations
                        .extend(stroke_line(thickness, style.color, (x, y), (x + width, y)));
                }

                if let Some(uri) = uri {
                    self.current.links.push(LinkArea {
                        rect: [
                            x,
                            baseline - style.size_pt * 0.25,
                            x + width,
                            baseline + style.size_pt * ASCENT,
                        ],
                        uri: uri.to_string(),
                    });
                }
            }

            self.cursor_y += advance;
        }

        lines.len()
    }

    /// Converts a top-origin y coordinate into PDF user space.
    fn pdf_y(&self, top_y: f32) -> f32 {
        self.config.page_height_pt - top_y
    }
}

fn show_text(line: &str, style: &TextStyle, x: f32, baseline: f32) -> Vec<Operation> {
    let Rgb(r, g, b) = style.color;
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![style.font.resource_name().into(), style.size_pt.into()],
        ),
        Operation::new("rg", vec![r.into(), g.into(), b.into()]),
        Operation::new("Td", vec![x.into(), baseline.into()]),
        Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(line), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

fn stroke_line(line_width: f32, color: Rgb, from: (f32, f32), to: (f32, f32)) -> Vec<Operation> {
    let Rgb(r, g, b) = color;
    vec![
        Operation::new("q", vec![]),
        Operation::new("w", vec![line_width.into()]),
        Operation::new("RG", vec![r.into(), g.into(), b.into()]),
        Operation::new("m", vec![from.0.into(), from.1.into()]),
        Operation::new("l", vec![to.0.into(), to.1.into()]),
        Operation::new("S", vec![]),
        Operation::new("Q", vec![]),
    ]
}
