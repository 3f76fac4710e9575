//! Printer-agnostic docket document
//!
//! Renderers describe a docket as a list of [`DocketLine`]s once; the same
//! document can then be shown on screen as plain text or sent to a thermal
//! printer as ESC/POS.

use crate::encoding::{text_width, wrap_text};
use crate::escpos::EscPosBuilder;

/// One logical line of a docket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocketLine {
    /// Large centered heading
    Title(String),
    Centered(String),
    /// Left-aligned body text, word-wrapped
    Text(String),
    Bold(String),
    /// Double-height on paper; used for allergy and dietary warnings
    Emphasis(String),
    /// Label on the left, value flush right
    Pair(String, String),
    Separator(char),
    Blank,
}

/// A document made of [`DocketLine`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Docket {
    lines: Vec<DocketLine>,
}

impl Docket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[DocketLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: DocketLine) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn title(&mut self, s: impl Into<String>) -> &mut Self {
        self.push(DocketLine::Title(s.into()))
    }

    pub fn centered(&mut self, s: impl Into<String>) -> &mut Self {
        self.push(DocketLine::Centered(s.into()))
    }

    pub fn text(&mut self, s: impl Into<String>) -> &mut Self {
        self.push(DocketLine::Text(s.into()))
    }

    pub fn bold(&mut self, s: impl Into<String>) -> &mut Self {
        self.push(DocketLine::Bold(s.into()))
    }

    pub fn emphasis(&mut self, s: impl Into<String>) -> &mut Self {
        self.push(DocketLine::Emphasis(s.into()))
    }

    pub fn pair(&mut self, left: impl Into<String>, right: impl Into<String>) -> &mut Self {
        self.push(DocketLine::Pair(left.into(), right.into()))
    }

    pub fn sep_double(&mut self) -> &mut Self {
        self.push(DocketLine::Separator('='))
    }

    pub fn sep_single(&mut self) -> &mut Self {
        self.push(DocketLine::Separator('-'))
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(DocketLine::Blank)
    }

    /// Append every line of another docket
    pub fn extend(&mut self, other: Docket) -> &mut Self {
        self.lines.extend(other.lines);
        self
    }

    /// Render as plain text, `width` columns wide
    pub fn to_text(&self, width: usize) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                DocketLine::Title(s) | DocketLine::Centered(s) => {
                    for part in wrap_text(s, width) {
                        out.push_str(&center(&part, width));
                        out.push('\n');
                    }
                }
                DocketLine::Text(s) | DocketLine::Bold(s) | DocketLine::Emphasis(s) => {
                    for part in wrap_text(s, width) {
                        out.push_str(&part);
                        out.push('\n');
                    }
                }
                DocketLine::Pair(l, r) => {
                    out.push_str(&pair(l, r, width));
                    out.push('\n');
                }
                DocketLine::Separator(c) => {
                    out.extend(std::iter::repeat_n(*c, width));
                    out.push('\n');
                }
                DocketLine::Blank => out.push('\n'),
            }
        }
        out
    }

    /// Render as ESC/POS bytes (WPC1252 text), ending with feed and cut
    pub fn to_escpos(&self, width: usize) -> Vec<u8> {
        let mut b = EscPosBuilder::new(width);
        for line in &self.lines {
            match line {
                DocketLine::Title(s) => {
                    b.center().double_height().bold();
                    for part in wrap_text(s, width) {
                        b.line(&part);
                    }
                    b.bold_off().reset_size().left();
                }
                DocketLine::Centered(s) => {
                    b.center();
                    for part in wrap_text(s, width) {
                        b.line(&part);
                    }
                    b.left();
                }
                DocketLine::Text(s) => {
                    for part in wrap_text(s, width) {
                        b.line(&part);
                    }
                }
                DocketLine::Bold(s) => {
                    b.bold();
                    for part in wrap_text(s, width) {
                        b.line(&part);
                    }
                    b.bold_off();
                }
                DocketLine::Emphasis(s) => {
                    b.bold().double_height();
                    for part in wrap_text(s, width) {
                        b.line(&part);
                    }
                    b.reset_size().bold_off();
                }
                DocketLine::Pair(l, r) => {
                    b.line_lr(l, r);
                }
                DocketLine::Separator('=') => {
                    b.sep_double();
                }
                DocketLine::Separator('-') => {
                    b.sep_single();
                }
                DocketLine::Separator(c) => {
                    b.line(&c.to_string().repeat(width));
                }
                DocketLine::Blank => {
                    b.newline();
                }
            }
        }
        b.cut_feed(4);
        b.build()
    }
}

fn center(s: &str, width: usize) -> String {
    let w = text_width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat((width - w) / 2), s)
}

fn pair(left: &str, right: &str, width: usize) -> String {
    let lw = text_width(left);
    let rw = text_width(right);
    if lw + rw >= width {
        format!("{} {}", left, right)
    } else {
        format!("{}{}{}", left, " ".repeat(width - lw - rw), right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Docket {
        let mut d = Docket::new();
        d.title("PREP")
            .sep_double()
            .pair("Butter Chicken", "x5")
            .emphasis("ALLERGENS: dairy")
            .blank()
            .centered("thanks");
        d
    }

    #[test]
    fn test_to_text_layout() {
        let text = sample().to_text(20);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "        PREP");
        assert_eq!(lines[1], "=".repeat(20));
        assert_eq!(lines[2], "Butter Chicken    x5");
        assert_eq!(lines[3], "ALLERGENS: dairy");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "       thanks");
    }

    #[test]
    fn test_text_wraps_long_lines() {
        let mut d = Docket::new();
        d.text("Notes: please deliver to the side gate");
        let text = d.to_text(16);
        assert!(text.lines().all(|l| l.chars().count() <= 16));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_to_escpos_has_init_and_cut() {
        let bytes = sample().to_escpos(20);
        assert!(bytes.windows(2).any(|w| w == [0x1B, 0x40]));
        assert!(bytes.ends_with(&[0x1D, 0x56, 0x42, 4]));
        // The pair line survives encoding unchanged
        assert!(bytes.windows(20).any(|w| w == b"Butter Chicken    x5"));
    }

    #[test]
    fn test_extend() {
        let mut a = Docket::new();
        a.text("a");
        let mut b = Docket::new();
        b.text("b");
        a.extend(b);
        assert_eq!(a.lines().len(), 2);
    }
}
