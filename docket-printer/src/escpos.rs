//! Raw ESC/POS byte assembly

use crate::encoding::{convert_to_codepage, text_width};

/// Accumulates commands and UTF-8 text for one print job
///
/// Text stays UTF-8 until [`EscPosBuilder::build`] re-encodes it for the
/// printer's Windows-1252 table.
pub struct EscPosBuilder {
    buf: Vec<u8>,
    width: usize,
}

impl EscPosBuilder {
    /// `width` in characters: 32 on 58mm paper, 42 or 48 on 80mm
    pub fn new(width: usize) -> Self {
        let mut buf = Vec::with_capacity(1024);
        buf.extend_from_slice(&[0x1B, 0x40]); // ESC @
        Self { buf, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }


    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.buf.push(b'\n');
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push(b'\n');
        self
    }

    /// Print and feed n lines (ESC d n)
    pub fn feed(&mut self, lines: u8) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x64, lines]);
        self
    }


    pub fn center(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x01]);
        self
    }

    pub fn left(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x00]);
        self
    }

    pub fn right(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x02]);
        self
    }


    pub fn bold(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x45, 0x01]);
        self
    }

    pub fn bold_off(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x45, 0x00]);
        self
    }

    /// Double width and height (GS ! 0x11)
    pub fn double_size(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x21, 0x11]);
        self
    }

    /// Double height only; keeps the column count intact
    pub fn double_height(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x21, 0x01]);
        self
    }

    pub fn reset_size(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x21, 0x00]);
        self
    }


    pub fn sep_double(&mut self) -> &mut Self {
        self.line(&"=".repeat(self.width))
    }

    pub fn sep_single(&mut self) -> &mut Self {
        self.line(&"-".repeat(self.width))
    }


    /// `left` flush left, `right` flush right; a single space when they don't fit
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let gap = self
            .width
            .checked_sub(text_width(left) + text_width(right))
            .filter(|gap| *gap > 0)
            .unwrap_or(1);
        self.text(left).text(&" ".repeat(gap)).line(right)
    }


    /// Full cut after feeding n lines (GS V 66 n)
    pub fn cut_feed(&mut self, lines: u8) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x56, 0x42, lines]);
        self
    }


    /// Finish the job with text re-encoded for the printer
    pub fn build(self) -> Vec<u8> {
        convert_to_codepage(&self.buf)
    }

    /// Finish without re-encoding; text stays UTF-8
    pub fn build_raw(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new(42)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_starts_with_init() {
        let mut b = EscPosBuilder::new(32);
        b.center().double_size().line("DOCKET").reset_size().left();

        let data = b.build_raw();
        assert_eq!(&data[..2], &[0x1B, 0x40]);
        assert!(data.windows(3).any(|w| w == [0x1D, 0x21, 0x11]));
    }

    #[test]
    fn test_line_lr_fills_width() {
        let mut b = EscPosBuilder::new(20);
        b.line_lr("Total", "150.00");

        let data = b.build_raw();
        let s = String::from_utf8_lossy(&data[2..]);
        assert_eq!(s, "Total         150.00\n");
    }

    #[test]
    fn test_line_lr_overflow() {
        let mut b = EscPosBuilder::new(8);
        b.line_lr("Butter Chicken", "x5");

        let data = b.build_raw();
        let s = String::from_utf8_lossy(&data[2..]);
        assert_eq!(s, "Butter Chicken x5\n");
    }

    #[test]
    fn test_separators() {
        let mut b = EscPosBuilder::new(10);
        b.sep_double().sep_single();

        let s = String::from_utf8_lossy(&b.build_raw()).to_string();
        assert!(s.contains("==========\n"));
        assert!(s.contains("----------\n"));
    }

    #[test]
    fn test_build_encodes_text() {
        let mut b = EscPosBuilder::new(10);
        b.line("Café");

        let data = b.build();
        // ESC t 16, ESC @, ESC t 16, then text
        assert_eq!(&data[..8], &[0x1B, 0x74, 16, 0x1B, 0x40, 0x1B, 0x74, 16]);
        assert_eq!(&data[8..], &[b'C', b'a', b'f', 0xE9, b'\n']);
    }
}
