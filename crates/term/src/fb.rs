//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(226, 232, 240), Rgb::new(15, 23, 42))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Box-drawing glyph set for [`FrameBuffer::frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGlyphs {
    pub horizontal: char,
    pub vertical: char,
    pub corners: [char; 4],
}

impl BoxGlyphs {
    pub const LIGHT: BoxGlyphs = BoxGlyphs {
        horizontal: '─',
        vertical: '│',
        corners: ['┌', '┐', '└', '┘'],
    };

    pub const DASHED: BoxGlyphs = BoxGlyphs {
        horizontal: '╌',
        vertical: '╎',
        corners: ['┌', '┐', '└', '┘'],
    };
}

/// 2D grid of styled character cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, reusing the allocation. Contents are reset.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    /// One row of cells; empty when `y` is out of range.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).get(x as usize).copied()
    }

    /// Write a cell; out-of-range writes are clipped.
    pub fn set(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if x < self.width && y < self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.cells[i] = Cell { ch, style };
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        for row in y..y.saturating_add(h) {
            for col in x..x.saturating_add(w) {
                self.set(col, row, ' ', style);
            }
        }
    }

    /// Write `text` starting at `(x, y)`, returning the column after it.
    pub fn text(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            self.set(col, y, ch, style);
            col = col.saturating_add(1);
        }
        col
    }

    /// Write `text` centered within `[x, x + w)`.
    pub fn text_centered(&mut self, x: u16, y: u16, w: u16, text: &str, style: CellStyle) {
        let len = text.chars().count() as u16;
        let offset = w.saturating_sub(len) / 2;
        self.text(x + offset, y, text, style);
    }

    /// Write `text` right-aligned so it ends just before `x_end`.
    pub fn text_right(&mut self, x_end: u16, y: u16, text: &str, style: CellStyle) {
        let len = text.chars().count() as u16;
        self.text(x_end.saturating_sub(len), y, text, style);
    }

    pub fn hline(&mut self, x: u16, y: u16, w: u16, ch: char, style: CellStyle) {
        for col in x..x.saturating_add(w) {
            self.set(col, y, ch, style);
        }
    }

    /// Draw a box outline; boxes smaller than 2x2 are skipped.
    pub fn frame(&mut self, x: u16, y: u16, w: u16, h: u16, glyphs: BoxGlyphs, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        self.hline(x + 1, y, w - 2, glyphs.horizontal, style);
        self.hline(x + 1, bottom, w - 2, glyphs.horizontal, style);
        for row in y + 1..bottom {
            self.set(x, row, glyphs.vertical, style);
            self.set(right, row, glyphs.vertical, style);
        }
        let [tl, tr, bl, br] = glyphs.corners;
        self.set(x, y, tl, style);
        self.set(right, y, tr, style);
        self.set(x, bottom, bl, style);
        self.set(right, bottom, br, style);
    }

    /// Row text with trailing blanks removed (test helper for views).
    pub fn row_text(&self, y: u16) -> String {
        let s: String = self.row(y).iter().map(|c| c.ch).collect();
        s.trim_end().to_string()
    }

    /// Whether any row contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_clipped() {
        let mut fb = FrameBuffer::new(4, 2);
        let end = fb.text(2, 0, "abcd", CellStyle::default());
        assert_eq!(end, 6);
        assert_eq!(fb.row_text(0), "  ab");
        fb.set(10, 10, 'x', CellStyle::default());
        assert_eq!(fb.get(10, 10), None);
    }

    #[test]
    fn centered_and_right_aligned_text() {
        let mut fb = FrameBuffer::new(10, 2);
        fb.text_centered(0, 0, 10, "ab", CellStyle::default());
        assert_eq!(fb.row_text(0), "    ab");
        fb.text_right(10, 1, "xyz", CellStyle::default());
        assert_eq!(fb.row_text(1), "       xyz");
    }

    #[test]
    fn frame_corners() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.frame(0, 0, 4, 3, BoxGlyphs::LIGHT, CellStyle::default());
        assert_eq!(fb.row_text(0), "┌──┐");
        assert_eq!(fb.row_text(1), "│  │");
        assert_eq!(fb.row_text(2), "└──┘");
    }

    #[test]
    fn resize_resets_contents() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.text(0, 0, "hi", CellStyle::default());
        fb.resize(3, 2);
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.row(1).len(), 3);
        assert!(!fb.contains_text("hi"));
    }
}
