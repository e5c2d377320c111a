//! Framebuffer of glyphs for terminal rendering.
//!
//! A life board only ever needs a handful of looks, so cells carry a
//! [`Tone`] instead of full colors; the renderer owns the palette.

/// How a glyph should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    /// Dead cell or empty screen
    #[default]
    Blank,
    /// Living cell
    Alive,
    /// Cursor over a dead cell
    Cursor,
    /// Cursor over a living cell
    CursorAlive,
    /// Status line text
    Status,
    /// Highlighted status line text (mode, geometry)
    Accent,
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub tone: Tone,
}

impl Glyph {
    pub const fn new(ch: char, tone: Tone) -> Self {
        Self { ch, tone }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            tone: Tone::Blank,
        }
    }
}

/// 2D framebuffer of toned glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.glyphs.resize(len, Glyph::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    /// Write one glyph; out-of-bounds writes are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, tone: Tone) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = Glyph { ch, tone };
        }
    }

    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::default());
    }

    /// Write a string left to right, clipped at the right edge.
    ///
    /// Returns the column after the last character written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, tone: Tone) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put(cx, y, ch, tone);
            cx += 1;
        }
        cx
    }

    /// Write a decimal number without allocating.
    ///
    /// Returns the column after the last digit written.
    pub fn put_u64(&mut self, x: u16, y: u16, value: u64, tone: Tone) -> u16 {
        let mut digits = [0u8; 20];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            if cx >= self.width {
                break;
            }
            self.put(cx, y, d as char, tone);
            cx += 1;
        }
        cx
    }

    /// Text content of row `y`, for tests and debugging
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}
