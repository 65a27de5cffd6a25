use glyphcast_core::types::Color;

/// One character cell of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCell {
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
    /// Hit distance, or infinity for sky.
    pub depth: f32,
}

impl Default for FrameCell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: Color::BLACK,
            bg: Color::BLACK,
            depth: f32::INFINITY,
        }
    }
}

/// Row-major grid of character cells produced by the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    cells: Vec<FrameCell>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![FrameCell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[FrameCell] {
        &self.cells
    }

    /// Cell at (x, y), None outside the frame.
    pub fn get(&self, x: usize, y: usize) -> Option<&FrameCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    pub fn set(&mut self, x: usize, y: usize, cell: FrameCell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    /// Reset every cell to blank sky.
    pub fn clear(&mut self) {
        self.cells.fill(FrameCell::default());
    }

    /// Glyphs only, one line per row.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width.max(1)) {
            text.extend(row.iter().map(|cell| cell.glyph));
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_blank() {
        let frame = Frame::new(4, 3);
        assert_eq!(frame.cells().len(), 12);
        assert!(frame.cells().iter().all(|c| *c == FrameCell::default()));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut frame = Frame::new(4, 3);
        let cell = FrameCell {
            glyph: '#',
            fg: Color::WHITE,
            bg: Color::BLACK,
            depth: 2.0,
        };
        frame.set(3, 2, cell);
        frame.set(4, 0, cell);
        assert_eq!(frame.get(3, 2), Some(&cell));
        assert_eq!(frame.get(4, 0), None);
        assert_eq!(frame.cells().iter().filter(|c| c.glyph == '#').count(), 1);

        frame.clear();
        assert_eq!(frame.get(3, 2), Some(&FrameCell::default()));
    }

    #[test]
    fn test_to_text_rows() {
        let mut frame = Frame::new(3, 2);
        frame.set(
            1,
            1,
            FrameCell {
                glyph: '~',
                ..FrameCell::default()
            },
        );
        assert_eq!(frame.to_text(), "   \n ~ \n");
    }
}
