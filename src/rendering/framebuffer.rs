/// Framebuffer for software rendering
/// A plain ARGB32 color buffer; the raster writes axis-aligned rectangles,
/// so the only primitives are clear and clipped rect fill.
pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    color: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color: vec![0; width * height],
        }
    }

    pub fn clear(&mut self, clear_color: u32) {
        self.color.fill(clear_color);
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.color.clear();
        self.color.resize(width * height, 0);
    }

    /// Fill a rectangle, clipped to the buffer bounds
    pub fn fill_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32, color: u32) {
        let x_start = (x0.max(0) as usize).min(self.width);
        let y_start = (y0.max(0) as usize).min(self.height);
        let x_end = ((x0 + w).max(0) as usize).min(self.width);
        let y_end = ((y0 + h).max(0) as usize).min(self.height);
        for y in y_start..y_end {
            let row = y * self.width;
            self.color[row + x_start..row + x_end].fill(color);
        }
    }

    #[inline]
    pub fn pixel_at(&self, x: usize, y: usize) -> u32 {
        debug_assert!(x < self.width && y < self.height);
        self.color[y * self.width + x]
    }

    /// Raw buffer for presenting to the window surface
    #[inline]
    pub fn buffer(&self) -> &[u32] {
        &self.color
    }
}
