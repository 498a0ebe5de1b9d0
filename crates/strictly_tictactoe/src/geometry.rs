//! Pixel-space rectangles.

/// Axis-aligned rectangle in pointer coordinates.
///
/// The origin is the top-left corner of the window; `x` grows to the right
/// and `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns true iff the point lies strictly inside the rectangle.
    ///
    /// Points on the border are outside: `x < px < x + w` and `y < py < y + h`.
    pub fn contains_strict(&self, px: u32, py: u32) -> bool {
        self.x < px && px < self.right() && self.y < py && py < self.bottom()
    }

    /// One past the right-most column.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// One past the bottom-most row.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Centre point, rounded towards the top-left.
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}
