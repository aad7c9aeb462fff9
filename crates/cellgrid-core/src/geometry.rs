#![forbid(unsafe_code)]

//! Clipping geometry.
//!
//! Every drawing operation in `cellgrid-render` clips through
//! [`Rect::intersection`] before it touches cell storage, so malformed or
//! out-of-range rectangles degrade to an empty region instead of an error.

/// A half-open cell region `[x, x + width) × [y, y + height)`.
///
/// Origin is the top-left cell. Zero width or height is a valid, empty
/// region. Coordinates are unsigned: a destination that starts left of or
/// above the grid must be clipped by the caller before it becomes a `Rect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `{0, 0, width, height}`: the bounds of a grid of that size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// One past the last column. Saturates at `u16::MAX`.
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the last row. Saturates at `u16::MAX`.
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Same origin and width, new height. Labels use this to keep only the
    /// top row of their destination.
    #[inline]
    pub const fn with_height(self, height: u16) -> Self {
        Self { height, ..self }
    }

    /// Overlap of `self` and `clip`, or the all-zero rect when they share
    /// no cell.
    #[inline]
    pub fn intersection(&self, clip: &Rect) -> Rect {
        self.intersection_opt(clip).unwrap_or_default()
    }

    /// Overlap of `self` and `clip`, `None` when they share no cell.
    pub fn intersection_opt(&self, clip: &Rect) -> Option<Rect> {
        let left = self.x.max(clip.x);
        let top = self.y.max(clip.y);
        let right = self.right().min(clip.right());
        let bottom = self.bottom().min(clip.bottom());

        (left < right && top < bottom).then(|| Rect::new(left, top, right - left, bottom - top))
    }
}
