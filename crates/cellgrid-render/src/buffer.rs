#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is a 2D grid of [`Cell`]s representing the terminal display.
//! It either owns its cells or is bound to a backend's live screen surface
//! (see [`crate::storage`]); drawing code is the same for both.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Every public write path clips against [`Buffer::bounds`] first; raw
//!    row offsets are only computed from an already-clipped rectangle.
//! 3. After [`Buffer::resize`], cell contents are unspecified until redrawn.

use crate::cell::Cell;
use crate::storage::{BackendSurface, CellStorage, OwnedCells, SurfaceCells};
use cellgrid_core::geometry::Rect;

/// A 2D grid of terminal cells.
///
/// # Example
///
/// ```
/// use cellgrid_core::geometry::Rect;
/// use cellgrid_render::buffer::Buffer;
/// use cellgrid_render::cell::Cell;
///
/// let mut buffer = Buffer::new(80, 24);
/// buffer.fill(Rect::new(0, 0, 80, 1), Cell::from_char('='));
/// assert_eq!(buffer.get(79, 0).map(|c| c.ch), Some('='));
/// ```
#[derive(Debug, Clone)]
pub struct Buffer<S: CellStorage = OwnedCells> {
    storage: S,
}

impl Buffer {
    /// Create a buffer that owns `width * height` blank cells.
    ///
    /// Zero dimensions are allowed and give an empty buffer; every drawing
    /// operation on it is a no-op.
    pub fn new(width: u16, height: u16) -> Self {
        Self::from_storage(OwnedCells::new(width, height))
    }
}

impl<'a, B: BackendSurface + ?Sized> Buffer<SurfaceCells<'a, B>> {
    /// Bind a buffer to a backend's live screen surface.
    ///
    /// The backend keeps ownership of the cells. The binding borrows it for
    /// `'a`, which ends no later than the backend itself (and its terminal
    /// session). Dimensions and storage are re-read from the backend on
    /// every operation.
    pub fn bind(backend: &'a mut B) -> Self {
        Self::from_storage(SurfaceCells::new(backend))
    }

    /// The bound backend.
    pub fn backend(&self) -> &B {
        self.storage.backend()
    }
}

impl<S: CellStorage> Buffer<S> {
    /// Wrap an existing storage.
    pub fn from_storage(storage: S) -> Self {
        Self { storage }
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Buffer width in cells.
    #[inline]
    pub fn width(&self) -> u16 {
        self.storage.size().0
    }

    /// Buffer height in cells.
    #[inline]
    pub fn height(&self) -> u16 {
        self.storage.size().1
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if the buffer has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Bounding rect of the entire buffer: `{0, 0, width, height}`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        let (width, height) = self.storage.size();
        Rect::from_size(width, height)
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        let (width, height) = self.storage.size();
        if x < width && y < height {
            Some(y as usize * width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        let idx = self.index(x, y)?;
        self.storage.cells().get(idx)
    }

    /// Get a mutable reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        let idx = self.index(x, y)?;
        self.storage.cells_mut().get_mut(idx)
    }

    /// Set the cell at (x, y). Does nothing if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Fill the part of `dest` that lies inside the buffer with `proto`.
    ///
    /// Cells outside `dest ∩ bounds()` are untouched. An empty intersection
    /// is a no-op.
    pub fn fill(&mut self, dest: Rect, proto: Cell) {
        let clipped = dest.intersection(&self.bounds());
        if clipped.is_empty() {
            return;
        }
        crate::trace!(
            x = clipped.x,
            y = clipped.y,
            width = clipped.width,
            height = clipped.height,
            "fill"
        );
        self.fill_clipped(clipped, proto);
    }

    /// Row writer behind [`fill`](Self::fill). `dest` must already be
    /// clipped to the buffer bounds.
    fn fill_clipped(&mut self, dest: Rect, proto: Cell) {
        debug_assert_eq!(dest, dest.intersection(&self.bounds()));
        let stride = self.width() as usize;
        let cells = self.storage.cells_mut();
        for y in dest.y..dest.bottom() {
            let start = y as usize * stride + dest.x as usize;
            cells[start..start + dest.width as usize].fill(proto);
        }
    }

    /// Change the buffer dimensions.
    ///
    /// Owned storage reuses its allocation when `width * height` fits in the
    /// current capacity and allocates a fresh one otherwise. Contents are
    /// not migrated: every cell is unspecified until redrawn.
    pub fn resize(&mut self, width: u16, height: u16) {
        crate::debug!(
            from_width = self.width(),
            from_height = self.height(),
            width,
            height,
            "buffer resize"
        );
        self.storage.resize(width, height);
    }

    /// Reset all cells to [`Cell::BLANK`].
    pub fn clear(&mut self) {
        self.clear_with(Cell::BLANK);
    }

    /// Reset all cells to `cell`.
    pub fn clear_with(&mut self, cell: Cell) {
        self.storage.cells_mut().fill(cell);
    }

    /// Get raw access to the cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        self.storage.cells()
    }

    /// Get mutable raw access to the cell slice.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        self.storage.cells_mut()
    }

    /// Get the cells for a single row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        assert!(y < self.height(), "row {y} out of bounds");
        let width = self.width() as usize;
        let start = y as usize * width;
        &self.cells()[start..start + width]
    }

    /// Characters of row `y` collected into a `String`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_text(&self, y: u16) -> String {
        self.row_cells(y).iter().map(|c| c.ch).collect()
    }

    /// Check if two buffers have identical dimensions and content.
    pub fn content_eq<T: CellStorage>(&self, other: &Buffer<T>) -> bool {
        self.storage.size() == other.storage.size() && self.cells() == other.cells()
    }
}

impl<S: CellStorage, T: CellStorage> PartialEq<Buffer<T>> for Buffer<S> {
    fn eq(&self, other: &Buffer<T>) -> bool {
        self.content_eq(other)
    }
}

impl Eq for Buffer {}
