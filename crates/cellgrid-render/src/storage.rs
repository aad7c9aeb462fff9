#![forbid(unsafe_code)]

//! Cell storage backends for [`Buffer`](crate::buffer::Buffer).
//!
//! A buffer either owns its cells ([`OwnedCells`]) or is a view over a
//! terminal backend's live screen ([`SurfaceCells`]). Both sit behind
//! [`CellStorage`], so drawing code is written once.
//!
//! # Invariants
//!
//! 1. `cells().len() == width * height` for the `(width, height)` returned by
//!    `size()` at the same moment.
//! 2. A surface view never caches the backend's size or slice; every call
//!    re-queries the backend, so a backend-driven resize is observed on the
//!    next operation.

use crate::cell::Cell;

/// Storage capability used by [`Buffer`](crate::buffer::Buffer).
pub trait CellStorage {
    /// Current logical size as `(width, height)`.
    fn size(&self) -> (u16, u16);

    /// All cells in row-major order.
    fn cells(&self) -> &[Cell];

    /// All cells in row-major order, mutably.
    fn cells_mut(&mut self) -> &mut [Cell];

    /// Change the logical size. Cell contents are unspecified afterwards.
    fn resize(&mut self, width: u16, height: u16);

    /// Number of cells.
    #[inline]
    fn len(&self) -> usize {
        self.cells().len()
    }

    /// Whether the storage holds no cells.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cells owned outright by the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedCells {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl OwnedCells {
    /// Allocate `width * height` blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    /// Allocated capacity in cells.
    ///
    /// Resizes that fit in this capacity do not reallocate.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.capacity()
    }
}

impl CellStorage for OwnedCells {
    #[inline]
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    #[inline]
    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn resize(&mut self, width: u16, height: u16) {
        let len = width as usize * height as usize;
        if len <= self.cells.capacity() {
            // Reuse the allocation; whatever was there is left as-is.
            self.cells.resize(len, Cell::BLANK);
        } else {
            // Fresh allocation, old contents are not copied.
            self.cells = vec![Cell::BLANK; len];
        }
        self.width = width;
        self.height = height;
    }
}

/// A terminal backend's live screen surface.
///
/// Implementors own the storage. They must keep
/// `surface_cells().len() == width * height` for the size reported by
/// `surface_size()`, and may swap their storage on resize.
pub trait BackendSurface {
    /// Current surface size as `(width, height)`.
    fn surface_size(&self) -> (u16, u16);

    /// Current surface cells in row-major order.
    fn surface_cells(&self) -> &[Cell];

    /// Current surface cells in row-major order, mutably.
    fn surface_cells_mut(&mut self) -> &mut [Cell];

    /// Resize the surface. Contents are unspecified afterwards.
    fn resize_surface(&mut self, width: u16, height: u16);
}

/// Non-owning view over a [`BackendSurface`].
///
/// The view holds a mutable borrow of the backend, so it cannot outlive the
/// backend's session and nothing else can resize the backend while a
/// buffer is bound to it. Size and storage are fetched from the backend on
/// every call.
#[derive(Debug)]
pub struct SurfaceCells<'a, B: BackendSurface + ?Sized> {
    backend: &'a mut B,
}

impl<'a, B: BackendSurface + ?Sized> SurfaceCells<'a, B> {
    /// Bind to `backend`.
    pub fn new(backend: &'a mut B) -> Self {
        Self { backend }
    }

    /// The backend this view is bound to.
    pub fn backend(&self) -> &B {
        &*self.backend
    }

    /// The backend this view is bound to, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut *self.backend
    }
}

impl<B: BackendSurface + ?Sized> CellStorage for SurfaceCells<'_, B> {
    #[inline]
    fn size(&self) -> (u16, u16) {
        self.backend.surface_size()
    }

    #[inline]
    fn cells(&self) -> &[Cell] {
        let cells = self.backend.surface_cells();
        debug_assert_eq!(cells.len(), surface_area(self.backend.surface_size()));
        cells
    }

    #[inline]
    fn cells_mut(&mut self) -> &mut [Cell] {
        let expected = surface_area(self.backend.surface_size());
        let cells = self.backend.surface_cells_mut();
        debug_assert_eq!(cells.len(), expected);
        cells
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.backend.resize_surface(width, height);
    }
}

#[inline]
fn surface_area((width, height): (u16, u16)) -> usize {
    width as usize * height as usize
}
