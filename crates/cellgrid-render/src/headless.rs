#![forbid(unsafe_code)]

//! In-memory backend surface.
//!
//! [`HeadlessSurface`] stands in for a terminal backend in tests and for
//! off-screen rendering. Like a real backend it owns its cells and swaps its
//! storage on every resize, so a grid bound to it has to re-query the
//! surface instead of holding on to a stale slice or size.

use crate::cell::Cell;
use crate::storage::BackendSurface;

/// A backend surface that lives entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessSurface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    generation: u64,
}

impl HeadlessSurface {
    /// Create a blank surface.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
            generation: 0,
        }
    }

    /// Number of times the surface storage has been replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Characters of row `y` as a `String`, or `None` past the last row.
    pub fn row_text(&self, y: u16) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(
            self.cells[start..start + self.width as usize]
                .iter()
                .map(|c| c.ch)
                .collect(),
        )
    }
}

impl BackendSurface for HeadlessSurface {
    fn surface_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn surface_cells(&self) -> &[Cell] {
        &self.cells
    }

    fn surface_cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn resize_surface(&mut self, width: u16, height: u16) {
        self.cells = vec![Cell::BLANK; width as usize * height as usize];
        self.width = width;
        self.height = height;
        self.generation += 1;
        crate::trace!(width, height, generation = self.generation, "headless surface resized");
    }
}
