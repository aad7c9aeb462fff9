#![forbid(unsafe_code)]

//! cellgrid public facade crate.
//!
//! Re-exports the geometry, buffer, and label types from the internal
//! crates, defines the top-level [`Error`], and offers a small prelude.
//! The crossterm backend is behind the default `tty` feature.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use cellgrid_core::geometry::Rect;
#[cfg(not(target_arch = "wasm32"))]
pub use cellgrid_core::terminal_session::{SessionOptions, TerminalSession};

// --- Render re-exports -----------------------------------------------------

pub use cellgrid_render::buffer::Buffer;
pub use cellgrid_render::cell::{AttrColor, Attribute, Cell, StyleFlags};
pub use cellgrid_render::cursor::CharCursor;
pub use cellgrid_render::headless::HeadlessSurface;
pub use cellgrid_render::label::{Alignment, LabelParams};
pub use cellgrid_render::storage::{BackendSurface, CellStorage, OwnedCells, SurfaceCells};

// --- Backend re-exports ----------------------------------------------------

#[cfg(feature = "tty")]
pub use cellgrid_tty::{Screen, TerminalBackend};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for cellgrid apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure during terminal operations.
    Io(std::io::Error),
    /// Terminal error with message.
    Terminal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Terminal(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Terminal(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for cellgrid APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, Attribute, BackendSurface, Buffer, Cell, Error, LabelParams, Rect, Result,
        StyleFlags,
    };

    #[cfg(feature = "tty")]
    pub use crate::TerminalBackend;

    pub use crate::{core, render};
}

pub use cellgrid_core as core;
pub use cellgrid_render as render;
#[cfg(feature = "tty")]
pub use cellgrid_tty as tty;
