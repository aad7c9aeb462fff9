#![forbid(unsafe_code)]

//! Render kernel: cells, cell storage, buffers, and single-line labels.
//!
//! Nothing in this crate performs I/O. A [`buffer::Buffer`] is drawn into
//! with [`buffer::Buffer::fill`] and [`buffer::Buffer::draw_label`]; a backend
//! owning the physical screen flushes it.

pub mod buffer;
pub mod cell;
pub mod cursor;
pub mod headless;
pub mod label;
pub mod storage;

pub(crate) use cellgrid_core::{debug, trace, trace_span};
