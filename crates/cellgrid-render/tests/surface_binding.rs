//! Integration tests for buffers bound to a backend surface.
//!
//! - Drawing through a bound buffer lands in the backend's storage
//! - A backend-driven resize is observed by the next call, never cached
//! - Owned and bound buffers render identically

use cellgrid_core::geometry::Rect;
use cellgrid_render::buffer::Buffer;
use cellgrid_render::cell::{Attribute, Cell};
use cellgrid_render::headless::HeadlessSurface;
use cellgrid_render::label::{Alignment, LabelParams};
use cellgrid_render::storage::BackendSurface;

fn status_line() -> LabelParams {
    LabelParams::DEFAULT
        .with_align(Alignment::Center)
        .with_fg(Attribute::indexed(15))
        .with_bg(Attribute::indexed(4))
}

#[test]
fn label_through_bound_buffer_reaches_surface() {
    let mut surface = HeadlessSurface::new(10, 2);
    {
        let mut grid = Buffer::bind(&mut surface);
        grid.fill(Rect::new(0, 1, 10, 1), Cell::from_char('-'));
        grid.draw_label(Rect::new(0, 1, 10, 1), &status_line(), "ready");
    }
    assert_eq!(surface.row_text(0).as_deref(), Some("          "));
    assert_eq!(surface.row_text(1).as_deref(), Some("--ready---"));

    let cell = surface.surface_cells()[10 + 2];
    assert_eq!(cell.ch, 'r');
    assert_eq!(cell.bg, Attribute::indexed(4));
}

#[test]
fn backend_resize_between_frames_is_observed() {
    let mut surface = HeadlessSurface::new(8, 1);

    {
        let mut grid = Buffer::bind(&mut surface);
        grid.draw_label(grid.bounds(), &LabelParams::DEFAULT, "first frame");
        assert_eq!(grid.row_text(0), "first f…");
    }

    // Backend swaps its storage, as a terminal does on SIGWINCH.
    surface.resize_surface(4, 2);
    assert_eq!(surface.generation(), 1);

    let mut grid = Buffer::bind(&mut surface);
    assert_eq!(grid.bounds(), Rect::new(0, 0, 4, 2));
    grid.draw_label(Rect::new(0, 1, 20, 1), &LabelParams::DEFAULT, "second");
    assert_eq!(grid.row_text(1), "sec…");
    assert_eq!(grid.len(), 8);
}

#[test]
fn resize_through_bound_buffer_then_draw() {
    let mut surface = HeadlessSurface::new(3, 1);
    let mut grid = Buffer::bind(&mut surface);
    grid.resize(12, 1);
    grid.clear();
    grid.draw_label(grid.bounds(), &LabelParams::DEFAULT, "hello world");
    assert_eq!(grid.row_text(0), "hello world ");
}

#[test]
fn owned_and_bound_buffers_render_identically() {
    let texts = ["", "short", "a label that overflows", "ümlaut→arrows"];
    let aligns = [Alignment::Left, Alignment::Center, Alignment::Right];

    for text in texts {
        for align in aligns {
            for center in [false, true] {
                let params = LabelParams::DEFAULT
                    .with_align(align)
                    .with_center_ellipsis(center);

                let mut owned = Buffer::new(9, 1);
                owned.draw_label(owned.bounds(), &params, text);

                let mut surface = HeadlessSurface::new(9, 1);
                let mut bound = Buffer::bind(&mut surface);
                bound.draw_label(bound.bounds(), &params, text);

                assert!(bound == owned, "{text:?} {align:?} center={center}");
            }
        }
    }
}

#[test]
fn bind_through_trait_object() {
    let mut surface = HeadlessSurface::new(5, 1);
    {
        let backend: &mut dyn BackendSurface = &mut surface;
        let mut grid = Buffer::bind(backend);
        grid.draw_label(grid.bounds(), &LabelParams::DEFAULT, "dyn ok");
    }
    assert_eq!(surface.row_text(0).as_deref(), Some("dyn …"));
}
