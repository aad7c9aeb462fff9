#![forbid(unsafe_code)]

//! Single-line labels.
//!
//! [`Buffer::draw_label`] lays one line of text into a destination rectangle:
//! aligned when it fits, truncated with an ellipsis glyph when it does not.
//! Truncation counts Unicode scalar values, never bytes, so multi-byte text
//! is always cut on a character boundary.
//!
//! # Overflow layout
//!
//! With `width` columns and more than `width` characters:
//!
//! | Mode | Row |
//! |------|-----|
//! | Left | head of the text, `…` in the last column |
//! | Right | `…` in the first column, tail of the text |
//! | Center | `…` at both ends, a slice from the middle of the text between them |
//! | center ellipsis (any alignment) | head, `…` at column `width / 2`, tail |
//!
//! When the ellipsis cells leave no room for text (`width` of 1, or 2 in
//! Center mode), only the ellipsis cells are written.

use crate::buffer::Buffer;
use crate::cell::{Attribute, Cell};
use crate::cursor::CharCursor;
use crate::storage::CellStorage;
use cellgrid_core::geometry::Rect;

/// Horizontal placement of a label inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    /// Text starts at the first column.
    Left,
    /// Text is centered; odd padding puts the extra column on the right.
    Center,
    /// Text ends at the last column.
    Right,
}

/// Configuration for one [`Buffer::draw_label`] call.
///
/// ```
/// use cellgrid_render::label::{Alignment, LabelParams};
///
/// let params = LabelParams::DEFAULT
///     .with_align(Alignment::Right)
///     .with_ellipsis('~');
/// assert_eq!(params.ellipsis, '~');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelParams {
    /// Foreground attribute for every written cell.
    pub fg: Attribute,
    /// Background attribute for every written cell.
    pub bg: Attribute,
    /// Placement of the text.
    pub align: Alignment,
    /// Glyph standing in for omitted text.
    pub ellipsis: char,
    /// Put a single ellipsis in the middle and show head and tail around it,
    /// regardless of `align`.
    pub center_ellipsis: bool,
}

impl LabelParams {
    /// Default attributes, left aligned, `…` as the ellipsis.
    pub const DEFAULT: Self = Self {
        fg: Attribute::DEFAULT,
        bg: Attribute::DEFAULT,
        align: Alignment::Left,
        ellipsis: '…',
        center_ellipsis: false,
    };

    /// Set the foreground attribute.
    #[inline]
    pub const fn with_fg(mut self, fg: Attribute) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background attribute.
    #[inline]
    pub const fn with_bg(mut self, bg: Attribute) -> Self {
        self.bg = bg;
        self
    }

    /// Set the alignment.
    #[inline]
    pub const fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the ellipsis glyph.
    #[inline]
    pub const fn with_ellipsis(mut self, ellipsis: char) -> Self {
        self.ellipsis = ellipsis;
        self
    }

    /// Enable or disable the centered ellipsis mode.
    #[inline]
    pub const fn with_center_ellipsis(mut self, center_ellipsis: bool) -> Self {
        self.center_ellipsis = center_ellipsis;
        self
    }

    #[inline]
    const fn cell(&self, ch: char) -> Cell {
        Cell::new(ch, self.fg, self.bg)
    }
}

impl Default for LabelParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<S: CellStorage> Buffer<S> {
    /// Draw `text` as a single-line label into `dest`.
    ///
    /// Only the top row of `dest` is used, clipped to the buffer bounds; an
    /// empty clip is a no-op. Cells that receive no character (alignment
    /// padding) keep their previous contents.
    pub fn draw_label(&mut self, dest: Rect, params: &LabelParams, text: &str) {
        let dest = dest.with_height(1).intersection(&self.bounds());
        if dest.is_empty() {
            return;
        }

        let text = CharCursor::new(text);
        let span = crate::trace_span!(
            "draw_label",
            x = dest.x,
            y = dest.y,
            width = dest.width,
            chars = text.remaining()
        );
        let _guard = span.enter();

        let off = dest.y as usize * self.width() as usize + dest.x as usize;
        let row = &mut self.cells_mut()[off..off + dest.width as usize];
        layout_row(row, params, text);
    }
}

/// Lay `text` out over `row`, which is exactly the clipped destination.
fn layout_row(row: &mut [Cell], params: &LabelParams, mut text: CharCursor<'_>) {
    let width = row.len();
    let text_len = text.remaining();

    if text_len <= width {
        match params.align {
            Alignment::Left => draw_head(row, params, &mut text),
            Alignment::Center => {
                let pad = (width - text_len) / 2;
                draw_head(&mut row[pad..], params, &mut text);
            }
            Alignment::Right => draw_tail(row, params, &mut text),
        }
        return;
    }

    crate::trace!(width, text_len, "label overflows, truncating");
    let ellipsis = params.cell(params.ellipsis);

    if params.center_ellipsis {
        let (head, rest) = row.split_at_mut(width / 2);
        let (mark, tail) = rest.split_at_mut(1);
        mark[0] = ellipsis;
        draw_head(head, params, &mut text);
        draw_tail(tail, params, &mut text);
        return;
    }

    match params.align {
        Alignment::Left => {
            let (head, mark) = row.split_at_mut(width - 1);
            mark[0] = ellipsis;
            draw_head(head, params, &mut text);
        }
        Alignment::Right => {
            let (mark, tail) = row.split_at_mut(1);
            mark[0] = ellipsis;
            draw_tail(tail, params, &mut text);
        }
        Alignment::Center => {
            row[0] = ellipsis;
            row[width - 1] = ellipsis;
            let visible = width.saturating_sub(2);
            if visible == 0 {
                return;
            }
            text.skip_front((text_len - visible) / 2);
            draw_head(&mut row[1..width - 1], params, &mut text);
        }
    }
}

/// Write characters from the front of `text` left-to-right into `cells`
/// until either runs out.
fn draw_head(cells: &mut [Cell], params: &LabelParams, text: &mut CharCursor<'_>) {
    for (slot, ch) in cells.iter_mut().zip(text.by_ref()) {
        *slot = params.cell(ch);
    }
}

/// Write characters from the back of `text` right-to-left into `cells`,
/// ending at the last cell, until either runs out.
fn draw_tail(cells: &mut [Cell], params: &LabelParams, text: &mut CharCursor<'_>) {
    for (slot, ch) in cells.iter_mut().rev().zip(text.by_ref().rev()) {
        *slot = params.cell(ch);
    }
}
