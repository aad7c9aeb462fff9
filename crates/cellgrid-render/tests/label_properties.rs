//! Property tests for `Buffer::draw_label`.
//!
//! 1. Only cells of the clipped top row of `dest` change.
//! 2. Text that fits is written verbatim at the aligned offset.
//! 3. Overflow always places the ellipsis where the mode says.
//! 4. Visible characters are a head/tail/middle slice of the input, in order.
//! 5. Disjoint destinations leave the buffer unchanged.

use cellgrid_core::geometry::Rect;
use cellgrid_render::buffer::Buffer;
use cellgrid_render::cell::Cell;
use cellgrid_render::label::{Alignment, LabelParams};
use proptest::prelude::*;

const BACKGROUND: char = '.';
const ELLIPSIS: char = '~';

fn align_strategy() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Left),
        Just(Alignment::Center),
        Just(Alignment::Right),
    ]
}

// Mix of 1-, 2-, 3-, and 4-byte scalars; no '.' or '~' so they can't be
// confused with the background or ellipsis.
fn char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        proptest::char::range('a', 'z'),
        proptest::char::range('à', 'ÿ'),
        proptest::char::range('一', '十'),
        Just('🦀'),
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(char_strategy(), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A width together with text that fits in it.
fn fitting_strategy() -> impl Strategy<Value = (u16, Vec<char>)> {
    (1u16..30).prop_flat_map(|w| {
        (
            Just(w),
            proptest::collection::vec(char_strategy(), 0..=w as usize),
        )
    })
}

/// A width together with text that overflows it.
fn overflowing_strategy() -> impl Strategy<Value = (u16, Vec<char>)> {
    (1u16..20).prop_flat_map(|w| {
        let w_len = w as usize;
        (
            Just(w),
            proptest::collection::vec(char_strategy(), w_len + 1..w_len + 12),
        )
    })
}

fn params(align: Alignment, center_ellipsis: bool) -> LabelParams {
    LabelParams::DEFAULT
        .with_align(align)
        .with_ellipsis(ELLIPSIS)
        .with_center_ellipsis(center_ellipsis)
}

fn blank(width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    buf.clear_with(Cell::from_char(BACKGROUND));
    buf
}

fn row_chars(buf: &Buffer, y: u16, from: u16, to: u16) -> Vec<char> {
    (from..to).map(|x| buf.get(x, y).unwrap().ch).collect()
}

proptest! {
    #[test]
    fn writes_stay_inside_clipped_top_row(
        width in 1u16..30,
        height in 1u16..6,
        x in 0u16..35,
        y in 0u16..8,
        w in 0u16..35,
        h in 0u16..4,
        align in align_strategy(),
        center in any::<bool>(),
        text in text_strategy(),
    ) {
        let mut buf = blank(width, height);
        let dest = Rect::new(x, y, w, h);
        buf.draw_label(dest, &params(align, center), &text);

        let clipped = dest.with_height(1).intersection(&buf.bounds());
        for cy in 0..height {
            for cx in 0..width {
                if !clipped.contains(cx, cy) {
                    prop_assert_eq!(buf.get(cx, cy).unwrap().ch, BACKGROUND);
                }
            }
        }
    }

    #[test]
    fn fitting_text_is_written_verbatim(
        (width, chars) in fitting_strategy(),
        align in align_strategy(),
        center in any::<bool>(),
    ) {
        let text: String = chars.iter().collect();

        let mut buf = blank(width, 1);
        buf.draw_label(buf.bounds(), &params(align, center), &text);

        let spare = width as usize - chars.len();
        let start = match align {
            Alignment::Left => 0,
            Alignment::Center => spare / 2,
            Alignment::Right => spare,
        };
        let row = row_chars(&buf, 0, 0, width);
        prop_assert_eq!(&row[start..start + chars.len()], &chars[..]);
        prop_assert!(row[..start].iter().all(|&c| c == BACKGROUND));
        prop_assert!(row[start + chars.len()..].iter().all(|&c| c == BACKGROUND));
    }

    #[test]
    fn overflow_layout_matches_mode(
        (width, chars) in overflowing_strategy(),
        align in align_strategy(),
        center in any::<bool>(),
    ) {
        let text: String = chars.iter().collect();
        let w = width as usize;

        let mut buf = blank(width, 1);
        buf.draw_label(buf.bounds(), &params(align, center), &text);
        let row = row_chars(&buf, 0, 0, width);

        let mut expected = vec![BACKGROUND; w];
        if center {
            let head = w / 2;
            let tail = w - 1 - head;
            expected[..head].copy_from_slice(&chars[..head]);
            expected[head] = ELLIPSIS;
            expected[head + 1..].copy_from_slice(&chars[chars.len() - tail..]);
        } else {
            match align {
                Alignment::Left => {
                    expected[..w - 1].copy_from_slice(&chars[..w - 1]);
                    expected[w - 1] = ELLIPSIS;
                }
                Alignment::Right => {
                    expected[0] = ELLIPSIS;
                    expected[1..].copy_from_slice(&chars[chars.len() - (w - 1)..]);
                }
                Alignment::Center => {
                    expected[0] = ELLIPSIS;
                    expected[w - 1] = ELLIPSIS;
                    if w > 2 {
                        let n = w - 2;
                        let skip = (chars.len() - n) / 2;
                        expected[1..w - 1].copy_from_slice(&chars[skip..skip + n]);
                    }
                }
            }
        }
        prop_assert_eq!(row, expected);
    }

    #[test]
    fn disjoint_dest_is_noop(
        width in 1u16..20,
        height in 1u16..5,
        dx in 0u16..10,
        align in align_strategy(),
        text in text_strategy(),
    ) {
        let mut buf = blank(width, height);
        let before = buf.clone();
        buf.draw_label(Rect::new(width + dx, 0, 10, 1), &params(align, false), &text);
        buf.draw_label(Rect::new(0, height + dx, 10, 1), &params(align, true), &text);
        prop_assert_eq!(buf, before);
    }
}
