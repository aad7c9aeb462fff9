#![forbid(unsafe_code)]

//! Cell types.
//!
//! A [`Cell`] is one terminal character position: a Unicode scalar value plus
//! foreground and background [`Attribute`]s. Attributes are opaque tokens as
//! far as the grid is concerned; they are stored and copied, never combined.
//! Only a backend decodes them.
//!
//! # Layout (12 bytes)
//!
//! ```text
//! Cell {
//!     ch: char,        // 4 bytes - Unicode scalar value
//!     fg: Attribute,   // 4 bytes - foreground color + style flags
//!     bg: Attribute,   // 4 bytes - background color + style flags
//! }
//! ```

/// A single terminal cell.
///
/// The default cell is a space with default foreground and background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Character shown in this cell.
    pub ch: char,
    /// Foreground attribute.
    pub fg: Attribute,
    /// Background attribute.
    pub bg: Attribute,
}

const _: () = assert!(core::mem::size_of::<Cell>() == 12);

impl Cell {
    /// A blank cell with default attributes.
    pub const BLANK: Self = Self {
        ch: ' ',
        fg: Attribute::DEFAULT,
        bg: Attribute::DEFAULT,
    };

    /// Create a cell from its parts.
    #[inline]
    pub const fn new(ch: char, fg: Attribute, bg: Attribute) -> Self {
        Self { ch, fg, bg }
    }

    /// Create a cell from a single character with default attributes.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        Self::new(ch, Attribute::DEFAULT, Attribute::DEFAULT)
    }

    /// Set the character, preserving attributes.
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

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
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

bitflags::bitflags! {
    /// Style flags carried inside an [`Attribute`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD      = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM       = 0b0000_0010;
        /// Italic text.
        const ITALIC    = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
        /// Blinking text.
        const BLINK     = 0b0001_0000;
        /// Reverse video (swap fg/bg).
        const REVERSE   = 0b0010_0000;
    }
}

/// Color component of an [`Attribute`], as decoded by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrColor {
    /// The terminal's own default color.
    Default,
    /// A palette index (0-255).
    Indexed(u8),
    /// A 24-bit color.
    Rgb(u8, u8, u8),
}

/// Opaque packed style token: a color plus [`StyleFlags`].
///
/// # Layout
///
/// ```text
/// [31-30: color kind][29-24: style flags][23-0: color payload]
/// ```
///
/// Kind `0` is the default color, `1` a palette index in the low byte,
/// `2` RGB in bits 23..0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Attribute(u32);

impl Attribute {
    /// Terminal default color, no style flags.
    pub const DEFAULT: Self = Self(0);

    const KIND_SHIFT: u32 = 30;
    const FLAGS_SHIFT: u32 = 24;
    const PAYLOAD_MASK: u32 = 0x00FF_FFFF;
    const FLAGS_MASK: u32 = 0x3F00_0000;

    const KIND_INDEXED: u32 = 1;
    const KIND_RGB: u32 = 2;

    /// A palette color.
    #[inline]
    pub const fn indexed(index: u8) -> Self {
        Self((Self::KIND_INDEXED << Self::KIND_SHIFT) | index as u32)
    }

    /// A 24-bit color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((Self::KIND_RGB << Self::KIND_SHIFT) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Return a copy with the given style flags replacing the current ones.
    #[inline]
    pub const fn with_flags(self, flags: StyleFlags) -> Self {
        Self((self.0 & !Self::FLAGS_MASK) | ((flags.bits() as u32) << Self::FLAGS_SHIFT))
    }

    /// Extract the style flags.
    #[inline]
    pub const fn flags(self) -> StyleFlags {
        StyleFlags::from_bits_truncate(((self.0 & Self::FLAGS_MASK) >> Self::FLAGS_SHIFT) as u8)
    }

    /// Decode the color component.
    #[inline]
    pub const fn color(self) -> AttrColor {
        let payload = self.0 & Self::PAYLOAD_MASK;
        match self.0 >> Self::KIND_SHIFT {
            Self::KIND_INDEXED => AttrColor::Indexed(payload as u8),
            Self::KIND_RGB => AttrColor::Rgb(
                (payload >> 16) as u8,
                (payload >> 8) as u8,
                payload as u8,
            ),
            _ => AttrColor::Default,
        }
    }

    /// Raw packed value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Reconstruct from a raw packed value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}
