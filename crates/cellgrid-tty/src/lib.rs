#![forbid(unsafe_code)]

//! Crossterm terminal backend for cellgrid.
//!
//! [`TerminalBackend`] owns the terminal session and the screen's cell
//! storage. Bind a buffer to it with `Buffer::bind`, draw, then call
//! [`TerminalBackend::present`] to flush the whole grid:
//!
//! ```ignore
//! use cellgrid_core::terminal_session::SessionOptions;
//! use cellgrid_render::buffer::Buffer;
//! use cellgrid_render::label::LabelParams;
//! use cellgrid_tty::TerminalBackend;
//!
//! let mut backend = TerminalBackend::new(SessionOptions {
//!     alternate_screen: true,
//!     hide_cursor: true,
//! })?;
//! {
//!     let mut grid = Buffer::bind(&mut backend);
//!     grid.draw_label(grid.bounds(), &LabelParams::DEFAULT, "hello");
//! }
//! backend.present()?;
//! ```
//!
//! [`Screen`] is the same surface without a session, used headless and in
//! tests; [`Screen::present_to`] writes to any `io::Write`.

use std::io::{self, Write};

use cellgrid_core::terminal_session::{SessionOptions, TerminalSession};
use cellgrid_render::cell::{AttrColor, Attribute, Cell, StyleFlags};
use cellgrid_render::storage::BackendSurface;
use crossterm::cursor::MoveTo;
use crossterm::style::{
    Attribute as SgrAttribute, Attributes, Color, Print, ResetColor, SetAttribute, SetAttributes,
    SetBackgroundColor, SetForegroundColor,
};
use unicode_width::UnicodeWidthChar;

pub(crate) use cellgrid_core::{debug, debug_span, info};

// ── Attribute decoding ───────────────────────────────────────────────────

/// Decode the color half of an [`Attribute`].
///
/// `None` means the terminal default, which is expressed by not emitting a
/// color at all after an SGR reset.
#[must_use]
pub fn to_color(attr: Attribute) -> Option<Color> {
    match attr.color() {
        AttrColor::Default => None,
        AttrColor::Indexed(index) => Some(Color::AnsiValue(index)),
        AttrColor::Rgb(r, g, b) => Some(Color::Rgb { r, g, b }),
    }
}

/// Translate [`StyleFlags`] into crossterm SGR attributes.
#[must_use]
pub fn to_attributes(flags: StyleFlags) -> Attributes {
    const TABLE: [(StyleFlags, SgrAttribute); 6] = [
        (StyleFlags::BOLD, SgrAttribute::Bold),
        (StyleFlags::DIM, SgrAttribute::Dim),
        (StyleFlags::ITALIC, SgrAttribute::Italic),
        (StyleFlags::UNDERLINE, SgrAttribute::Underlined),
        (StyleFlags::BLINK, SgrAttribute::SlowBlink),
        (StyleFlags::REVERSE, SgrAttribute::Reverse),
    ];

    let mut out = Attributes::default();
    for (flag, sgr) in TABLE {
        if flags.contains(flag) {
            out.set(sgr);
        }
    }
    out
}

/// Reset, then apply a cell's colors and the union of its fg/bg flags.
fn emit_style<W: Write>(writer: &mut W, fg: Attribute, bg: Attribute) -> io::Result<()> {
    crossterm::queue!(writer, SetAttribute(SgrAttribute::Reset))?;
    if let Some(color) = to_color(fg) {
        crossterm::queue!(writer, SetForegroundColor(color))?;
    }
    if let Some(color) = to_color(bg) {
        crossterm::queue!(writer, SetBackgroundColor(color))?;
    }
    let attrs = to_attributes(fg.flags() | bg.flags());
    if !attrs.is_empty() {
        crossterm::queue!(writer, SetAttributes(attrs))?;
    }
    Ok(())
}

// ── Screen ───────────────────────────────────────────────────────────────

/// Row-major screen contents, sized to the terminal.
#[derive(Debug, Clone)]
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Screen {
    /// A blank screen of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    /// Reset every cell to [`Cell::BLANK`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Write every cell to `writer` and flush it.
    ///
    /// Each row starts with an absolute cursor move. SGR state is only
    /// re-emitted when the attributes change between consecutive cells.
    /// After a character whose display width is not 1 the cursor is moved
    /// explicitly so the next cell lands in its own column. Control
    /// characters are written as spaces.
    pub fn present_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let span = debug_span!("present", width = self.width, height = self.height);
        let _guard = span.enter();

        let mut style: Option<(Attribute, Attribute)> = None;

        if self.width > 0 {
            for (y, row) in self.cells.chunks_exact(self.width as usize).enumerate() {
                let y = y as u16;
                crossterm::queue!(writer, MoveTo(0, y))?;
                let mut column: u16 = 0;

                for (x, cell) in row.iter().enumerate() {
                    let x = x as u16;
                    if column != x {
                        crossterm::queue!(writer, MoveTo(x, y))?;
                        column = x;
                    }
                    if style != Some((cell.fg, cell.bg)) {
                        emit_style(writer, cell.fg, cell.bg)?;
                        style = Some((cell.fg, cell.bg));
                    }

                    let (ch, advance) = if cell.ch.is_control() {
                        (' ', 1)
                    } else {
                        (cell.ch, cell.ch.width().unwrap_or(1) as u16)
                    };
                    crossterm::queue!(writer, Print(ch))?;
                    column = column.saturating_add(advance);
                }
            }
        }

        crossterm::queue!(writer, SetAttribute(SgrAttribute::Reset), ResetColor)?;
        writer.flush()
    }
}

impl BackendSurface for Screen {
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
        debug!(
            from_width = self.width,
            from_height = self.height,
            width,
            height,
            "screen resized"
        );
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::BLANK; width as usize * height as usize];
    }
}

// ── Terminal backend ─────────────────────────────────────────────────────

/// A live terminal: session guard plus screen contents.
///
/// Dropping the backend restores the terminal.
#[derive(Debug)]
pub struct TerminalBackend {
    session: TerminalSession,
    screen: Screen,
}

impl TerminalBackend {
    /// Take over the terminal and size the screen to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be opened or the terminal
    /// size cannot be queried.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        let session = TerminalSession::new(options)?;
        let (width, height) = session.size()?;
        info!(width, height, "terminal backend opened");
        Ok(Self {
            session,
            screen: Screen::new(width, height),
        })
    }

    /// Re-query the terminal size and reallocate the screen if it changed.
    ///
    /// Returns `true` when the screen was resized; the old contents are
    /// discarded and the next bound buffer sees the new size.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried.
    pub fn refresh_size(&mut self) -> io::Result<bool> {
        let (width, height) = self.session.size()?;
        if self.screen.surface_size() == (width, height) {
            return Ok(false);
        }
        info!(width, height, "terminal resized");
        self.screen.resize_surface(width, height);
        Ok(true)
    }

    /// Flush the whole screen to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn present(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.screen.present_to(&mut lock)
    }

    /// Reset every cell to [`Cell::BLANK`]. Nothing is written until the
    /// next [`present`](Self::present).
    pub fn clear(&mut self) {
        self.screen.clear();
    }
}

impl BackendSurface for TerminalBackend {
    fn surface_size(&self) -> (u16, u16) {
        self.screen.surface_size()
    }

    fn surface_cells(&self) -> &[Cell] {
        self.screen.surface_cells()
    }

    fn surface_cells_mut(&mut self) -> &mut [Cell] {
        self.screen.surface_cells_mut()
    }

    fn resize_surface(&mut self, width: u16, height: u16) {
        self.screen.resize_surface(width, height);
    }
}
