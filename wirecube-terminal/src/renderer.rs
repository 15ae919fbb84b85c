/// Direct-to-terminal plotting with cursor addressing
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use std::io::{self, Write};
use wirecube_core::Plot;

/// Glyph drawn for every wireframe cell
pub const GLYPH: char = 'C';

/// Foreground color of the wireframe
pub const COLOR: Color = Color::Yellow;

/// Writes plotted cells straight to a terminal stream.
///
/// Cells use 1-based terminal coordinates (`x` is the column, `y` the row).
/// Cells left of column 1, above row 1 or outside the `u16` range are not
/// addressable and are skipped. Write errors raised while plotting are held
/// until the next [`TerminalCanvas::flush`].
pub struct TerminalCanvas<W: Write> {
    out: W,
    glyph: char,
    color: Color,
    error: Option<io::Error>,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            glyph: GLYPH,
            color: COLOR,
            error: None,
        }
    }

    /// Queue a full-screen clear (`ESC[2J`)
    pub fn clear(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::All))?;
        Ok(())
    }

    /// Surface any deferred plotting error, then flush the stream.
    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }

    /// Reset colors and park the cursor on the last row so the shell prompt
    /// resumes below the drawing.
    pub fn finish(&mut self, rows: u16) -> io::Result<()> {
        self.out
            .queue(ResetColor)?
            .queue(cursor::MoveTo(0, rows.saturating_sub(1)))?
            .queue(Print('\n'))?;
        self.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn put(&mut self, column: u16, row: u16) -> io::Result<()> {
        self.out
            .queue(cursor::MoveTo(column, row))?
            .queue(SetForegroundColor(self.color))?
            .queue(Print(self.glyph))?
            .queue(ResetColor)?;
        Ok(())
    }
}

/// Zero-based crossterm coordinate for a 1-based terminal coordinate
fn zero_based(v: i32) -> Option<u16> {
    u16::try_from(v).ok()?.checked_sub(1)
}

impl<W: Write> Plot for TerminalCanvas<W> {
    fn plot(&mut self, x: i32, y: i32) {
        if self.error.is_some() {
            return;
        }
        let (Some(column), Some(row)) = (zero_based(x), zero_based(y)) else {
            return;
        };
        if let Err(e) = self.put(column, row) {
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(canvas: TerminalCanvas<Vec<u8>>) -> String {
        String::from_utf8(canvas.into_inner()).unwrap()
    }

    #[test]
    fn test_plot_addresses_row_then_column() {
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.plot(7, 3);
        let out = rendered(canvas);

        assert!(out.starts_with("\x1b[3;7H"));
        assert!(out.contains('C'));
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_plot_skips_unaddressable_cells() {
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.plot(0, 5);
        canvas.plot(5, 0);
        canvas.plot(-3, -3);
        canvas.plot(70_000, 2);
        assert!(rendered(canvas).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.clear().unwrap();
        assert_eq!(rendered(canvas), "\x1b[2J");
    }

    #[test]
    fn test_each_glyph_is_color_wrapped() {
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.plot(1, 1);
        canvas.plot(2, 1);
        let out = rendered(canvas);
        assert_eq!(out.matches('C').count(), 2);
        assert_eq!(out.matches("\x1b[0m").count(), 2);
    }

    #[test]
    fn test_finish_moves_below_drawing() {
        let mut canvas = TerminalCanvas::new(Vec::new());
        canvas.finish(24).unwrap();
        assert!(rendered(canvas).ends_with("\x1b[24;1H\n"));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_plot_error_surfaces_on_flush() {
        let mut canvas = TerminalCanvas::new(Broken);
        canvas.plot(1, 1);
        canvas.plot(2, 2);

        let err = canvas.flush().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(canvas.flush().is_ok());
    }
}
