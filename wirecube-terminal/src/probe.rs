/// Terminal size discovery through the cursor position report
///
/// The cursor is parked far past the bottom-right corner, where the terminal
/// clamps it, and the terminal is asked where it ended up. The answer
/// `ESC[row;colR` is the terminal size.
use crossterm::{cursor, execute, terminal, Command};
use nom::{
    bytes::complete::{tag, take_until},
    character::complete::{char, u16 as decimal_u16},
    sequence::{delimited, separated_pair},
    IResult,
};
use std::fmt;
use std::io::{self, Read, Write};
use tracing::{debug, warn};
use wirecube_core::Viewport;

use crate::error::ProbeError;

/// Longest response accepted before giving up on the terminator.
pub const MAX_REPORT_LEN: usize = 100;

/// Out-of-range position the terminal clamps to its bottom-right cell.
const FAR_CORNER: u16 = 998;

macro_rules! ansi_command {
    ($(#[$doc:meta])* $name:ident => $seq:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Command for $name {
            fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
                f.write_str($seq)
            }

            #[cfg(windows)]
            fn execute_winapi(&self) -> io::Result<()> {
                Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "cursor position probing needs an ANSI terminal",
                ))
            }
        }
    };
}

ansi_command!(
    /// Save the cursor position (`ESC[s`)
    SaveCursor => "\x1b[s"
);
ansi_command!(
    /// Restore the cursor saved by [`SaveCursor`] (`ESC[u`)
    RestoreCursor => "\x1b[u"
);
ansi_command!(
    /// Device status report request (`ESC[6n`)
    RequestCursorPosition => "\x1b[6n"
);

/// Raw mode held for the lifetime of the value.
///
/// Dropping the guard restores cooked mode, so every return path out of a
/// probe (including `?` on a failed read) leaves the terminal as it found it.
pub struct RawMode(());

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to restore terminal mode: {e}");
        }
    }
}

/// Probe the controlling terminal's size in raw mode.
pub fn terminal_size() -> Result<Viewport, ProbeError> {
    let _raw = RawMode::enable()?;
    let mut stdout = io::stdout();
    let mut stdin = io::stdin().lock();
    probe_size(&mut stdout, &mut stdin)
}

/// Ask the terminal behind `out`/`input` for its size.
///
/// The caller is responsible for raw mode; without it the report may be
/// echoed or held back until a newline arrives. The saved cursor position is
/// restored whether or not a valid report was read.
pub fn probe_size<W: Write, R: Read>(out: &mut W, input: &mut R) -> Result<Viewport, ProbeError> {
    execute!(
        out,
        SaveCursor,
        cursor::MoveTo(FAR_CORNER, FAR_CORNER),
        RequestCursorPosition
    )?;

    let report = read_report(input);
    execute!(out, RestoreCursor)?;
    let report = report?;

    debug!(report = %report.escape_ascii(), "cursor position report");
    let (rows, columns) = parse_cursor_report(&report)?;
    debug!(rows, columns, "terminal size");

    Ok(Viewport::new(rows, columns))
}

/// Read bytes up to and including the `R` that ends a cursor report.
fn read_report<R: Read>(input: &mut R) -> Result<Vec<u8>, ProbeError> {
    let mut report = Vec::with_capacity(16);

    for byte in input.bytes() {
        let byte = byte?;
        report.push(byte);
        if byte == b'R' {
            return Ok(report);
        }
        if report.len() >= MAX_REPORT_LEN {
            return Err(ProbeError::ReportTooLong {
                limit: MAX_REPORT_LEN,
            });
        }
    }

    Err(ProbeError::NoReport)
}

/// Extract `(rows, columns)` from a report of the form `ESC[row;colR`.
///
/// Bytes ahead of the escape sequence (for example keys typed while the
/// probe was in flight) are skipped. Zero dimensions are rejected.
pub fn parse_cursor_report(report: &[u8]) -> Result<(u16, u16), ProbeError> {
    let malformed = || ProbeError::MalformedReport {
        report: report.escape_ascii().to_string(),
    };

    match cursor_report(report) {
        Ok((_, (rows, columns))) if rows > 0 && columns > 0 => Ok((rows, columns)),
        _ => Err(malformed()),
    }
}

fn cursor_report(input: &[u8]) -> IResult<&[u8], (u16, u16)> {
    let (input, _) = take_until("\x1b[")(input)?;
    delimited(
        tag("\x1b["),
        separated_pair(decimal_u16, char(';'), decimal_u16),
        tag("R"),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report() {
        assert_eq!(parse_cursor_report(b"\x1b[24;80R").unwrap(), (24, 80));
        assert_eq!(parse_cursor_report(b"\x1b[1;1R").unwrap(), (1, 1));
    }

    #[test]
    fn test_parse_skips_leading_noise() {
        assert_eq!(parse_cursor_report(b"qq\x1b[50;132R").unwrap(), (50, 132));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for report in [
            &b""[..],
            b"24;80R",
            b"\x1b[24R",
            b"\x1b[;80R",
            b"\x1b[24;R",
            b"\x1b[24;80",
            b"\x1b[0;80R",
            b"\x1b[99999;80R",
        ] {
            let err = parse_cursor_report(report).unwrap_err();
            assert!(
                matches!(err, ProbeError::MalformedReport { .. }),
                "{report:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_probe_writes_protocol_and_restores_cursor() {
        let mut out = Vec::new();
        let mut input = &b"\x1b[24;80R"[..];

        let viewport = probe_size(&mut out, &mut input).unwrap();

        assert_eq!(viewport, Viewport::new(24, 80));
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("\x1b[s\x1b[999;999H"));
        assert!(written.contains("\x1b[6n"));
        assert!(written.ends_with("\x1b[u"));
    }

    #[test]
    fn test_probe_stops_at_terminator() {
        let mut out = Vec::new();
        let mut input = &b"\x1b[30;100Rtrailing"[..];

        probe_size(&mut out, &mut input).unwrap();

        assert_eq!(input, b"trailing");
    }

    #[test]
    fn test_probe_without_answer() {
        let mut out = Vec::new();
        let mut input = &b"\x1b[24;8"[..];

        let err = probe_size(&mut out, &mut input).unwrap_err();

        assert!(matches!(err, ProbeError::NoReport));
        // Cursor restored even though the probe failed
        assert!(String::from_utf8(out).unwrap().ends_with("\x1b[u"));
    }

    #[test]
    fn test_probe_bounds_the_read() {
        let mut out = Vec::new();
        let noise = [b'x'; MAX_REPORT_LEN * 2];
        let mut input = &noise[..];

        let err = probe_size(&mut out, &mut input).unwrap_err();

        assert!(matches!(err, ProbeError::ReportTooLong { limit: MAX_REPORT_LEN }));
        assert_eq!(input.len(), MAX_REPORT_LEN);
    }
}
