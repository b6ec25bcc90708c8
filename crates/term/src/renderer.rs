//! TerminalRenderer: flushes framebuffers to a terminal.
//!
//! The first frame, and any frame after a resize or `invalidate`, is sent as a
//! full redraw. Later frames only send the horizontal runs of cells that
//! changed since the previous frame.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Diffing renderer over any byte sink (stdout in the game, a `Vec` in tests).
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo `enter`. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, keeping it as the diff base for the next frame.
    ///
    /// On return `fb` holds the previous frame's buffer, so one pair of
    /// buffers ping-pongs between caller and renderer without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if same_size(&prev, fb) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Encode a full-frame redraw into `out` (no terminal I/O).
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut enc = StyledWriter::new(out);
    for y in 0..fb.height() {
        enc.move_to(0, y)?;
        for cell in fb.row(y).unwrap_or_default() {
            enc.cell(*cell)?;
        }
    }
    enc.finish()
}

/// Encode only the changed runs between two equally sized frames.
///
/// Frames of different sizes fall back to a full redraw of `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if !same_size(prev, next) {
        return encode_full_into(next, out);
    }

    let mut enc = StyledWriter::new(out);
    for run in changed_runs(prev, next) {
        enc.move_to(run.x, run.y)?;
        let row = next.row(run.y).unwrap_or_default();
        for cell in &row[run.x as usize..(run.x + run.len) as usize] {
            enc.cell(*cell)?;
        }
    }
    enc.finish()
}

/// Emits cells, switching colors and attributes only when the style changes.
struct StyledWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> StyledWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cell(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            let style = cell.style;
            self.out.queue(SetAttribute(Attribute::Reset))?;
            self.out.queue(SetForegroundColor(color(style.fg)))?;
            self.out.queue(SetBackgroundColor(color(style.bg)))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// A horizontal span of changed cells on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Iterate the changed runs between two equally sized frames, top to bottom.
///
/// Yields nothing when the sizes differ.
pub fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> ChangedRuns<'a> {
    let y = if same_size(prev, next) { 0 } else { next.height() };
    ChangedRuns {
        prev,
        next,
        x: 0,
        y,
    }
}

pub struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    x: u16,
    y: u16,
}

impl Iterator for ChangedRuns<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        while self.y < self.next.height() {
            let a = self.prev.row(self.y)?;
            let b = self.next.row(self.y)?;
            let width = b.len();

            let from = self.x as usize;
            if let Some(start) = (from..width).find(|&i| a[i] != b[i]) {
                let end = (start..width).find(|&i| a[i] == b[i]).unwrap_or(width);
                self.x = end as u16;
                return Some(Run {
                    x: start as u16,
                    y: self.y,
                    len: (end - start) as u16,
                });
            }

            self.x = 0;
            self.y += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: &[&str]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(rows[0].len() as u16, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            fb.put_str(0, y as u16, row, CellStyle::default());
        }
        fb
    }

    #[test]
    fn full_encode_contains_every_glyph() {
        let fb = frame(&["AB", "CD"]);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        for ch in ["A", "B", "C", "D"] {
            assert!(text.contains(ch));
        }
    }

    #[test]
    fn diff_of_identical_frames_only_resets_style() {
        let a = frame(&["....", "...."]);
        let mut diff = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut diff).unwrap();

        let mut reset_only = Vec::new();
        reset_only.queue(ResetColor).unwrap();
        reset_only.queue(SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(diff, reset_only);
    }

    #[test]
    fn runs_coalesce_adjacent_cells_per_row() {
        let a = frame(&[".....", "....."]);
        let b = frame(&[".XXX.", "X...X"]);
        let runs: Vec<Run> = changed_runs(&a, &b).collect();
        assert_eq!(
            runs,
            vec![
                Run { x: 1, y: 0, len: 3 },
                Run { x: 0, y: 1, len: 1 },
                Run { x: 4, y: 1, len: 1 },
            ]
        );
    }

    #[test]
    fn runs_of_mismatched_sizes_are_empty() {
        let a = frame(&["..."]);
        let b = frame(&["....", "...."]);
        assert_eq!(changed_runs(&a, &b).count(), 0);
    }

    #[test]
    fn draw_swap_sends_full_frame_then_diffs() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());

        let mut fb = frame(&["ab", "cd"]);
        renderer.draw_swap(&mut fb).unwrap();
        let first = renderer.writer().len();
        assert!(first > 0);

        // Same content again: only the trailing reset is written.
        let mut fb = frame(&["ab", "cd"]);
        renderer.draw_swap(&mut fb).unwrap();
        let second = renderer.writer().len() - first;

        let mut reset_only = Vec::new();
        reset_only.queue(ResetColor).unwrap();
        reset_only.queue(SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(second, reset_only.len());
    }

    #[test]
    fn invalidate_forces_full_redraw() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut fb = frame(&["ab"]);
        renderer.draw_swap(&mut fb).unwrap();
        let full_len = renderer.writer().len();

        renderer.invalidate();
        let mut fb = frame(&["ab"]);
        renderer.draw_swap(&mut fb).unwrap();
        assert_eq!(renderer.writer().len(), 2 * full_len);
    }
}
