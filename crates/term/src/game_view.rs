//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it is unit-tested directly.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Vertical placement of the board inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim(true);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold(true);
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const HINT: CellStyle = VALUE.dim(true);
const BANNER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::BLACK).bold(true);

/// Minimum free columns right of the board before the side panel is drawn.
const PANEL_MIN_W: u16 = 12;

const KEY_HINTS: [&str; 5] = ["A/D  move", "S    drop", "W    rotate", "R    restart", "Q    quit"];

/// Screen placement of the bordered well for one frame
#[derive(Debug, Clone, Copy)]
struct Layout {
    /// Top-left corner of the border.
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Layout {
    fn inner_origin(&self) -> (u16, u16) {
        (self.x + 1, self.y + 1)
    }

    fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }
}

/// Renders snapshots with each board cell drawn `cell_w` x `cell_h` characters.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        draw_border(fb, layout);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match PieceKind::from_u8(v) {
                    Some(kind) => self.block(fb, layout, x, y, kind, false),
                    None => self.paint(fb, layout, x, y, '·', EMPTY),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.block(fb, layout, x as u16, y as u16, active.kind, true);
                }
            }
        }

        draw_side_panel(fb, snap, viewport, layout);

        match snap.phase {
            Phase::Idle => banner(fb, layout, 0, "PRESS ENTER"),
            Phase::GameOver => {
                banner(fb, layout, 0, "GAME OVER");
                banner(fb, layout, 2, "R TO RESTART");
            }
            Phase::Running => {}
        }
    }

    /// Allocating variant of [`GameView::render_into`].
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Active cells are drawn bold so they stand out from settled ones.
    fn block(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16, kind: PieceKind, active: bool) {
        let style = CellStyle::new(piece_color(kind), WELL_BG).bold(active);
        self.paint(fb, layout, x, y, '█', style);
    }

    fn paint(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16, ch: char, style: CellStyle) {
        let (ox, oy) = layout.inner_origin();
        fb.fill_rect(
            ox + x * self.cell_w,
            oy + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }
}

fn draw_border(fb: &mut FrameBuffer, l: Layout) {
    let (right, bottom) = (l.x + l.w - 1, l.y + l.h - 1);
    for x in l.x + 1..right {
        fb.put_char(x, l.y, '─', BORDER);
        fb.put_char(x, bottom, '─', BORDER);
    }
    for y in l.y + 1..bottom {
        fb.put_char(l.x, y, '│', BORDER);
        fb.put_char(right, y, '│', BORDER);
    }
    fb.put_char(l.x, l.y, '┌', BORDER);
    fb.put_char(right, l.y, '┐', BORDER);
    fb.put_char(l.x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, l: Layout) {
    let x = l.right().saturating_add(2);
    if viewport.width.saturating_sub(x) < PANEL_MIN_W {
        return;
    }

    let mut y = l.y;
    for (label, value) in [
        ("SCORE", snap.score),
        ("HIGH", snap.high_score),
        ("LINES", snap.lines),
    ] {
        fb.put_str(x, y, label, LABEL);
        fb.put_u32(x, y.saturating_add(1), value, VALUE);
        y = y.saturating_add(3);
    }

    for hint in KEY_HINTS {
        fb.put_str(x, y, hint, HINT);
        y = y.saturating_add(1);
    }
}

/// Centered text over the well, `line` rows below its middle.
fn banner(fb: &mut FrameBuffer, l: Layout, line: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = l.x.saturating_add(l.w.saturating_sub(text_w) / 2);
    let y = l.y.saturating_add(l.h / 2).saturating_add(line);
    fb.put_str(x, y, text, BANNER);
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_color() {
        let colors: Vec<Rgb> = PieceKind::ALL.iter().map(|k| piece_color(*k)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn narrow_viewport_skips_side_panel() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(!all.contains("SCORE"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }

    #[test]
    fn larger_cells_scale_the_well() {
        let mut snap = GameSnapshot::default();
        snap.board[0][0] = PieceKind::T.to_u8();
        let fb = GameView::new(3, 2)
            .with_anchor_y(AnchorY::Top)
            .render(&snap, Viewport::new(32, 42));
        // 10*3 + 2 = 32 wide, so the border starts at column 0.
        assert_eq!(fb.get(31, 0).unwrap().ch, '┐');
        for (x, y) in [(1, 1), (3, 1), (1, 2), (3, 2)] {
            assert_eq!(fb.get(x, y).unwrap().ch, '█');
        }
        assert_eq!(fb.get(4, 1).unwrap().ch, '·');
    }
}
