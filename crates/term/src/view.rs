//! DartsView: maps an engine snapshot into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts can be unit-tested against the framebuffer text.
//!
//! Layout:
//!
//! ```text
//! ┌ sidebar ──────────────┐  Round 3 / 15 · dart 2
//! │ 01 - 501              │  ┌────────┐┌────────┐┌────────┐
//! │ REMAINING  321        │  │  T-20  ││  S-5   ││   -    │
//! │ (cricket: marks board)│  └────────┘└────────┘└────────┘
//! │ R2  T-20 T-20 T-20 180│  ROUND TOTAL              65
//! │ R1  ...               │  > T-1_
//! └───────────────────────┘  keys help
//! ```

use crate::core::{BoardSnapshot, EngineSnapshot, Marks, RoundSummary, Slot};
use crate::fb::{BoxGlyphs, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, GameType, MARKS_TO_CLOSE};

const SIDEBAR_W: u16 = 34;
const SLOT_W: u16 = 12;
const SLOT_H: u16 = 5;
const SLOT_GAP: u16 = 2;

const BG: Rgb = Rgb::new(15, 23, 42);
const PANEL: Rgb = Rgb::new(30, 41, 59);
const MUTED: Rgb = Rgb::new(148, 163, 184);
const TEXT: Rgb = Rgb::new(241, 245, 249);
const ACCENT: Rgb = Rgb::new(59, 130, 246);
const DANGER: Rgb = Rgb::new(248, 113, 113);
const GOLD: Rgb = Rgb::new(250, 204, 21);
const GOOD: Rgb = Rgb::new(74, 222, 128);

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

/// Everything one frame shows.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub title: &'a str,
    pub snapshot: &'a EngineSnapshot,
    /// Newest first, as kept by the engine.
    pub round_log: &'a [RoundSummary],
    /// Keypad entry in progress, e.g. `T-1_`.
    pub prompt: Option<&'a str>,
}

/// Renderer for the scoring screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct DartsView {
    /// Hide the key help line (useful for tiny terminals and tests).
    pub compact: bool,
}

impl DartsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, scene: &Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(CellStyle::new(TEXT, BG).into_cell(' '));

        let sidebar_w = SIDEBAR_W.min(viewport.width / 2);
        self.draw_sidebar(fb, scene, sidebar_w, viewport.height);
        self.draw_main(fb, scene, sidebar_w + 2, viewport);

        match scene.snapshot.status {
            GameStatus::Finished | GameStatus::GameOver => {
                self.draw_result_overlay(fb, scene.snapshot, viewport)
            }
            GameStatus::Playing | GameStatus::Bust => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_sidebar(&self, fb: &mut FrameBuffer, scene: &Scene<'_>, w: u16, h: u16) {
        let panel = CellStyle::new(TEXT, PANEL);
        let muted = panel.with_fg(MUTED);
        fb.fill_rect(0, 0, w, h, panel);

        let inner_x = 2;
        let inner_w = w.saturating_sub(4);
        let mut y = 1;

        fb.text(inner_x, y, scene.title, panel.bold());
        y += 2;

        match &scene.snapshot.board {
            BoardSnapshot::ZeroOne { remaining, .. } => {
                fb.text(inner_x, y, "REMAINING", muted);
                y += 1;
                fb.text_centered(inner_x, y, inner_w, &remaining.to_string(), panel.bold());
                y += 2;
            }
            BoardSnapshot::Cricket { marks, total_score } => {
                fb.text(inner_x, y, "SCORE", muted);
                fb.text_right(inner_x + inner_w, y, &total_score.to_string(), panel.bold());
                y += 2;
                y = self.draw_marks(fb, marks, inner_x, y, inner_w, panel);
                y += 1;
            }
        }

        fb.hline(inner_x, y, inner_w, '─', muted);
        y += 1;

        let sign = match scene.snapshot.game_type {
            GameType::ZeroOne => "-",
            GameType::Cricket => "+",
        };
        for summary in scene.round_log {
            if y >= h.saturating_sub(1) {
                break;
            }
            let [a, b, c] = summary.labels();
            let line = format!("R{:<3}{:<7}{:<7}{:<7}", summary.round, a, b, c);
            fb.text(inner_x, y, &line, muted);
            fb.text_right(
                inner_x + inner_w,
                y,
                &format!("{}{}", sign, summary.total),
                panel.bold(),
            );
            y += 1;
        }
    }

    /// Marks board rows (`20  X  ⊗ +3`); returns the next free row.
    fn draw_marks(
        &self,
        fb: &mut FrameBuffer,
        marks: &Marks,
        x: u16,
        mut y: u16,
        w: u16,
        panel: CellStyle,
    ) -> u16 {
        for (target, count) in marks.iter() {
            let name = if target == crate::types::BULL {
                "BULL".to_string()
            } else {
                target.to_string()
            };
            let closed = count >= MARKS_TO_CLOSE;
            let style = if closed {
                panel.with_fg(ACCENT).bold()
            } else {
                panel
            };
            fb.text(x, y, &name, style);
            fb.text(x + 6, y, mark_glyph(count), style);
            if count > MARKS_TO_CLOSE {
                fb.text_right(x + w, y, &format!("+{}", count - MARKS_TO_CLOSE), style);
            }
            y += 1;
        }
        y
    }

    fn draw_main(&self, fb: &mut FrameBuffer, scene: &Scene<'_>, x: u16, viewport: Viewport) {
        let snap = scene.snapshot;
        let base = CellStyle::new(TEXT, BG);
        let muted = base.with_fg(MUTED);
        let mut y = 1;

        let dart_no = (snap.turn.throw_index() as usize + 1).min(3);
        let header = format!("Round {} / {}", snap.round, snap.max_rounds);
        let end = fb.text(x, y, &header, base.bold());
        if snap.playable() {
            fb.text(end + 2, y, &format!("dart {}", dart_no), muted);
        }
        y += 2;

        for (i, slot) in snap.turn.slots().iter().enumerate() {
            let sx = x + i as u16 * (SLOT_W + SLOT_GAP);
            self.draw_slot(fb, slot, sx, y);
        }
        y += SLOT_H + 1;

        let row_w = 3 * SLOT_W + 2 * SLOT_GAP;
        fb.text(x, y, "ROUND TOTAL", base.with_fg(ACCENT));
        fb.text_right(x + row_w, y, &snap.round_points.to_string(), base.bold());
        y += 2;

        if snap.status == GameStatus::Bust {
            fb.text(x, y, "BUST", base.with_fg(DANGER).bold());
            fb.text(x + 6, y, "score reverts; press n for next round", muted);
            y += 2;
        } else if snap.turn.is_full() && snap.status == GameStatus::Playing {
            fb.text(x, y, "Round complete; press n for next round", muted);
            y += 2;
        }

        if let Some(prompt) = scene.prompt {
            if snap.playable() {
                let end = fb.text(x, y, "> ", base.with_fg(ACCENT));
                fb.text(end, y, prompt, base.bold());
            }
        }

        if !self.compact && viewport.height > 2 {
            fb.text(
                x,
                viewport.height - 2,
                "0-20 d/t b m ⏎ | ⌫ undo | n next | r retry | F5 restart | q quit",
                muted.dim(),
            );
        }
    }

    fn draw_slot(&self, fb: &mut FrameBuffer, slot: &Slot, x: u16, y: u16) {
        let base = CellStyle::new(TEXT, BG);
        match slot {
            Slot::Pending => {
                fb.frame(x, y, SLOT_W, SLOT_H, BoxGlyphs::DASHED, base.with_fg(MUTED));
                fb.text_centered(x, y + 2, SLOT_W, "?", base.with_fg(MUTED));
            }
            Slot::Thrown(dart) => {
                fb.frame(x, y, SLOT_W, SLOT_H, BoxGlyphs::LIGHT, base.with_fg(ACCENT));
                let style = if dart.throw.is_miss() {
                    base.with_fg(DANGER).bold()
                } else {
                    base.bold()
                };
                fb.text_centered(x, y + 2, SLOT_W, dart.label.as_str(), style);
            }
        }
    }

    fn draw_result_overlay(&self, fb: &mut FrameBuffer, snap: &EngineSnapshot, viewport: Viewport) {
        let (title, color) = match (snap.status, snap.game_type) {
            (GameStatus::Finished, GameType::ZeroOne) => ("CHECKOUT!", GOOD),
            (GameStatus::Finished, GameType::Cricket) => ("ALL CLOSED!", GOOD),
            _ => ("GAME OVER", GOLD),
        };
        let (label, score) = match snap.board {
            BoardSnapshot::ZeroOne { remaining, .. } => ("REMAINING", remaining),
            BoardSnapshot::Cricket { total_score, .. } => ("FINAL SCORE", total_score),
        };

        let w = 30.min(viewport.width);
        let h = 8.min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;
        let panel = CellStyle::new(TEXT, PANEL);

        fb.fill_rect(x, y, w, h, panel);
        fb.frame(x, y, w, h, BoxGlyphs::LIGHT, panel.with_fg(color));
        fb.text_centered(x, y + 1, w, title, panel.with_fg(color).bold());
        fb.text_centered(x, y + 3, w, label, panel.with_fg(MUTED));
        fb.text_centered(x, y + 4, w, &score.to_string(), panel.bold());
        fb.text_centered(x, y + 6, w, "F5 new game · q quit", panel.with_fg(MUTED));
    }
}

/// Glyph for a mark count: `·`, `/`, `X`, then `⊗` once closed.
pub fn mark_glyph(count: u8) -> &'static str {
    match count {
        0 => "·",
        1 => "/",
        2 => "X",
        _ => "⊗",
    }
}
