//! Render sink: draws the current board and ball state each frame
//!
//! The simulation never calls into here; the host hands the sink a
//! snapshot of the board and the in-flight balls once per frame.

use crate::sim::{Ball, Board};

/// Consumed interface of the renderer: one draw call per frame, no return
/// value flows back into the simulation.
pub trait RenderSink {
    fn draw(&mut self, board: &Board, balls: &[Ball]);
}

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::RenderSink;
    use crate::consts::PEG_RADIUS;
    use crate::sim::{Ball, Bin, Board};

    /// Pastel fills for the payout bins
    const BIN_COLORS: [&str; 8] = [
        "#F9A8D4", "#A2D2FF", "#FEC8D8", "#D1E8E2", "#F5D0A9", "#F1F5F3", "#D9E4F5", "#F4C7A1",
    ];
    const BIN_CORNER_RADIUS: f64 = 10.0;
    const PEG_COLOR: &str = "#FFFFFF";
    const BALL_COLOR: &str = "#FF0000";
    const LABEL_COLOR: &str = "#000000";
    const LABEL_FONT: &str = "16px Arial";

    /// Canvas2D implementation of the render sink
    pub struct CanvasRenderer {
        ctx: CanvasRenderingContext2d,
        width: f64,
        height: f64,
    }

    impl CanvasRenderer {
        pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
            let ctx = canvas
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("no 2d context"))?
                .dyn_into::<CanvasRenderingContext2d>()?;
            Ok(Self {
                ctx,
                width: canvas.width() as f64,
                height: canvas.height() as f64,
            })
        }

        fn draw_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
            self.ctx.begin_path();
            let _ = self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
            self.ctx.set_fill_style_str(color);
            self.ctx.fill();
        }

        /// Rounded rectangle via arcTo, filled, with a centered multiplier
        /// label
        fn draw_bin(&self, bin: &Bin, color: &str) {
            let (x, y) = (bin.x as f64, bin.y as f64);
            let (w, h) = (bin.width as f64, bin.height as f64);
            let r = BIN_CORNER_RADIUS;

            self.ctx.begin_path();
            self.ctx.move_to(x + r, y);
            let _ = self.ctx.arc_to(x + w, y, x + w, y + h, r);
            let _ = self.ctx.arc_to(x + w, y + h, x, y + h, r);
            let _ = self.ctx.arc_to(x, y + h, x, y, r);
            let _ = self.ctx.arc_to(x, y, x + w, y, r);
            self.ctx.close_path();
            self.ctx.set_fill_style_str(color);
            self.ctx.fill();

            self.ctx.set_fill_style_str(LABEL_COLOR);
            self.ctx.set_font(LABEL_FONT);
            let label = format!("x{}", bin.multiplier);
            let text_width = self
                .ctx
                .measure_text(&label)
                .map(|m| m.width())
                .unwrap_or(0.0);
            let _ = self
                .ctx
                .fill_text(&label, x + (w - text_width) / 2.0, y + h / 1.5);
        }
    }

    impl RenderSink for CanvasRenderer {
        fn draw(&mut self, board: &Board, balls: &[Ball]) {
            self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

            for peg in &board.pegs {
                self.draw_circle(
                    peg.pos.x as f64,
                    peg.pos.y as f64,
                    PEG_RADIUS as f64,
                    PEG_COLOR,
                );
            }

            for ball in balls {
                self.draw_circle(
                    ball.pos.x as f64,
                    ball.pos.y as f64,
                    ball.radius as f64,
                    BALL_COLOR,
                );
            }

            for (i, bin) in board.bins.iter().enumerate() {
                self.draw_bin(bin, BIN_COLORS[i % BIN_COLORS.len()]);
            }
        }
    }
}
