//! Canvas2D renderer for the browser build

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::engine::{AlgorithmKind, Highlights, RunResult, Step};
use crate::error::InitError;
use crate::playback::RunSummary;

use super::histogram::{self, BACKGROUND, TEXT};
use super::{Renderer, StatusLine, Upcoming, intro_lines, result_lines, step_lines};

const FONT: &str = "14px serif";
const TEXT_X: f64 = 10.0;
const LINE_HEIGHT: f64 = 15.0;

/// What is on screen, kept so a resize can repaint it
#[derive(Debug, Default)]
struct Frame {
    data: Vec<u32>,
    highlights: Highlights,
    lines: Vec<StatusLine>,
}

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    frame: Frame,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, InitError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(InitError::NoContext2d)?;
        Ok(Self {
            canvas,
            ctx,
            frame: Frame::default(),
        })
    }

    /// Look up the `<canvas>` with the given id
    pub fn from_document(document: &Document, id: &str) -> Result<Self, InitError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| InitError::MissingElement(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| InitError::NotACanvas(id.to_string()))?;
        Self::new(canvas)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    /// Match the surface to new dimensions and repaint the cached frame
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.size() != (width, height) {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            log::debug!("Canvas resized to {width}x{height}");
        }
        self.paint();
    }

    fn paint(&self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let ctx = &self.ctx;

        ctx.set_fill_style_str(&BACKGROUND.css());
        ctx.fill_rect(0.0, 0.0, width, height);

        let bars = histogram::layout(
            width as f32,
            height as f32,
            &self.frame.data,
            &self.frame.highlights,
        );
        for bar in bars {
            ctx.set_fill_style_str(&bar.color.css());
            ctx.fill_rect(
                bar.origin.x as f64,
                bar.origin.y as f64,
                bar.size.x as f64,
                bar.size.y as f64,
            );
        }

        ctx.set_font(FONT);
        ctx.set_fill_style_str(&TEXT.css());
        for line in &self.frame.lines {
            if let Err(err) = ctx.fill_text(&line.text, TEXT_X, LINE_HEIGHT * line.line as f64) {
                log::warn!("fill_text failed: {err:?}");
            }
        }
    }

    fn show(&mut self, data: &[u32], highlights: Highlights, lines: Vec<StatusLine>) {
        self.frame.data.clear();
        self.frame.data.extend_from_slice(data);
        self.frame.highlights = highlights;
        self.frame.lines = lines;
        self.paint();
    }
}

impl Renderer for CanvasRenderer {
    fn draw_idle(&mut self, next: Option<AlgorithmKind>) {
        self.show(&[], Highlights::NONE, intro_lines(next));
    }

    fn draw_step(&mut self, kind: AlgorithmKind, step: &Step<'_>) {
        self.show(step.data, step.highlights, step_lines(kind));
    }

    fn draw_result(&mut self, result: &RunResult, summary: &RunSummary, upcoming: Upcoming) {
        self.show(&result.data, Highlights::NONE, result_lines(summary, upcoming));
    }
}
