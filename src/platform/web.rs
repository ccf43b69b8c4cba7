//! Browser host pieces
//!
//! `CanvasSurface` draws through the canvas 2D context; `DomHud` toggles the
//! overlay elements with the `active` class and writes their text.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::renderer::{Color, Surface};
use crate::ui::{Hud, Label, Panel};

/// Class that makes an overlay visible
const ACTIVE_CLASS: &str = "active";

fn css_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3]
    )
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    fn set_dash(&self, dash: &[f32]) {
        let pattern = dash
            .iter()
            .map(|d| JsValue::from_f64(*d as f64))
            .collect::<js_sys::Array>();
        if let Err(e) = self.ctx.set_line_dash(&pattern) {
            log::warn!("setLineDash failed: {:?}", e);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, dash: &[f32]) {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.set_dash(dash);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        self.set_dash(&[]);
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
        self.ctx.fill();
        self.ctx.close_path();
    }
}

/// DOM overlays of the game page
pub struct DomHud {
    menu: Element,
    countdown: Element,
    game_over: Element,
    left_score: Element,
    right_score: Element,
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))
}

impl DomHud {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            menu: element(document, "menuScreen")?,
            countdown: element(document, "countdownScreen")?,
            game_over: element(document, "gameOverScreen")?,
            left_score: element(document, "player1Score")?,
            right_score: element(document, "player2Score")?,
        })
    }

    fn panel(&self, panel: Panel) -> &Element {
        match panel {
            Panel::Menu => &self.menu,
            Panel::Countdown => &self.countdown,
            Panel::GameOver => &self.game_over,
        }
    }

    fn label(&self, label: Label) -> &Element {
        match label {
            Label::Countdown => &self.countdown,
            Label::GameOver => &self.game_over,
            Label::LeftScore => &self.left_score,
            Label::RightScore => &self.right_score,
        }
    }
}

impl Hud for DomHud {
    fn set_visible(&mut self, panel: Panel, visible: bool) {
        let classes = self.panel(panel).class_list();
        let result = if visible {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if let Err(e) = result {
            log::warn!("Could not toggle {:?}: {:?}", panel, e);
        }
    }

    fn set_text(&mut self, label: Label, text: &str) {
        self.label(label).set_text_content(Some(text));
    }
}
