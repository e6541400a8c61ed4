//! Canvas 2D backend
//!
//! Executes a `Scene` on an `HtmlCanvasElement`. Sprites fall back to plain
//! squares until their sheet has loaded.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{DrawCmd, SNAKE_COLOR, Scene, Sprite};

pub const SNAKE_SHEET: &str = "./images/snake-sprite.png";
pub const FRUIT_SHEET: &str = "./images/fruits-sprite.png";

/// Size of one tile in the sprite sheets, in source pixels
const SHEET_TILE: f64 = 10.0;

pub struct CanvasView {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    snake_sheet: Option<HtmlImageElement>,
    fruit_sheet: Option<HtmlImageElement>,
}

/// Load an image and wait until it can be drawn
async fn load_image(src: &str) -> Option<HtmlImageElement> {
    let img = HtmlImageElement::new().ok()?;
    img.set_src(src);
    match JsFuture::from(img.decode()).await {
        Ok(_) => Some(img),
        Err(e) => {
            log::warn!("Could not load {src}: {e:?}");
            None
        }
    }
}

impl CanvasView {
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            snake_sheet: None,
            fruit_sheet: None,
        })
    }

    pub async fn load_sprites(&mut self) {
        self.snake_sheet = load_image(SNAKE_SHEET).await;
        self.fruit_sheet = load_image(FRUIT_SHEET).await;
        log::info!(
            "Sprites loaded (snake: {}, fruit: {})",
            self.snake_sheet.is_some(),
            self.fruit_sheet.is_some()
        );
    }

    pub fn draw(&self, scene: &Scene) {
        let (w, h) = (scene.width as u32, scene.height as u32);
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }

        for cmd in &scene.commands {
            match cmd {
                DrawCmd::FillRect { x, y, w, h, color } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill_rect(*x as f64, *y as f64, *w as f64, *h as f64);
                }
                DrawCmd::Sprite {
                    sprite,
                    cx,
                    cy,
                    size,
                    rotation_deg,
                } => self.draw_sprite(*sprite, *cx as f64, *cy as f64, *size as f64, *rotation_deg as f64),
                DrawCmd::Text {
                    text,
                    x,
                    y,
                    font,
                    color,
                    centered,
                } => {
                    self.ctx.set_font(font);
                    self.ctx.set_fill_style_str(color);
                    self.ctx.set_text_align(if *centered { "center" } else { "left" });
                    let _ = self.ctx.fill_text(text, *x as f64, *y as f64);
                }
            }
        }
    }

    fn draw_sprite(&self, sprite: Sprite, cx: f64, cy: f64, size: f64, rotation_deg: f64) {
        let (sheet, tile) = match sprite {
            Sprite::Snake(part) => (self.snake_sheet.as_ref(), part.tile()),
            Sprite::Fruit(index) => (self.fruit_sheet.as_ref(), index),
        };
        let half = size / 2.0;

        let Some(sheet) = sheet else {
            self.ctx.set_fill_style_str(SNAKE_COLOR);
            self.ctx.fill_rect(cx - half, cy - half, size, size);
            return;
        };

        self.ctx.save();
        let _ = self.ctx.translate(cx, cy);
        let _ = self.ctx.rotate(rotation_deg.to_radians());
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                sheet,
                tile as f64 * SHEET_TILE,
                0.0,
                SHEET_TILE,
                SHEET_TILE,
                -half,
                -half,
                size,
                size,
            );
        self.ctx.restore();
    }
}
