//! 2D canvas rendering
//!
//! Drawing is a pure function of the current [`GameState`]: clear, pipes,
//! bird, then the game-over overlay. Sprites that are not `Ready` render as
//! flat-color rectangles.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::assets::{AssetState, Sprite};
use crate::sim::{GameState, Pipe};

/// Flat-color fallbacks matching the sprite palette
const PIPE_COLOR: &str = "#008000";
const BIRD_COLOR: &str = "#ffd700";
const OVERLAY_COLOR: &str = "rgba(0,0,0,0.5)";
const TEXT_COLOR: &str = "#fff";

/// The two sprites the game draws
pub struct SpriteSet {
    pub bird: Sprite,
    pub pipe: Sprite,
}

/// Draw one frame of the current state
pub fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    sprites: &SpriteSet,
) -> Result<(), JsValue> {
    let w = state.viewport.width as f64;
    let h = state.viewport.height as f64;

    ctx.clear_rect(0.0, 0.0, w, h);

    for pipe in &state.pipes {
        draw_pipe(ctx, pipe, h, &sprites.pipe)?;
    }

    draw_bird(ctx, state, &sprites.bird)?;

    if state.game_over {
        draw_game_over(ctx, w, h)?;
    }

    Ok(())
}

/// Draw one pipe as two rectangles around its gap
///
/// With the sprite ready, each half is the image at native height scaled to
/// the pipe width, anchored against the gap edge. The fallback fills the
/// full columns above and below the gap.
fn draw_pipe(
    ctx: &CanvasRenderingContext2d,
    pipe: &Pipe,
    canvas_h: f64,
    sprite: &Sprite,
) -> Result<(), JsValue> {
    let x = pipe.x as f64;
    let w = pipe.width as f64;
    let top_h = pipe.top_h as f64;
    let gap_bottom = pipe.gap_bottom() as f64;

    if sprite.state() == AssetState::Ready {
        let img = sprite.element();
        let img_h = img.natural_height() as f64;
        ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, top_h - img_h, w, img_h)?;
        ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, gap_bottom, w, img_h)?;
    } else {
        ctx.set_fill_style_str(PIPE_COLOR);
        ctx.fill_rect(x, 0.0, w, top_h);
        ctx.fill_rect(x, gap_bottom, w, canvas_h - gap_bottom);
    }

    Ok(())
}

fn draw_bird(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    sprite: &Sprite,
) -> Result<(), JsValue> {
    let bird = &state.bird;
    let (x, y) = (bird.pos.x as f64, bird.pos.y as f64);
    let (w, h) = (bird.size.x as f64, bird.size.y as f64);

    if sprite.state() == AssetState::Ready {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(sprite.element(), x, y, w, h)?;
    } else {
        ctx.set_fill_style_str(BIRD_COLOR);
        ctx.fill_rect(x, y, w, h);
    }

    Ok(())
}

/// Dim the scene and print the restart hint
fn draw_game_over(ctx: &CanvasRenderingContext2d, w: f64, h: f64) -> Result<(), JsValue> {
    ctx.set_fill_style_str(OVERLAY_COLOR);
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_text_align("center");
    ctx.set_font("48px sans-serif");
    ctx.fill_text("Game Over", w / 2.0, h / 2.0 - 40.0)?;
    ctx.set_font("24px sans-serif");
    ctx.fill_text("Tap / space to restart", w / 2.0, h / 2.0 + 10.0)?;

    Ok(())
}
