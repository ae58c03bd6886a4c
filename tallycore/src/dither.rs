//! Checkerboard dither overlays.
//!
//! Keys and menu entries are never filled solid. A pressed key gets a
//! tight 1px checkerboard, a hovered key a sparser one, so the label
//! underneath stays readable on a two-colour display.

use egui::{Color32, Painter, Pos2, Rect, Vec2};

/// Fill `rect` with a checkerboard of `color`.
///
/// `density` is the cell size in pixels; 1 colours every other pixel,
/// larger values spread the pattern out. The iteration bounds are snapped
/// inward once so every painted cell lies inside `rect`.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let cell = density.max(1) as i32;

    let left = rect.min.x.ceil() as i32;
    let top = rect.min.y.ceil() as i32;
    let right = rect.max.x.floor() as i32;
    let bottom = rect.max.y.floor() as i32;

    if left >= right || top >= bottom {
        return;
    }

    let stride = cell * 2;
    let pixel = Vec2::splat(1.0);

    let mut y = top;
    while y < bottom {
        let shifted = ((y - top) / cell) % 2 == 1;
        let mut x = left + if shifted { cell } else { 0 };
        while x < right {
            painter.rect_filled(
                Rect::from_min_size(Pos2::new(x as f32, y as f32), pixel),
                0.0,
                color,
            );
            x += stride;
        }
        y += cell;
    }
}

/// Overlay for a key held down.
pub fn draw_dither_pressed(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 1);
}

/// Overlay for a key under the pointer.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 2);
}

/// Dithered drop shadow offset 4px below and right of a floating window.
///
/// Call after `egui::Window::show()` with the window's rect.
pub fn draw_window_shadow(ctx: &egui::Context, window_rect: Rect) {
    let shadow_rect = window_rect.translate(Vec2::splat(4.0));
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("tally_shadows"),
    ));
    draw_dither_rect(&painter, shadow_rect, Color32::BLACK, 2);
}
