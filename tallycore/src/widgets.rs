//! Custom widgets — black outlines, dithered feedback

use crate::dither;
use crate::theme::Palette;
use egui::{Response, Stroke, Ui, Widget};

/// Action returned by window control buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    None,
    Close,
    Minimize,
}

/// Close and minimize boxes at the left of the menu bar.
///
/// Call at the start of the `menu_bar` closure.
pub fn window_control_buttons(ui: &mut Ui) -> WindowAction {
    let size = egui::vec2(14.0, 14.0);
    let stroke = Stroke::new(1.0, Palette::INK);
    let inset = 3.0;
    let mut action = WindowAction::None;

    let (close_rect, close_resp) = ui.allocate_exact_size(size, egui::Sense::click());
    if ui.is_rect_visible(close_rect) {
        let painter = ui.painter();
        painter.rect_filled(close_rect, 0.0, Palette::PAPER);
        painter.rect_stroke(close_rect, 0.0, stroke);
        if close_resp.hovered() {
            dither::draw_dither_hover(painter, close_rect);
        }
        let r = close_rect.shrink(inset);
        painter.line_segment([r.left_top(), r.right_bottom()], stroke);
        painter.line_segment([r.right_top(), r.left_bottom()], stroke);
    }
    if close_resp.clicked() {
        action = WindowAction::Close;
    }

    ui.add_space(2.0);

    let (min_rect, min_resp) = ui.allocate_exact_size(size, egui::Sense::click());
    if ui.is_rect_visible(min_rect) {
        let painter = ui.painter();
        painter.rect_filled(min_rect, 0.0, Palette::PAPER);
        painter.rect_stroke(min_rect, 0.0, stroke);
        if min_resp.hovered() {
            dither::draw_dither_hover(painter, min_rect);
        }
        let r = min_rect.shrink(inset);
        painter.hline(r.x_range(), r.center().y, stroke);
    }
    if min_resp.clicked() {
        action = WindowAction::Minimize;
    }

    ui.add_space(4.0);
    let (sep_rect, _) = ui.allocate_exact_size(egui::vec2(4.0, size.y), egui::Sense::hover());
    if ui.is_rect_visible(sep_rect) {
        ui.painter().vline(sep_rect.center().x, sep_rect.y_range(), stroke);
    }
    ui.add_space(4.0);

    action
}

/// A keypad key of fixed size. White face, 1px outline, dithered while
/// held or hovered.
pub struct KeyButton<'a> {
    label: &'a str,
    size: egui::Vec2,
    font_size: f32,
    latched: bool,
}

impl<'a> KeyButton<'a> {
    pub fn new(label: &'a str, size: egui::Vec2) -> Self {
        Self {
            label,
            size,
            font_size: 18.0,
            latched: false,
        }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Draw the key as held down, e.g. the operator currently pending.
    pub fn latched(mut self, latched: bool) -> Self {
        self.latched = latched;
        self
    }
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, Palette::PAPER);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Palette::INK));

            let held = response.is_pointer_button_down_on() || self.latched;
            if held {
                dither::draw_dither_pressed(painter, rect);
            } else if response.hovered() {
                dither::draw_dither_hover(painter, rect);
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                if held { Palette::PAPER } else { Palette::INK },
            );
        }

        response
    }
}

/// Status bar: white bg, 1px black border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(Palette::PAPER)
        .stroke(Stroke::new(1.0, Palette::INK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new(text).small());
        });
}
