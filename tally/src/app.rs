//! Calculator window

use egui::{Context, Event, Key};
use tally::{Calculator, Operator, TallyConfig, Token};
use tallycore::repaint::RepaintController;
use tallycore::theme::{consume_special_keys, menu_bar, Palette};
use tallycore::widgets::{status_bar, window_control_buttons, KeyButton, WindowAction};
use tallycore::TallyTheme;

/// The 4x4 grid, top row first.
const KEYPAD: [[Token; 4]; 4] = [
    [Token::Digit(1), Token::Digit(2), Token::Digit(3), Token::Operator(Operator::Add)],
    [Token::Digit(4), Token::Digit(5), Token::Digit(6), Token::Operator(Operator::Sub)],
    [Token::Digit(7), Token::Digit(8), Token::Digit(9), Token::Operator(Operator::Mul)],
    [Token::Point, Token::Digit(0), Token::Equals, Token::Operator(Operator::Div)],
];

/// The row under the grid.
const EDIT_ROW: [Token; 3] = [Token::Negate, Token::Delete, Token::Clear];

const DISPLAY_HEIGHT: f32 = 50.0;

pub struct TallyApp {
    calc: Calculator,
    config: TallyConfig,
    show_about: bool,
    repaint: RepaintController,
}

impl TallyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: TallyConfig) -> Self {
        Self {
            calc: Calculator::new(),
            config,
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn press(&mut self, token: Token) {
        self.calc.press(token);
        self.repaint.mark_needs_repaint();
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);

        let tokens: Vec<Token> = ctx.input(|i| i.events.iter().filter_map(key_token).collect());
        for token in tokens {
            self.press(token);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        TallyTheme::display_frame().show(ui, |ui| {
            ui.set_min_height(DISPLAY_HEIGHT);
            ui.set_max_height(DISPLAY_HEIGHT);
            ui.set_min_width(ui.available_width());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(self.calc.display())
                        .font(egui::FontId::proportional(self.config.display_font_size))
                        .color(Palette::INK)
                        .strong(),
                );
            });
        });
    }

    fn render_key(&mut self, ui: &mut egui::Ui, token: Token, width: f32) {
        let label = key_label(token);
        let latched = matches!(token, Token::Operator(op)
            if self.calc.evaluator().pending_operator == Some(op) && self.calc.buffer().is_empty());
        let key = KeyButton::new(&label, egui::vec2(width, self.config.key_height)).latched(latched);
        let response = ui.add(key);
        if response.clicked() {
            self.press(token);
        }
        // A focused key would also fire on Enter, on top of `=`.
        response.surrender_focus();
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let gap = ui.spacing().item_spacing.x;

        let width = (ui.available_width() - gap * 3.0) / 4.0;
        for row in KEYPAD {
            ui.horizontal(|ui| {
                for token in row {
                    self.render_key(ui, token, width);
                }
            });
        }

        ui.add_space(gap);

        let width = (ui.available_width() - gap * 2.0) / 3.0;
        ui.horizontal(|ui| {
            for token in EDIT_ROW {
                self.render_key(ui, token, width);
            }
        });
    }

    fn render_about(&mut self, ctx: &Context) {
        let resp = egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys: 0-9 . + - * / = Enter");
                ui.label("Backspace deletes, Esc clears, N negates");
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
        if let Some(r) = &resp {
            tallycore::dither::draw_window_shadow(ctx, r.response.rect);
        }
    }
}

impl eframe::App for TallyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.handle_keys(ctx);

        let mut window_action = WindowAction::None;
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                window_action = window_control_buttons(ui);
                ui.menu_button("edit", |ui| {
                    if ui.button("copy").clicked() {
                        let text = self.calc.display().to_string();
                        ui.output_mut(|o| o.copied_text = text);
                        ui.close_menu();
                    }
                    if ui.button("clear").clicked() {
                        self.press(Token::Clear);
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        match window_action {
            WindowAction::Close => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            WindowAction::Minimize => ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true)),
            WindowAction::None => {}
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar(ui, &self.calc.status());
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Palette::PAPER).inner_margin(egui::Margin::same(12.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(12.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }

        self.repaint.end_frame(ctx);
    }
}

/// Keyboard shortcut for an input event, if it maps to a keypad key.
fn key_token(event: &Event) -> Option<Token> {
    match event {
        Event::Text(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some('n' | 'N'), None) => Some(Token::Negate),
                (Some(c), None) => Token::from_char(c),
                _ => None,
            }
        }
        Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } if !modifiers.command => match key {
            Key::Enter => Some(Token::Equals),
            Key::Backspace => Some(Token::Delete),
            Key::Escape => Some(Token::Clear),
            _ => None,
        },
        _ => None,
    }
}

/// Button caption; negate keeps the "(-)" face.
fn key_label(token: Token) -> String {
    match token {
        Token::Negate => "(-)".to_string(),
        other => other.to_string(),
    }
}
