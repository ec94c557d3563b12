//! Main application for the Mystic Battle GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::Element;

/// Main Mystic Battle application
pub struct MysticApp {
    state: GameState,
    board_view: BoardView,
}

impl MysticApp {
    /// Create the app around an already configured game
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.state.session.engine_config();
                    let size = self.state.session.board().size();
                    ui.label(format!("{size}x{size} - AI depth {}", config.depth));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_element_picker(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_ai_card(ui);

                if self.state.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("MYSTIC BATTLE").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Fire > Air > Earth > Water > Fire").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Element selection for the next placement
    fn render_element_picker(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ELEMENT (1-4)").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for element in Element::ALL {
                    let text = RichText::new(element.name()).color(element_color(element));
                    ui.selectable_value(&mut self.state.selected, element, text);
                }
            });
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let score = self.state.session.score();
            ui.label(RichText::new(format!("{score:+}")).size(28.0).strong().color(score_color(score)));

            let board = self.state.session.board();
            ui.label(
                RichText::new(format!("{} / {} cells filled", board.filled_count(), board.size() * board.size()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last engine move and search statistics
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if self.state.is_ai_thinking() {
                ui.label(RichText::new("AI thinking...").size(12.0).color(TEXT_SECONDARY));
                return;
            }

            match (self.state.session.last_ai_move(), self.state.session.last_ai_result()) {
                (Some(mv), Some(result)) => {
                    ui.label(RichText::new(format!("AI plays {mv}")).size(13.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!("Search value: {}", result.score))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new(format!("{} nodes", result.nodes))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
                (None, Some(_)) => {
                    ui.label(RichText::new("AI skipped (board full)").size(12.0).color(TEXT_SECONDARY));
                }
                _ => {
                    ui.label(RichText::new("Waiting for your move").size(12.0).color(TEXT_MUTED));
                }
            }

            if let Some(time) = self.state.ai_thinking_time {
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let score = self.state.session.score();
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_PRIMARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(format!("Final score: {score:+}")).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(8.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let interactive = !self.state.is_game_over() && !self.state.is_ai_thinking();
            let last_moves = self.state.last_moves();

            let clicked = self.board_view.show(
                ui,
                self.state.session.board(),
                self.state.selected,
                &last_moves,
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // 1-4 - Select element
            let keys = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3, egui::Key::Num4];
            for (key, element) in keys.into_iter().zip(Element::ALL) {
                if i.key_pressed(key) {
                    self.state.selected = element;
                }
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for MysticApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.check_ai_result();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
