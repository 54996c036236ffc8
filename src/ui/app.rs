//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::theme::*;
use crate::controller::{Controller, GameMode, GameResult};
use crate::strategies::{Difficulty, Heuristic};
use crate::{Color, GameError, Settings};

/// Main Othello application
pub struct OthelloApp {
    controller: Controller,
    board_view: BoardView,
    show_debug: bool,
    show_valid_moves: bool,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self::from_settings(Settings::default())
    }
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        Self::from_settings(settings)
    }

    fn from_settings(settings: Settings) -> Self {
        Self {
            controller: Controller::from_settings(&settings),
            board_view: BoardView::default(),
            show_debug: settings.show_debug,
            show_valid_moves: settings.show_valid_moves,
        }
    }

    /// Start over in a new mode, keeping the current opponent
    fn new_game(&mut self, mode: GameMode) {
        let strategy = self.controller.strategy();
        self.controller = Controller::with_mode(mode, strategy);
        log::info!("new game: {mode:?}");
    }

    fn report(&mut self, result: Result<(), GameError>) {
        if let Err(err) = result {
            log::debug!("rejected: {err}");
            self.controller.message = Some(err.to_string());
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Color::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Color::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        let result = self.controller.undo();
                        self.report(result);
                        ui.close_menu();
                    }
                    if ui.button("Redo (R)").clicked() {
                        let result = self.controller.redo();
                        self.report(result);
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    let current = self.controller.strategy();
                    for difficulty in Difficulty::ALL {
                        let selected = current == difficulty.strategy();
                        if ui.radio(selected, difficulty.label()).clicked() {
                            self.controller.set_strategy(difficulty.strategy());
                            ui.close_menu();
                        }
                    }

                    if current.heuristic().is_some() {
                        ui.separator();
                        ui.menu_button("Heuristic", |ui| {
                            for heuristic in Heuristic::ALL {
                                let selected = current.heuristic() == Some(heuristic);
                                if ui.radio(selected, heuristic.label()).clicked() {
                                    self.controller.set_strategy(current.with_heuristic(heuristic));
                                    ui.close_menu();
                                }
                            }
                        });
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_valid_moves, "Valid Moves");
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.controller.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {}", human_color.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.controller.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result);
                }

                if let Some(msg) = self.controller.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn button_frame() -> Frame {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
    }

    fn card_button(ui: &mut egui::Ui, text: &str) -> bool {
        Self::button_frame()
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let opponent = match self.controller.mode {
                GameMode::PvE { .. } => format!("vs AI: {}", self.opponent_label()),
                GameMode::PvP => "two players".to_string(),
            };
            ui.label(RichText::new(opponent).size(11.0).color(TEXT_MUTED));
        });
    }

    fn opponent_label(&self) -> String {
        let current = self.controller.strategy();
        let name = Difficulty::ALL
            .into_iter()
            .find(|d| d.strategy() == current)
            .map_or("Custom", Difficulty::label);
        match current.heuristic() {
            Some(heuristic) => format!("{name} ({})", heuristic.label()),
            None => name.to_string(),
        }
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.controller.current_turn == Color::Black;
            let (disk_char, accent) = if is_black {
                ("●", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let disk_color = if is_black { TEXT_PRIMARY } else { egui::Color32::from_rgb(30, 30, 35) };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    disk_char,
                    egui::FontId::proportional(28.0),
                    disk_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = self.controller.current_turn.name().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.controller.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.controller.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.controller.is_ai_turn() {
                        ("AI to move", TEXT_SECONDARY)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render disk counts for both sides
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DISKS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let board = &self.controller.board;
            let black = board.score(Color::Black);
            let white = board.score(Color::White);

            for (symbol, name, count, other) in [("●", "Black", black, white), ("○", "White", white, black)] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(symbol).size(18.0).color(egui::Color32::from_rgb(200, 200, 205)));
                    ui.label(RichText::new(name).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = RichText::new(count.to_string()).size(16.0).strong();
                        let text = if count > other { text.color(WIN_HIGHLIGHT) } else { text.color(TEXT_PRIMARY) };
                        ui.label(text);
                    });
                });
                ui.add_space(4.0);
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} empty squares", board.empty_count()))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.controller.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 3.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.controller.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.controller.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::card_button(ui, "↩ Undo") {
                    let result = self.controller.undo();
                    self.report(result);
                }
                ui.add_space(4.0);
                if Self::card_button(ui, "↪ Redo") {
                    let result = self.controller.redo();
                    self.report(result);
                }
                ui.add_space(4.0);
                if Self::card_button(ui, "Hint") {
                    self.controller.request_hint();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.controller.history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.controller.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{:?}", result.search_type))
                                    .size(11.0)
                                    .strong()
                                    .color(TIMER_NORMAL),
                            );
                            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });

                    if let Some(pos) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(RichText::new(format!("→ {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                } else {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: GameResult) {
        let (headline, symbol, accent) = match result.winner {
            Color::Black => ("BLACK WINS!", "●", egui::Color32::from_rgb(70, 70, 75)),
            Color::White => ("WHITE WINS!", "○", egui::Color32::from_rgb(220, 220, 225)),
            Color::None => ("DRAW", "◐", TEXT_SECONDARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 60.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    });

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} - {}", result.black, result.white))
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);

                    let clicked = Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY))
                                    .sense(egui::Sense::click()),
                            )
                            .clicked()
                        })
                        .inner;
                    if clicked {
                        self.controller.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let interactive = self.controller.game_over.is_none()
                && self.controller.is_human_turn()
                && !self.controller.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.controller.board,
                self.controller.current_turn,
                self.controller.last_move,
                self.controller.suggested_move,
                self.show_valid_moves,
                interactive,
            );

            if let Some(pos) = clicked {
                let result = self.controller.try_move(pos);
                self.report(result);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, undo, redo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint {
            self.controller.request_hint();
        }
        if undo {
            let result = self.controller.undo();
            self.report(result);
        }
        if redo {
            let result = self.controller.redo();
            self.report(result);
        }
        if new_game {
            self.controller.reset();
        }
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.controller.check_ai_result();

        if self.controller.is_ai_turn() && !self.controller.is_ai_thinking() && self.controller.game_over.is_none() {
            self.controller.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.controller.is_ai_thinking() {
            ctx.request_repaint();
        } else {
            // Keep the move timer ticking
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
