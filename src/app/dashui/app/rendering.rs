//! UI rendering for the top bar, section tabs, central panel and status bar

use super::DeckApp;
use crate::app::content::{DECK_TITLE, OFFER_SUBTITLE, OFFER_TITLE};
use crate::app::dashui::{content_view, menu};
use crate::app::sections::{Offer, Section};
use crate::log_info;
use eframe::egui;
use egui::RichText;

impl DeckApp {
    /// Menu, deck title and the offer selector
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                match menu::build_menu(ui, &mut self.theme) {
                    menu::MenuAction::ThemeChanged => {
                        self.apply_theme(ctx);
                        log_info!("Theme changed to {}", self.theme);
                    }
                    menu::MenuAction::OpenDraftWindow => self.draft_window.open = true,
                    menu::MenuAction::Quit => self.request_close(ctx),
                    menu::MenuAction::None => {}
                }

                ui.separator();
                ui.label(RichText::new(DECK_TITLE).strong());
                ui.separator();

                let active_offer = self.state.router.active_offer();
                for offer in Offer::ALL {
                    if ui
                        .selectable_label(active_offer == offer, offer.title())
                        .clicked()
                    {
                        self.state.router.select_offer(offer);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.draft_window.open, "✉ Draft Notice")
                        .clicked()
                    {
                        self.draft_window.open = !self.draft_window.open;
                    }
                });
            });
        });
    }

    /// One tab per section; hidden for offers without sections
    pub(super) fn render_section_tabs(&mut self, ctx: &egui::Context) {
        if !self.state.router.active_offer().has_sections() {
            return;
        }

        let accent = self.accent_color();
        egui::TopBottomPanel::top("section_tabs").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(OFFER_TITLE).heading().color(accent));
                ui.label(RichText::new(OFFER_SUBTITLE).italics());
            });
            ui.add_space(6.0);

            ui.horizontal_wrapped(|ui| {
                let active = self.state.router.active_section();
                for section in Section::ALL {
                    if ui
                        .selectable_label(active == section, section.title())
                        .clicked()
                    {
                        self.state.router.select(section);
                    }
                }
            });
            ui.add_space(4.0);
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let block = self.state.router.visible_block();
        let roi = self.state.roi();
        let inputs = self.state.roi_inputs;
        let accent = self.accent_color();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    content_view::show_block(ui, block, &roi, &inputs, accent);
                });
        });
    }

    /// Build info, generator readiness and configuration problems
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "offerdeck {} ({})",
                            env!("CARGO_PKG_VERSION"),
                            env!("DECK_GIT_COMMIT")
                        ))
                        .small()
                        .weak(),
                    );
                    ui.separator();

                    if self.generator_ready {
                        ui.label(RichText::new("AI drafting ready").small());
                    } else {
                        ui.label(
                            RichText::new("AI drafting: API key not set")
                                .small()
                                .color(ui.visuals().warn_fg_color),
                        );
                    }

                    if let Some(err) = &self.config_error {
                        ui.separator();
                        ui.label(
                            RichText::new(format!("Config error: {}", err))
                                .small()
                                .color(ui.visuals().error_fg_color),
                        )
                        .on_hover_text(err);
                    }
                });
            });
    }
}
