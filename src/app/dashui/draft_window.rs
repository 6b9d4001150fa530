//! Customer-notice drafting window

use crate::app::draft::{Clipboard, ClipboardError, DraftField, DraftGenerator, DraftResult};
use crate::app::notifications::NotificationManager;
use crate::log_warn;
use eframe::egui;
use egui::{Context, RichText, Ui};

/// Writes through egui's platform clipboard integration
pub struct EguiClipboard<'a> {
    ctx: &'a Context,
}

impl<'a> EguiClipboard<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }
}

impl Clipboard for EguiClipboard<'_> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct DraftWindow {
    pub open: bool,
    show_error_details: bool,
}

impl DraftWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        ctx: &Context,
        drafts: &mut DraftGenerator,
        notifications: &mut NotificationManager,
    ) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        egui::Window::new("Draft a Customer Notice")
            .open(&mut open)
            .default_width(520.0)
            .resizable(true)
            .collapsible(false)
            .show(ctx, |ui| {
                self.ui_content(ui, ctx, drafts, notifications);
            });
        self.open = open;
    }

    fn ui_content(
        &mut self,
        ui: &mut Ui,
        ctx: &Context,
        drafts: &mut DraftGenerator,
        notifications: &mut NotificationManager,
    ) {
        ui.label("Describe the delay and let the assistant write a first version of the notice.");
        ui.add_space(8.0);

        for field in DraftField::ALL {
            ui.label(RichText::new(field.label()).strong());
            ui.add(
                egui::TextEdit::multiline(drafts.field_mut(field))
                    .hint_text(field.hint())
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(4.0);
        }

        ui.collapsing("Prompt preview", |ui| {
            ui.label(RichText::new(drafts.prompt_preview()).monospace().small());
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let pending = drafts.is_pending();
            if ui
                .add_enabled(!pending, egui::Button::new("Generate Draft"))
                .clicked()
            {
                self.show_error_details = false;
                drafts.submit();
            }
            if pending {
                ui.spinner();
                ui.label("Generating...");
            }
        });

        ui.separator();
        self.show_result(ui, ctx, drafts, notifications);
    }

    fn show_result(
        &mut self,
        ui: &mut Ui,
        ctx: &Context,
        drafts: &DraftGenerator,
        notifications: &mut NotificationManager,
    ) {
        match drafts.result() {
            DraftResult::Empty | DraftResult::Pending => {}
            DraftResult::Success(text) => {
                ui.label(RichText::new("Generated draft").strong());
                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .show(ui, |ui| {
                        ui.add(egui::Label::new(text.as_str()).selectable(true));
                    });
                ui.add_space(4.0);
                if ui.button("📋 Copy").clicked() {
                    match drafts.copy_result_to_clipboard(&mut EguiClipboard::new(ctx)) {
                        Ok(true) => {
                            notifications.success("Copied", "The draft is on your clipboard.");
                        }
                        Ok(false) => {}
                        Err(e) => {
                            log_warn!("Copy to clipboard failed: {}", e);
                            notifications.error("Copy failed", e.to_string());
                        }
                    }
                }
            }
            DraftResult::Failed(err) => {
                ui.colored_label(ui.visuals().error_fg_color, err.user_message());
                ui.checkbox(&mut self.show_error_details, "Show details");
                if self.show_error_details {
                    ui.label(RichText::new(err.to_string()).monospace().small());
                }
            }
        }
    }
}
