//! Modular implementation of DeckApp
//!
//! - initialization: app creation and generator wiring
//! - theme: Catppuccin theme selection
//! - rendering: top bar, section tabs, central panel and status bar

use super::draft_window::DraftWindow;
use crate::app::draft::TextGenerator;
use crate::app::notifications::{NotificationManager, NotificationType};
use crate::app::state::DeckState;
use eframe::egui;
use std::sync::Arc;
use std::time::Duration;

mod initialization;
mod rendering;
mod theme;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Latte,
    Frappe,
    Macchiato,
    #[default]
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

pub struct DeckApp {
    pub state: DeckState,
    pub theme: ThemeChoice,
    pub draft_window: DraftWindow,
    pub notifications: NotificationManager,
    /// Start-up configuration problem, shown in the status bar
    pub config_error: Option<String>,
    /// Whether the text-generation service has credentials
    pub generator_ready: bool,
    theme_applied: bool,
}

impl DeckApp {
    /// Build the app around an already configured generator. The theme is
    /// applied on the first frame.
    pub fn with_generator(
        generator: Arc<dyn TextGenerator>,
        theme: ThemeChoice,
        generator_ready: bool,
    ) -> Self {
        Self {
            state: DeckState::new(generator),
            theme,
            draft_window: DraftWindow::new(),
            notifications: NotificationManager::new(),
            config_error: None,
            generator_ready,
            theme_applied: false,
        }
    }

    /// Draw one frame
    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.theme_applied {
            self.apply_theme(ctx);
            self.theme_applied = true;
        }

        // Pick up finished draft requests before drawing
        if self.state.drafts.poll() {
            if !self.draft_window.open && self.state.drafts.result().text().is_some() {
                self.notifications.add(
                    NotificationType::Info,
                    "Draft ready",
                    "Open ✉ Draft Notice to review it.",
                );
            }
            ctx.request_repaint();
        }
        if self.state.drafts.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        self.render_section_tabs(ctx);
        self.render_central_panel(ctx);

        self.draft_window
            .show(ctx, &mut self.state.drafts, &mut self.notifications);
        self.notifications.show_toasts(ctx);
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
