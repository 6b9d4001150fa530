use crate::app::dashui::app::ThemeChoice;
use eframe::egui;
use egui::RichText;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    OpenDraftWindow,
    Quit,
}

pub fn build_menu(ui: &mut egui::Ui, theme: &mut ThemeChoice) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("Deck", |ui| {
        if ui.button("Draft a customer notice").clicked() {
            menu_action = MenuAction::OpenDraftWindow;
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        for choice in ThemeChoice::ALL {
            ui.radio_value(theme, choice, choice.to_string());
        }
    });

    if menu_action == MenuAction::None && original_theme != *theme {
        MenuAction::ThemeChanged
    } else {
        menu_action
    }
}
