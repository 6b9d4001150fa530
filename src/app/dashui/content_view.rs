//! Rendering of a single [`ContentBlock`]

use crate::app::content::{BlockLayout, Callout, ContentBlock, ContentItem};
use crate::app::roi::{format_euros, format_rate, RoiBreakdown, RoiInputs};
use eframe::egui;
use egui::{Color32, RichText, Ui};

const CARD_WIDTH: f32 = 300.0;

pub fn show_block(
    ui: &mut Ui,
    block: &ContentBlock,
    roi: &RoiBreakdown,
    inputs: &RoiInputs,
    accent: Color32,
) {
    ui.add_space(8.0);
    ui.label(RichText::new(block.heading).heading().strong().color(accent));
    ui.add_space(6.0);

    for paragraph in block.intro {
        ui.label(*paragraph);
        ui.add_space(4.0);
    }
    ui.add_space(6.0);

    match block.layout {
        BlockLayout::Bullets => show_bullets(ui, block.items),
        BlockLayout::Cards => show_cards(ui, block.items, accent),
        BlockLayout::RoiWorkedExample => show_roi_steps(ui, roi, inputs, accent),
    }

    if let Some(closing) = block.closing {
        ui.add_space(10.0);
        ui.label(RichText::new(closing).italics());
    }

    if let Some(callout) = &block.callout {
        ui.add_space(12.0);
        show_callout(ui, callout);
    }
}

fn show_bullets(ui: &mut Ui, items: &[ContentItem]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label("•");
            ui.label(RichText::new(item.title).strong());
            if !item.text.is_empty() {
                ui.label(item.text);
            }
        });
        ui.add_space(2.0);
    }
}

fn show_cards(ui: &mut Ui, items: &[ContentItem], accent: Color32) {
    ui.horizontal_wrapped(|ui| {
        for item in items {
            egui::Frame::group(ui.style())
                .inner_margin(egui::vec2(12.0, 10.0))
                .show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(item.title).strong().color(accent));
                        if let Some(price) = item.price {
                            ui.label(RichText::new(price).size(18.0).strong());
                        }
                        ui.label(item.text);
                        if let Some(note) = item.note {
                            ui.label(RichText::new(note).small().weak());
                        }
                    });
                });
        }
    });
}

fn show_callout(ui: &mut Ui, callout: &Callout) {
    let warn = ui.visuals().warn_fg_color;
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.5, warn))
        .inner_margin(egui::vec2(12.0, 10.0))
        .show(ui, |ui| {
            ui.label(RichText::new(format!("⚠ {}", callout.title)).strong().color(warn));
            ui.label(callout.text);
        });
}

fn roi_step(ui: &mut Ui, title: &str, accent: Color32, rows: &[(String, String)]) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::vec2(12.0, 10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width().min(620.0));
            ui.label(RichText::new(title).strong().color(accent));
            egui::Grid::new(title)
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    for (label, value) in rows {
                        ui.label(label);
                        ui.label(RichText::new(value).monospace());
                        ui.end_row();
                    }
                });
        });
    ui.add_space(8.0);
}

fn show_roi_steps(ui: &mut Ui, roi: &RoiBreakdown, inputs: &RoiInputs, accent: Color32) {
    ui.label(format!(
        "Worked example: a manufacturer with {} annual revenue.",
        format_euros(inputs.annual_revenue)
    ));
    ui.add_space(6.0);

    roi_step(
        ui,
        "Step 1: Quantify your risk",
        accent,
        &[
            ("Monthly revenue".into(), format_euros(roi.monthly_revenue)),
            (
                format!("Strategic rupture value ({})", format_rate(inputs.rupture_rate)),
                format_euros(roi.strategic_rupture_value),
            ),
            (
                "Estimated monthly cost of risk".into(),
                format_euros(roi.monthly_risk_cost),
            ),
        ],
    );

    roi_step(
        ui,
        "Step 2: Value preserved by our service",
        accent,
        &[
            (
                format!(
                    "Commercial value preserved ({} resolved)",
                    format_rate(inputs.resolution_rate)
                ),
                format_euros(roi.commercial_value_preserved),
            ),
            (
                "Operational cost savings".into(),
                format_euros(roi.operational_savings),
            ),
            (
                "Total value preserved".into(),
                format_euros(roi.total_value_preserved),
            ),
        ],
    );

    roi_step(
        ui,
        "Step 3: Cost of the service",
        accent,
        &[
            ("Monthly fixed fee".into(), format_euros(roi.fixed_fee)),
            (
                format!("Incentive ({})", format_rate(inputs.incentive_rate)),
                format_euros(roi.incentive_fee),
            ),
            (
                "Total monthly cost".into(),
                format_euros(roi.total_monthly_cost),
            ),
        ],
    );

    let roi_text = roi
        .roi_percent
        .map(|pct| format!("{:.0}%", pct))
        .unwrap_or_else(|| "n/a".to_string());
    roi_step(
        ui,
        "Step 4: Net gain & ROI",
        accent,
        &[
            (
                "Net monthly value".into(),
                format_euros(roi.net_monthly_value),
            ),
            ("Return on investment".into(), roi_text),
        ],
    );
}
