// src/ui/helpers.rs
use crate::app::{Toast, ToastKind};
use egui::{Button, Color32, Context, Frame, RichText, Ui, Vec2};

/// Quiz answer button; highlighted when it is the recorded answer.
pub fn option_button(ui: &mut Ui, label: &str, width: f32, selected: bool) -> bool {
    ui.add(
        Button::new(label)
            .selected(selected)
            .min_size(Vec2::new(width, 40.0)),
    )
    .clicked()
}

pub fn labeled_field(ui: &mut Ui, label: &str, value: &mut String, multiline: bool) {
    ui.label(label);
    if multiline {
        ui.add(
            egui::TextEdit::multiline(value)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
    } else {
        ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
    }
    ui.add_space(6.0);
}

/// Shows a fetch error with a retry button. Returns `true` on retry.
pub fn load_error(ui: &mut Ui, message: &str) -> bool {
    ui.colored_label(ui.visuals().error_fg_color, format!("Could not load content: {message}"));
    ui.button("Retry").clicked()
}

/// Boxed titled block of body text.
pub fn detail_section(ui: &mut Ui, title: &str, body: &str) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).heading());
        ui.add_space(4.0);
        ui.label(body);
    });
    ui.add_space(8.0);
}

pub fn myth_fact_card(ui: &mut Ui, myth: &str, fact: &str, why_it_matters: &str) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("MYTH").small().strong().color(Color32::from_rgb(220, 80, 80)));
        ui.label(RichText::new(myth).strong());
        ui.add_space(6.0);
        ui.label(RichText::new("FACT").small().strong().color(Color32::from_rgb(80, 180, 120)));
        ui.label(fact);
        if !why_it_matters.is_empty() {
            ui.add_space(6.0);
            ui.label(RichText::new("WHY IT MATTERS").small().strong());
            ui.label(RichText::new(why_it_matters).weak());
        }
    });
    ui.add_space(8.0);
}

pub fn show_toasts(toasts: &[Toast], ctx: &Context) {
    if toasts.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -48.0])
        .show(ctx, |ui| {
            for toast in toasts {
                let color = match toast.kind {
                    ToastKind::Success => Color32::from_rgb(80, 180, 120),
                    ToastKind::Error => ui.visuals().error_fg_color,
                };
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(&toast.message).color(color));
                });
                ui.add_space(4.0);
            }
        });
}
