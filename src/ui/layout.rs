use crate::FinAwareApp;
use crate::model::Page;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &mut FinAwareApp, ctx: &Context) {
    let completed = app.results.has_completed();
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.strong("FinAware");
            ui.separator();

            let mut entries = vec![
                ("Home", Page::Dashboard),
                ("Market Updates", Page::MarketUpdates),
                ("AI Impact", Page::AiUpdates),
                ("Myths vs Facts", Page::MythsFacts),
            ];
            if app.config.admin_enabled {
                entries.push(("Admin", Page::Admin));
            }

            for (label, page) in entries {
                let active = is_section(&app.page, &page);
                if ui.add(Button::new(label).selected(active)).clicked() {
                    app.go_to(page);
                }
            }

            // Only meaningful once a result exists
            if completed {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⟲ Reset Quiz").clicked() {
                        app.confirm_reset = true;
                    }
                });
            }
        });
    });
}

/// Detail pages highlight their list entry.
fn is_section(current: &Page, entry: &Page) -> bool {
    match (current, entry) {
        (Page::MarketUpdateDetail(_), Page::MarketUpdates) => true,
        (Page::AiUpdateDetail(_), Page::AiUpdates) => true,
        _ => current == entry,
    }
}

pub fn bottom_panel(app: &mut FinAwareApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
                app.prefs.dark_mode = true;
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
                app.prefs.dark_mode = false;
            }
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                ui.small("Educational content only. Not financial advice.");
            });
        });
    });
}

/// Panel centred both vertically and horizontally, with a maximum content
/// width and an inner block `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Scrolling page body, capped at `max_width`.
pub fn simple_panel(ctx: &Context, max_width: f32, margin: egui::Margin, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let w = ui.available_width().min(max_width);
            ui.vertical_centered(|ui| {
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(margin)
                    .show(ui, |ui| {
                        ui.set_width(w);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                    });
            });
        });
    });
}

/// Two buttons of equal size in one row, centred in `panel_width`.
/// Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(left.0)))
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(right.0)))
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
