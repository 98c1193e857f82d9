use crate::FinAwareApp;
use crate::content::{ContentItem, ContentKind};
use crate::ui::helpers::{load_error, myth_fact_card};
use crate::ui::layout::simple_panel;
use egui::{Context, RichText};

pub fn ui_myths_facts(app: &mut FinAwareApp, ctx: &Context) {
    let rows = app.items(ContentKind::Myth);
    let loading = app.is_loading(ContentKind::Myth);

    simple_panel(ctx, 820.0, egui::Margin::symmetric(24, 20), |ui| {
        ui.heading(RichText::new("Myths vs Facts").size(28.0));
        ui.label("Common investing beliefs, checked against the evidence.");
        ui.add_space(12.0);

        match rows {
            Ok(_) if loading => {
                ui.spinner();
            }
            Err(e) => {
                if load_error(ui, &e) {
                    app.invalidate(ContentKind::Myth);
                }
            }
            Ok(rows) if rows.is_empty() => {
                ui.label(RichText::new("No myths & facts available yet").weak());
            }
            Ok(rows) => {
                for row in &rows {
                    if let ContentItem::Myth(m) = row {
                        myth_fact_card(ui, &m.myth, &m.fact, &m.why_it_matters);
                    }
                }
            }
        }
    });
}
