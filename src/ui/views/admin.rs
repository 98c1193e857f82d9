use crate::FinAwareApp;
use crate::content::ContentKind;
use crate::ui::helpers::{labeled_field, load_error};
use crate::ui::layout::{centered_panel, simple_panel};
use egui::{Button, Context, Frame, RichText, Ui};

pub fn ui_admin(app: &mut FinAwareApp, ctx: &Context) {
    if !app.config.admin_enabled {
        centered_panel(ctx, 80.0, 420.0, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Admin panel disabled");
                ui.label("Set FINAWARE_ADMIN=1 to manage content.");
            });
        });
        return;
    }

    let tab = app.admin_tab;
    let rows = app.content_rows(tab);
    let loading = app.is_loading(tab);
    let busy = app.is_busy();

    simple_panel(ctx, 900.0, egui::Margin::symmetric(24, 20), |ui| {
        ui.heading(RichText::new("Admin Dashboard").size(28.0));
        ui.label("Publish and manage weekly content.");
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            for kind in ContentKind::ALL {
                if ui
                    .add(Button::new(kind.tab_label()).selected(kind == tab))
                    .clicked()
                {
                    app.admin_tab = kind;
                }
            }
        });
        ui.separator();

        ui.label(RichText::new(format!("New {}", kind_title(tab))).heading());
        ui.add_space(6.0);
        form(app, ui, tab);
        let publish = ui.add_enabled_ui(!busy, |ui| ui.add_sized([160.0, 36.0], Button::new("Publish")));
        if publish.inner.clicked() {
            app.publish(tab);
        }

        ui.add_space(16.0);
        ui.label(RichText::new("Published Content").heading());
        ui.add_space(6.0);
        match rows {
            Ok(_) if loading => {
                ui.spinner();
            }
            Err(e) => {
                if load_error(ui, &e) {
                    app.invalidate(tab);
                }
            }
            Ok(rows) if rows.is_empty() => {
                ui.label(RichText::new("No content published yet").weak());
            }
            Ok(rows) => {
                for row in &rows {
                    Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(row.label());
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.button("🗑 Delete").clicked() {
                                    app.request_delete(tab, &row.id);
                                }
                            });
                        });
                    });
                }
            }
        }
    });
}

fn kind_title(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Market => "Market Update",
        ContentKind::Ai => "AI Update",
        ContentKind::Myth => "Myth vs Fact",
    }
}

fn form(app: &mut FinAwareApp, ui: &mut Ui, kind: ContentKind) {
    match kind {
        ContentKind::Market => {
            let f = &mut app.forms.market;
            labeled_field(ui, "Week of", &mut f.week_of, false);
            labeled_field(ui, "Image URL (optional)", &mut f.image_url, false);
            labeled_field(ui, "Title", &mut f.title, false);
            labeled_field(ui, "Summary", &mut f.summary, true);
            labeled_field(ui, "Macro & Global Markets", &mut f.macro_global, true);
            labeled_field(ui, "Forex", &mut f.forex, true);
            labeled_field(ui, "Crypto", &mut f.crypto, true);
            labeled_field(ui, "Major US News", &mut f.us_news, true);
            labeled_field(ui, "Liquidity / Rates", &mut f.liquidity_rates, true);
            labeled_field(ui, "Actionable Educational Insights", &mut f.insights, true);
        }
        ContentKind::Ai => {
            let f = &mut app.forms.ai;
            labeled_field(ui, "Week of", &mut f.week_of, false);
            labeled_field(ui, "Image URL (optional)", &mut f.image_url, false);
            labeled_field(ui, "Title", &mut f.title, false);
            labeled_field(ui, "Summary", &mut f.summary, true);
            labeled_field(ui, "Sector Impacts", &mut f.sector_impacts, true);
            labeled_field(ui, "Notable Launches", &mut f.notable_launches, true);
            labeled_field(ui, "Long Term Take", &mut f.long_term_take, true);
            labeled_field(ui, "Risks/Failures (optional)", &mut f.risks_failures, true);
        }
        ContentKind::Myth => {
            let f = &mut app.forms.myth;
            labeled_field(ui, "Myth", &mut f.myth, true);
            labeled_field(ui, "Fact", &mut f.fact, true);
            labeled_field(ui, "Why It Matters", &mut f.why_it_matters, true);
        }
    }
}
