use crate::FinAwareApp;
use crate::content::{ContentItem, ContentKind};
use crate::model::Page;
use crate::ui::helpers::{detail_section, load_error};
use crate::ui::layout::simple_panel;
use crate::view_models::market_sections;
use egui::{Context, Frame, RichText};

pub fn ui_market_updates(app: &mut FinAwareApp, ctx: &Context) {
    let rows = app.filtered_items(ContentKind::Market);
    let loading = app.is_loading(ContentKind::Market);

    simple_panel(ctx, 820.0, egui::Margin::symmetric(24, 20), |ui| {
        ui.heading(RichText::new("World Market Updates").size(28.0));
        ui.label("Weekly briefings on global markets, currencies, crypto and rates.");
        ui.add_space(10.0);
        ui.add(
            egui::TextEdit::singleline(&mut app.search)
                .hint_text("Search market updates...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);

        match rows {
            Ok(_) if loading => {
                ui.spinner();
            }
            Err(e) => {
                if load_error(ui, &e) {
                    app.invalidate(ContentKind::Market);
                }
            }
            Ok(rows) if rows.is_empty() => {
                ui.label(RichText::new("No market updates found").weak());
            }
            Ok(rows) => {
                for row in &rows {
                    let ContentItem::Market(m) = row else { continue };
                    Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(format!("Week of {}", m.week_of)).small().weak());
                        ui.label(RichText::new(&m.title).heading());
                        ui.label(&m.summary);
                        if ui.link("Read more ›").clicked() {
                            app.open_item(ContentKind::Market, &m.id);
                        }
                    });
                    ui.add_space(8.0);
                }
            }
        }
    });
}

pub fn ui_market_update_detail(app: &mut FinAwareApp, ctx: &Context, id: &str) {
    let item = app.detail(ContentKind::Market, id);
    let loading = app.is_loading_detail(ContentKind::Market, id);

    simple_panel(ctx, 820.0, egui::Margin::symmetric(24, 20), |ui| {
        if ui.link("‹ Back to Market Updates").clicked() {
            app.go_to(Page::MarketUpdates);
        }
        ui.add_space(8.0);

        if loading {
            ui.spinner();
            return;
        }
        let update = match item {
            Ok(ContentItem::Market(update)) => update,
            Ok(_) => return,
            Err(e) => {
                if load_error(ui, &e) {
                    app.invalidate(ContentKind::Market);
                }
                return;
            }
        };

        ui.label(RichText::new(format!("Week of {}", update.week_of)).weak());
        ui.heading(RichText::new(&update.title).size(30.0));
        ui.label(&update.summary);
        if let Some(url) = &update.image_url {
            ui.hyperlink_to("View chart", url);
        }
        ui.add_space(12.0);
        for (title, body) in market_sections(&update) {
            detail_section(ui, title, body);
        }
    });
}
