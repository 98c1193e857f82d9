use crate::FinAwareApp;
use crate::content::{ContentItem, ContentKind};
use crate::model::Page;
use crate::ui::helpers::{detail_section, load_error};
use crate::ui::layout::simple_panel;
use crate::view_models::ai_sections;
use egui::{Context, Frame, RichText};

pub fn ui_ai_updates(app: &mut FinAwareApp, ctx: &Context) {
    let rows = app.filtered_items(ContentKind::Ai);
    let loading = app.is_loading(ContentKind::Ai);

    simple_panel(ctx, 820.0, egui::Margin::symmetric(24, 20), |ui| {
        ui.heading(RichText::new("AI Impact Updates").size(28.0));
        ui.label("How AI is reshaping sectors, products and markets, week by week.");
        ui.add_space(10.0);
        ui.add(
            egui::TextEdit::singleline(&mut app.search)
                .hint_text("Search AI updates...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);

        match rows {
            Ok(_) if loading => {
                ui.spinner();
            }
            Err(e) => {
                if load_error(ui, &e) {
                    app.invalidate(ContentKind::Ai);
                }
            }
            Ok(rows) if rows.is_empty() => {
                ui.label(RichText::new("No AI updates found").weak());
            }
            Ok(rows) => {
                for row in &rows {
                    let ContentItem::Ai(a) = row else { continue };
                    Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(format!("Week of {}", a.week_of)).small().weak());
                        ui.label(RichText::new(&a.title).heading());
                        ui.label(&a.summary);
                        if ui.link("Read more ›").clicked() {
                            app.open_item(ContentKind::Ai, &a.id);
                        }
                    });
                    ui.add_space(8.0);
                }
            }
        }
    });
}

pub fn ui_ai_update_detail(app: &mut FinAwareApp, ctx: &Context, id: &str) {
    let item = app.detail(ContentKind::Ai, id);
    let loading = app.is_loading_detail(ContentKind::Ai, id);

    simple_panel(ctx, 820.0, egui::Margin::symmetric(24, 20), |ui| {
        if ui.link("‹ Back to AI Updates").clicked() {
            app.go_to(Page::AiUpdates);
        }
        ui.add_space(8.0);

        if loading {
            ui.spinner();
            return;
        }
        let update = match item {
            Ok(ContentItem::Ai(update)) => update,
            Ok(_) => return,
            Err(e) => {
                if load_error(ui, &e) {
                    app.invalidate(ContentKind::Ai);
                }
                return;
            }
        };

        ui.label(RichText::new(format!("Week of {}", update.week_of)).weak());
        ui.heading(RichText::new(&update.title).size(30.0));
        ui.label(&update.summary);
        if let Some(url) = &update.image_url {
            ui.hyperlink_to("View image", url);
        }
        ui.add_space(12.0);
        for (title, body) in ai_sections(&update) {
            detail_section(ui, title, body);
        }
    });
}
