use crate::FinAwareApp;
use crate::content::{ContentItem, ContentKind};
use crate::model::Page;
use crate::ui::helpers::myth_fact_card;
use crate::ui::layout::simple_panel;
use egui::{Context, Frame, RichText, Ui};

pub fn ui_dashboard(app: &mut FinAwareApp, ctx: &Context) {
    // Precomputed so the panel closure only needs `app` for navigation
    let greeting = app.greeting_name();
    let insights = app.dashboard_insights();
    let latest_market = app.latest(ContentKind::Market);
    let latest_ai = app.latest(ContentKind::Ai);
    let myths = app.recent(ContentKind::Myth, 3);
    let loading = ContentKind::ALL.map(|kind| app.is_loading(kind));

    simple_panel(ctx, 900.0, egui::Margin::symmetric(24, 20), |ui| {
        ui.label(RichText::new("Weekly pulse").small().strong());
        ui.heading(RichText::new(format!("Welcome back, {greeting} investor")).size(28.0));
        ui.label(
            "Get curated market briefings, AI impact snapshots and myth-busting facts \
             aligned with your investing style.",
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("View market desk ›").clicked() {
                app.go_to(Page::MarketUpdates);
            }
            if ui.button("AI digest ✨").clicked() {
                app.go_to(Page::AiUpdates);
            }
        });
        ui.add_space(12.0);

        ui.columns(insights.len(), |cols| {
            for (col, insight) in cols.iter_mut().zip(&insights) {
                Frame::group(col.style()).show(col, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(insight.label.to_uppercase()).small().weak());
                    ui.label(RichText::new(&insight.value).strong().size(18.0));
                    ui.label(RichText::new(&insight.helper).small());
                });
            }
        });
        ui.add_space(16.0);

        ui.columns(2, |cols| {
            let market = latest_card(&mut cols[0], "Latest Market Update", latest_market.as_ref(), loading[0]);
            if let Some(open) = market {
                app.open_item(ContentKind::Market, &open);
            }
            let ai = latest_card(&mut cols[1], "Latest AI Update", latest_ai.as_ref(), loading[1]);
            if let Some(open) = ai {
                app.open_item(ContentKind::Ai, &open);
            }
        });
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            ui.heading("Recent Myths vs Facts");
            if ui.link("View all").clicked() {
                app.go_to(Page::MythsFacts);
            }
        });
        ui.add_space(6.0);
        if loading[2] {
            ui.spinner();
        } else if myths.is_empty() {
            ui.label(RichText::new("No myths & facts available yet").weak());
        }
        for item in &myths {
            if let ContentItem::Myth(m) = item {
                myth_fact_card(ui, &m.myth, &m.fact, &m.why_it_matters);
            }
        }
    });
}

/// Card for the newest item of a feed. Returns the id to open when clicked.
fn latest_card(ui: &mut Ui, title: &str, item: Option<&ContentItem>, loading: bool) -> Option<String> {
    let mut open = None;
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).heading());
        ui.add_space(4.0);
        let Some(item) = item else {
            if loading {
                ui.spinner();
            } else {
                ui.label(RichText::new("Nothing published yet").weak());
            }
            return;
        };
        if let Some(week) = item.week_of() {
            ui.label(RichText::new(format!("Week of {week}")).small().weak());
        }
        ui.label(RichText::new(item.headline()).strong());
        let summary = match item {
            ContentItem::Market(m) => m.summary.as_str(),
            ContentItem::Ai(a) => a.summary.as_str(),
            ContentItem::Myth(m) => m.fact.as_str(),
        };
        ui.label(summary);
        if ui.link("Read more ›").clicked() {
            open = Some(item.id().to_owned());
        }
    });
    open
}
