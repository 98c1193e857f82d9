mod helpers;
pub mod layout;
pub mod views;

use crate::app::FinAwareApp;
use crate::model::Page;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for FinAwareApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // No stored result: every page except the quiz redirects
        self.enforce_quiz_guard();

        self.poll_content();
        self.prune_toasts(ctx.input(|i| i.time));
        if !self.toasts.is_empty() || self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        top_panel(self, ctx);
        bottom_panel(self, ctx);

        match self.page.clone() {
            Page::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            Page::MarketUpdates => views::market_updates::ui_market_updates(self, ctx),
            Page::MarketUpdateDetail(id) => views::market_updates::ui_market_update_detail(self, ctx, &id),
            Page::AiUpdates => views::ai_updates::ui_ai_updates(self, ctx),
            Page::AiUpdateDetail(id) => views::ai_updates::ui_ai_update_detail(self, ctx, &id),
            Page::MythsFacts => views::myths_facts::ui_myths_facts(self, ctx),
            Page::Quiz => views::quiz::ui_quiz(self, ctx),
            Page::Admin => views::admin::ui_admin(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
        if self.pending_delete.is_some() {
            self.confirm_delete(ctx);
        }

        helpers::show_toasts(&self.toasts, ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
