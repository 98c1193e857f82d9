use crate::FinAwareApp;
use crate::quiz::QuizStep;
use crate::ui::helpers::option_button;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut FinAwareApp, ctx: &Context) {
    match app.session_mut().step() {
        QuizStep::Question(_) => ui_question(app, ctx),
        QuizStep::Result(_) => ui_result(app, ctx),
    }
}

fn ui_question(app: &mut FinAwareApp, ctx: &Context) {
    let session = app.session_mut();
    let Some(question) = session.current_question() else {
        return;
    };
    let selected = session.selected();
    let can_advance = session.can_advance();
    let is_first = session.current_index() == Some(0);
    let next_label = if session.is_last_question() { "Finish" } else { "Next" };
    let Some(header) = app.quiz_header() else {
        return;
    };

    let max_width = 560.0;
    let est_height = 160.0 + 48.0 * question.options.len() as f32;
    centered_panel(ctx, est_height, max_width, |ui| {
        ui.horizontal(|ui| {
            ui.label(header.label());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{}%", header.percent));
            });
        });
        ui.add(ProgressBar::new(header.fraction()));
        ui.add_space(16.0);

        ui.label(RichText::new(&question.prompt).heading().strong());
        ui.add_space(12.0);

        let width = ui.available_width();
        for (idx, option) in question.options.iter().enumerate() {
            if option_button(ui, &option.text, width, selected == Some(option.value)) {
                app.choose_option(idx);
            }
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        let (back, next) = two_button_row(ui, width, ("Back", !is_first), (next_label, can_advance));
        if back {
            app.previous_question();
        }
        if next {
            app.next_question();
        }
    });
}

fn ui_result(app: &mut FinAwareApp, ctx: &Context) {
    let Some(profile) = app.session_mut().result() else {
        return;
    };
    centered_panel(ctx, 220.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Your Risk Profile").size(16.0));
            ui.add_space(8.0);
            ui.label(RichText::new(profile.label()).heading().strong().size(32.0));
            ui.add_space(12.0);
            ui.label(
                "Great! We'll personalize your experience based on your risk profile. \
                 You can retake the quiz anytime from the menu.",
            );
            ui.add_space(20.0);
            if ui
                .add_sized([200.0, 40.0], egui::Button::new("Get Started"))
                .clicked()
            {
                app.get_started();
            }
        });
    });
}
