use super::*;

impl FinAwareApp {
    /// Clears the stored result and sends the user back into the quiz.
    pub fn reset_quiz(&mut self) {
        self.confirm_reset = false;
        match self.results.clear_result() {
            Ok(()) => {
                log::info!("quiz result cleared");
                self.toast_success("Quiz reset successfully");
                self.restart_quiz();
            }
            Err(e) => {
                log::error!("could not clear quiz result: {e}");
                self.toast_error("Could not reset quiz");
            }
        }
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Reset Risk Profile Quiz?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(
                    "This will clear your current risk profile and allow you to retake the quiz.",
                );
                ui.label("Your personalized experience will be updated based on your new results.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.confirm_reset = false;
                    }
                    if ui.button("Reset Quiz").clicked() {
                        self.reset_quiz();
                    }
                });
            });
    }

    pub fn confirm_delete(&mut self, ctx: &egui::Context) {
        let Some((kind, id)) = self.pending_delete.clone() else {
            return;
        };
        egui::Window::new("Delete item?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to delete this item?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.pending_delete = None;
                    }
                    if ui.button("Delete").clicked() {
                        self.pending_delete = None;
                        self.delete_item(kind, &id);
                    }
                });
            });
    }
}
