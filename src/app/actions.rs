use super::*;

impl FinAwareApp {
    // ----------- QUIZ -----------

    pub fn choose_option(&mut self, option_idx: usize) {
        self.session_mut().choose_option(option_idx);
    }

    /// "Next"/"Finish". Does nothing while the current question is unanswered.
    pub fn next_question(&mut self) {
        let session = self
            .session
            .get_or_insert_with(|| QuizSession::new(quiz_questions()));
        if let Err(e) = session.next(&mut self.results) {
            log::error!("could not save quiz result: {e}");
            self.toast_error("Could not save your quiz result");
        }
    }

    pub fn previous_question(&mut self) {
        self.session_mut().back();
    }

    // ----------- CONTENT -----------

    /// Validates the admin form of `kind` and inserts it as one row.
    pub fn publish(&mut self, kind: ContentKind) {
        let record = match self.forms.to_insert(kind) {
            Ok(record) => record,
            Err(e) => {
                self.toast_error(format!("Failed to publish {}: {e}", kind.noun()));
                return;
            }
        };

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(remote) = self.remote.clone() {
                self.spawn_content(async move {
                    let result = remote.insert(&record).await;
                    ContentReply::Inserted(record, result)
                });
                return;
            }
        }
        let result = self.content.insert(record.clone());
        self.apply_reply(ContentReply::Inserted(record, result));
    }

    /// Asks for confirmation before [`FinAwareApp::delete_item`].
    pub fn request_delete(&mut self, kind: ContentKind, id: &str) {
        self.pending_delete = Some((kind, id.to_owned()));
    }

    pub fn delete_item(&mut self, kind: ContentKind, id: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(remote) = self.remote.clone() {
                let id = id.to_owned();
                self.spawn_content(async move {
                    let result = remote.delete(kind, &id).await;
                    ContentReply::Deleted(kind, id, result)
                });
                return;
            }
        }
        let result = self.content.delete(kind, id);
        self.apply_reply(ContentReply::Deleted(kind, id.to_owned(), result));
    }
}
