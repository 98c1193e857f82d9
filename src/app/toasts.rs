use super::*;

/// Seconds a toast stays on screen.
pub const TOAST_SECONDS: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// UI time of first display; set by [`FinAwareApp::prune_toasts`].
    pub shown_at: Option<f64>,
}

impl FinAwareApp {
    pub fn toast_success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast {
            kind: ToastKind::Success,
            message: message.into(),
            shown_at: None,
        });
    }

    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast {
            kind: ToastKind::Error,
            message: message.into(),
            shown_at: None,
        });
    }

    /// Stamps new toasts with `now` and drops expired ones.
    pub fn prune_toasts(&mut self, now: f64) {
        for toast in &mut self.toasts {
            toast.shown_at.get_or_insert(now);
        }
        self.toasts
            .retain(|t| t.shown_at.is_some_and(|at| now - at < TOAST_SECONDS));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryContentStore;
    use crate::quiz::MemoryStore;

    fn app() -> FinAwareApp {
        FinAwareApp::with_stores(
            AppConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(MemoryContentStore::new()),
        )
    }

    #[test]
    fn toasts_expire_after_their_display_time() {
        let mut app = app();
        app.toast_success("saved");
        assert_eq!(app.toasts[0].shown_at, None);

        app.prune_toasts(10.0);
        assert_eq!(app.toasts[0].shown_at, Some(10.0));

        app.prune_toasts(10.0 + TOAST_SECONDS - 0.1);
        assert_eq!(app.toasts.len(), 1);

        app.toast_error("later");
        app.prune_toasts(10.0 + TOAST_SECONDS + 0.1);
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].message, "later");
        assert_eq!(app.toasts[0].kind, ToastKind::Error);
    }
}
