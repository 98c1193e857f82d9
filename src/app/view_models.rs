use super::*;
use crate::view_models::{ContentRow, Insight, QuizHeader};

impl FinAwareApp {
    /// Word shown in "Welcome back, … investor".
    pub fn greeting_name(&self) -> &'static str {
        self.results
            .load_result()
            .map(|r| r.profile.short_label())
            .unwrap_or("curious")
    }

    pub fn dashboard_insights(&mut self) -> Vec<Insight> {
        let result = self.results.load_result();
        let latest_market = self.latest(ContentKind::Market);
        let latest_ai = self.latest(ContentKind::Ai);

        vec![
            Insight {
                label: "Risk Profile",
                value: result
                    .as_ref()
                    .map(|r| r.profile.label().to_owned())
                    .unwrap_or_else(|| "Not set".into()),
                helper: if result.is_some() {
                    "Personalised insights unlocked".into()
                } else {
                    "Finish quiz to personalise data".into()
                },
            },
            Insight {
                label: "Market Snapshot",
                value: latest_market
                    .as_ref()
                    .and_then(|m| m.week_of().map(str::to_owned))
                    .unwrap_or_else(|| "This week".into()),
                helper: "Latest curated update".into(),
            },
            Insight {
                label: "AI Briefings",
                value: if latest_ai.is_some() {
                    "New insight ready".into()
                } else {
                    "Queued".into()
                },
                helper: latest_ai
                    .as_ref()
                    .map(|a| a.headline().to_owned())
                    .unwrap_or_else(|| "Stay tuned for the next drop".into()),
            },
        ]
    }

    pub fn quiz_header(&self) -> Option<QuizHeader> {
        let session = self.session.as_ref()?;
        let idx = session.current_index()?;
        Some(QuizHeader {
            position: idx + 1,
            total: session.total(),
            percent: session.progress_percent(),
        })
    }

    pub fn content_rows(&mut self, kind: ContentKind) -> Result<Vec<ContentRow>, String> {
        self.items(kind).map(|rows| {
            rows.iter()
                .map(|r| ContentRow {
                    id: r.id().to_owned(),
                    headline: r.headline().to_owned(),
                    week_of: r.week_of().map(str::to_owned),
                })
                .collect()
        })
    }
}
