// src/view_models.rs

use crate::content::{AiUpdate, MarketUpdate};

/// One of the stat cards on the dashboard hero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insight {
    pub label: &'static str,
    pub value: String,
    pub helper: String,
}

/// A row in the admin "Published Content" list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentRow {
    pub id: String,
    pub headline: String,
    pub week_of: Option<String>,
}

impl ContentRow {
    pub fn label(&self) -> String {
        match &self.week_of {
            Some(week) => format!("{}  ·  Week of {week}", self.headline),
            None => self.headline.clone(),
        }
    }
}

/// Header of the quiz page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizHeader {
    pub position: usize, // 1-based
    pub total: usize,
    pub percent: u32,
}

impl QuizHeader {
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.position, self.total)
    }

    pub fn fraction(&self) -> f32 {
        self.percent as f32 / 100.0
    }
}

/// Titled body sections of a market update detail page.
pub fn market_sections(update: &MarketUpdate) -> Vec<(&'static str, &str)> {
    vec![
        ("Macro & Global Markets", update.macro_global.as_str()),
        ("Forex", update.forex.as_str()),
        ("Crypto", update.crypto.as_str()),
        ("Major US News", update.us_news.as_str()),
        ("Liquidity / Rates", update.liquidity_rates.as_str()),
        ("Actionable Educational Insights", update.insights.as_str()),
    ]
}

/// Titled body sections of an AI update detail page. "Risks/Failures" only
/// when present.
pub fn ai_sections(update: &AiUpdate) -> Vec<(&'static str, &str)> {
    let mut sections = vec![
        ("Sector Impacts", update.sector_impacts.as_str()),
        ("Notable Launches", update.notable_launches.as_str()),
        ("Long Term Take", update.long_term_take.as_str()),
    ];
    if let Some(risks) = &update.risks_failures {
        sections.push(("Risks/Failures", risks.as_str()));
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn quiz_header_label_and_fraction() {
        let header = QuizHeader {
            position: 2,
            total: 5,
            percent: 40,
        };
        assert_eq!(header.label(), "Question 2 of 5");
        assert!((header.fraction() - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn content_row_label_includes_week_when_present() {
        let row = ContentRow {
            id: "1".into(),
            headline: "Fed pause".into(),
            week_of: Some("Jan 1".into()),
        };
        assert_eq!(row.label(), "Fed pause  ·  Week of Jan 1");
        let myth = ContentRow {
            week_of: None,
            ..row
        };
        assert_eq!(myth.label(), "Fed pause");
    }

    #[test]
    fn ai_risks_section_only_when_present() {
        let mut update = AiUpdate {
            id: "a".into(),
            created_at: Utc::now(),
            week_of: "Jan 1".into(),
            title: "Agents".into(),
            summary: "s".into(),
            sector_impacts: "x".into(),
            notable_launches: "y".into(),
            long_term_take: "z".into(),
            risks_failures: None,
            image_url: None,
        };
        assert_eq!(ai_sections(&update).len(), 3);
        update.risks_failures = Some("hallucinations".into());
        let sections = ai_sections(&update);
        assert_eq!(sections.last(), Some(&("Risks/Failures", "hallucinations")));
    }
}
