use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ContentKind {
    #[default]
    Market,
    Ai,
    Myth,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Market, ContentKind::Ai, ContentKind::Myth];

    pub fn table(self) -> &'static str {
        match self {
            ContentKind::Market => "market_updates",
            ContentKind::Ai => "ai_updates",
            ContentKind::Myth => "myths_facts",
        }
    }

    /// Singular name used in toasts and errors.
    pub fn noun(self) -> &'static str {
        match self {
            ContentKind::Market => "market update",
            ContentKind::Ai => "AI update",
            ContentKind::Myth => "myth vs fact",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            ContentKind::Market => "Market Updates",
            ContentKind::Ai => "AI Updates",
            ContentKind::Myth => "Myths vs Facts",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MarketUpdate {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub week_of: String,
    pub title: String,
    pub summary: String,
    pub macro_global: String,
    pub forex: String,
    pub crypto: String,
    pub us_news: String,
    pub liquidity_rates: String,
    pub insights: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AiUpdate {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub week_of: String,
    pub title: String,
    pub summary: String,
    pub sector_impacts: String,
    pub notable_launches: String,
    pub long_term_take: String,
    #[serde(default)]
    pub risks_failures: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MythFact {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub myth: String,
    pub fact: String,
    pub why_it_matters: String,
}

// Insert payloads: id and created_at are assigned by the store.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NewMarketUpdate {
    pub week_of: String,
    pub title: String,
    pub summary: String,
    pub macro_global: String,
    pub forex: String,
    pub crypto: String,
    pub us_news: String,
    pub liquidity_rates: String,
    pub insights: String,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NewAiUpdate {
    pub week_of: String,
    pub title: String,
    pub summary: String,
    pub sector_impacts: String,
    pub notable_launches: String,
    pub long_term_take: String,
    pub risks_failures: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NewMythFact {
    pub myth: String,
    pub fact: String,
    pub why_it_matters: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Market(MarketUpdate),
    Ai(AiUpdate),
    Myth(MythFact),
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Market(_) => ContentKind::Market,
            ContentItem::Ai(_) => ContentKind::Ai,
            ContentItem::Myth(_) => ContentKind::Myth,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ContentItem::Market(m) => &m.id,
            ContentItem::Ai(a) => &a.id,
            ContentItem::Myth(m) => &m.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            ContentItem::Market(m) => m.created_at,
            ContentItem::Ai(a) => a.created_at,
            ContentItem::Myth(m) => m.created_at,
        }
    }

    /// Title for updates, the myth itself for myth/fact pairs.
    pub fn headline(&self) -> &str {
        match self {
            ContentItem::Market(m) => &m.title,
            ContentItem::Ai(a) => &a.title,
            ContentItem::Myth(m) => &m.myth,
        }
    }

    pub fn week_of(&self) -> Option<&str> {
        match self {
            ContentItem::Market(m) => Some(&m.week_of),
            ContentItem::Ai(a) => Some(&a.week_of),
            ContentItem::Myth(_) => None,
        }
    }

    /// Case-insensitive match on title, summary and week. Myth/fact pairs
    /// match on myth and fact. An empty query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(&query);
        match self {
            ContentItem::Market(m) => hit(&m.title) || hit(&m.summary) || hit(&m.week_of),
            ContentItem::Ai(a) => hit(&a.title) || hit(&a.summary) || hit(&a.week_of),
            ContentItem::Myth(m) => hit(&m.myth) || hit(&m.fact),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewContent {
    Market(NewMarketUpdate),
    Ai(NewAiUpdate),
    Myth(NewMythFact),
}

impl NewContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            NewContent::Market(_) => ContentKind::Market,
            NewContent::Ai(_) => ContentKind::Ai,
            NewContent::Myth(_) => ContentKind::Myth,
        }
    }

    pub fn headline(&self) -> &str {
        match self {
            NewContent::Market(m) => &m.title,
            NewContent::Ai(a) => &a.title,
            NewContent::Myth(m) => &m.myth,
        }
    }

    /// Row body as sent to the store.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            NewContent::Market(m) => serde_json::to_value(m),
            NewContent::Ai(a) => serde_json::to_value(a),
            NewContent::Myth(m) => serde_json::to_value(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(title: &str, week_of: &str) -> ContentItem {
        ContentItem::Market(MarketUpdate {
            id: "1".into(),
            created_at: Utc::now(),
            week_of: week_of.into(),
            title: title.into(),
            summary: "Rates held steady".into(),
            macro_global: String::new(),
            forex: String::new(),
            crypto: String::new(),
            us_news: String::new(),
            liquidity_rates: String::new(),
            insights: String::new(),
            image_url: None,
        })
    }

    #[test]
    fn search_is_case_insensitive_over_title_summary_and_week() {
        let item = market("Fed Pause", "Jan 1, 2024");
        assert!(item.matches_search("fed"));
        assert!(item.matches_search("RATES"));
        assert!(item.matches_search("jan 1"));
        assert!(item.matches_search("   "));
        assert!(!item.matches_search("bitcoin"));
    }

    #[test]
    fn decodes_row_with_offset_timestamp_and_null_image() {
        let row = r#"{
            "id": "b7c1",
            "created_at": "2024-05-02T08:15:00.123456+00:00",
            "myth": "Timing the market is easy",
            "fact": "Even professionals rarely manage it",
            "why_it_matters": "Missing the best days hurts returns"
        }"#;
        let myth: MythFact = serde_json::from_str(row).unwrap();
        assert_eq!(myth.id, "b7c1");

        let ai = r#"{
            "id": "a1", "created_at": "2024-05-02T08:15:00Z", "week_of": "May 1",
            "title": "t", "summary": "s", "sector_impacts": "x",
            "notable_launches": "y", "long_term_take": "z",
            "risks_failures": null, "image_url": null
        }"#;
        let ai: AiUpdate = serde_json::from_str(ai).unwrap();
        assert_eq!(ai.risks_failures, None);
    }
}
