//! Admin form buffers and their validation into insert payloads.

use super::records::{ContentKind, NewAiUpdate, NewContent, NewMarketUpdate, NewMythFact};
use crate::error::ContentError;

fn required(value: &str, field: &'static str) -> Result<String, ContentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ContentError::MissingField(field))
    } else {
        Ok(trimmed.to_owned())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[derive(Debug, Clone, Default)]
pub struct MarketUpdateForm {
    pub week_of: String,
    pub image_url: String,
    pub title: String,
    pub summary: String,
    pub macro_global: String,
    pub forex: String,
    pub crypto: String,
    pub us_news: String,
    pub liquidity_rates: String,
    pub insights: String,
}

impl MarketUpdateForm {
    pub fn to_insert(&self) -> Result<NewMarketUpdate, ContentError> {
        Ok(NewMarketUpdate {
            week_of: required(&self.week_of, "week_of")?,
            title: required(&self.title, "title")?,
            summary: required(&self.summary, "summary")?,
            macro_global: required(&self.macro_global, "macro_global")?,
            forex: required(&self.forex, "forex")?,
            crypto: required(&self.crypto, "crypto")?,
            us_news: required(&self.us_news, "us_news")?,
            liquidity_rates: required(&self.liquidity_rates, "liquidity_rates")?,
            insights: required(&self.insights, "insights")?,
            image_url: optional(&self.image_url),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AiUpdateForm {
    pub week_of: String,
    pub image_url: String,
    pub title: String,
    pub summary: String,
    pub sector_impacts: String,
    pub notable_launches: String,
    pub long_term_take: String,
    pub risks_failures: String,
}

impl AiUpdateForm {
    pub fn to_insert(&self) -> Result<NewAiUpdate, ContentError> {
        Ok(NewAiUpdate {
            week_of: required(&self.week_of, "week_of")?,
            title: required(&self.title, "title")?,
            summary: required(&self.summary, "summary")?,
            sector_impacts: required(&self.sector_impacts, "sector_impacts")?,
            notable_launches: required(&self.notable_launches, "notable_launches")?,
            long_term_take: required(&self.long_term_take, "long_term_take")?,
            risks_failures: optional(&self.risks_failures),
            image_url: optional(&self.image_url),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MythFactForm {
    pub myth: String,
    pub fact: String,
    pub why_it_matters: String,
}

impl MythFactForm {
    pub fn to_insert(&self) -> Result<NewMythFact, ContentError> {
        Ok(NewMythFact {
            myth: required(&self.myth, "myth")?,
            fact: required(&self.fact, "fact")?,
            why_it_matters: required(&self.why_it_matters, "why_it_matters")?,
        })
    }
}

/// The three admin forms, one per content kind.
#[derive(Debug, Clone, Default)]
pub struct AdminForms {
    pub market: MarketUpdateForm,
    pub ai: AiUpdateForm,
    pub myth: MythFactForm,
}

impl AdminForms {
    pub fn to_insert(&self, kind: ContentKind) -> Result<NewContent, ContentError> {
        match kind {
            ContentKind::Market => self.market.to_insert().map(NewContent::Market),
            ContentKind::Ai => self.ai.to_insert().map(NewContent::Ai),
            ContentKind::Myth => self.myth.to_insert().map(NewContent::Myth),
        }
    }

    pub fn clear(&mut self, kind: ContentKind) {
        match kind {
            ContentKind::Market => self.market = MarketUpdateForm::default(),
            ContentKind::Ai => self.ai = AiUpdateForm::default(),
            ContentKind::Myth => self.myth = MythFactForm::default(),
        }
    }
}
