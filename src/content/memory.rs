use super::ContentStore;
use super::records::{
    AiUpdate, ContentItem, ContentKind, MarketUpdate, MythFact, NewContent,
};
use crate::error::ContentError;
use chrono::Utc;

/// In-process content store. Used when no remote store is configured, on the
/// web build, and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryContentStore {
    items: Vec<ContentItem>,
    next_id: u64,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for MemoryContentStore {
    fn list(&self, kind: ContentKind) -> Result<Vec<ContentItem>, ContentError> {
        let mut rows: Vec<ContentItem> = self
            .items
            .iter()
            .filter(|i| i.kind() == kind)
            .cloned()
            .collect();
        // newest first; items are appended, so reverse before the stable sort
        // keeps later inserts ahead on equal timestamps
        rows.reverse();
        rows.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(rows)
    }

    fn get(&self, kind: ContentKind, id: &str) -> Result<ContentItem, ContentError> {
        self.items
            .iter()
            .find(|i| i.kind() == kind && i.id() == id)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                kind: kind.noun(),
                id: id.to_owned(),
            })
    }

    fn insert(&mut self, record: NewContent) -> Result<(), ContentError> {
        self.next_id += 1;
        let id = format!("local-{}", self.next_id);
        let created_at = Utc::now();

        let item = match record {
            NewContent::Market(m) => ContentItem::Market(MarketUpdate {
                id,
                created_at,
                week_of: m.week_of,
                title: m.title,
                summary: m.summary,
                macro_global: m.macro_global,
                forex: m.forex,
                crypto: m.crypto,
                us_news: m.us_news,
                liquidity_rates: m.liquidity_rates,
                insights: m.insights,
                image_url: m.image_url,
            }),
            NewContent::Ai(a) => ContentItem::Ai(AiUpdate {
                id,
                created_at,
                week_of: a.week_of,
                title: a.title,
                summary: a.summary,
                sector_impacts: a.sector_impacts,
                notable_launches: a.notable_launches,
                long_term_take: a.long_term_take,
                risks_failures: a.risks_failures,
                image_url: a.image_url,
            }),
            NewContent::Myth(m) => ContentItem::Myth(MythFact {
                id,
                created_at,
                myth: m.myth,
                fact: m.fact,
                why_it_matters: m.why_it_matters,
            }),
        };
        self.items.push(item);
        Ok(())
    }

    fn delete(&mut self, kind: ContentKind, id: &str) -> Result<(), ContentError> {
        self.items.retain(|i| !(i.kind() == kind && i.id() == id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::records::NewMythFact;

    fn myth(text: &str) -> NewContent {
        NewContent::Myth(NewMythFact {
            myth: text.into(),
            fact: "f".into(),
            why_it_matters: "w".into(),
        })
    }

    #[test]
    fn lists_newest_first_per_kind() {
        let mut store = MemoryContentStore::new();
        store.insert(myth("first")).unwrap();
        store.insert(myth("second")).unwrap();

        let rows = store.list(ContentKind::Myth).unwrap();
        let headlines: Vec<_> = rows.iter().map(|r| r.headline()).collect();
        assert_eq!(headlines, ["second", "first"]);
        assert!(store.list(ContentKind::Market).unwrap().is_empty());
    }

    #[test]
    fn delete_by_id_and_get_missing() {
        let mut store = MemoryContentStore::new();
        store.insert(myth("gone")).unwrap();
        let id = store.list(ContentKind::Myth).unwrap()[0].id().to_owned();

        assert!(store.get(ContentKind::Myth, &id).is_ok());
        store.delete(ContentKind::Myth, &id).unwrap();
        assert!(matches!(
            store.get(ContentKind::Myth, &id),
            Err(ContentError::NotFound { .. })
        ));
    }
}
