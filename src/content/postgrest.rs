//! Table paths, filters and row decoding shared by the native and web
//! clients of the hosted store.

use super::records::{AiUpdate, ContentItem, ContentKind, MarketUpdate, MythFact};
use crate::error::ContentError;

/// Query parameters as name/value pairs. Values are encoded by the HTTP
/// client, never spliced into the URL.
pub type Query = Vec<(&'static str, String)>;

pub fn table_url(base_url: &str, kind: ContentKind) -> String {
    format!("{base_url}/rest/v1/{}", kind.table())
}

pub fn list_query() -> Query {
    vec![
        ("select", "*".to_string()),
        ("order", "created_at.desc".to_string()),
    ]
}

pub fn item_query(id: &str) -> Query {
    vec![("select", "*".to_string()), ("id", format!("eq.{id}"))]
}

pub fn delete_query(id: &str) -> Query {
    vec![("id", format!("eq.{id}"))]
}

/// Decodes a JSON array of rows of the given kind.
pub fn decode_rows(kind: ContentKind, body: &str) -> Result<Vec<ContentItem>, ContentError> {
    let rows = match kind {
        ContentKind::Market => serde_json::from_str::<Vec<MarketUpdate>>(body)?
            .into_iter()
            .map(ContentItem::Market)
            .collect(),
        ContentKind::Ai => serde_json::from_str::<Vec<AiUpdate>>(body)?
            .into_iter()
            .map(ContentItem::Ai)
            .collect(),
        ContentKind::Myth => serde_json::from_str::<Vec<MythFact>>(body)?
            .into_iter()
            .map(ContentItem::Myth)
            .collect(),
    };
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_and_filters() {
        assert_eq!(
            table_url("https://db.example.co", ContentKind::Ai),
            "https://db.example.co/rest/v1/ai_updates"
        );
        assert_eq!(
            list_query(),
            vec![("select", "*".into()), ("order", "created_at.desc".into())]
        );
        assert_eq!(item_query("42")[1], ("id", "eq.42".to_string()));
        assert_eq!(delete_query("42"), vec![("id", "eq.42".to_string())]);
    }

    #[test]
    fn decode_rows_rejects_wrong_shape() {
        let err = decode_rows(ContentKind::Market, r#"[{"id": "1"}]"#).unwrap_err();
        assert!(matches!(err, ContentError::Decode(_)));

        let empty = decode_rows(ContentKind::Market, "[]").unwrap();
        assert!(empty.is_empty());
    }
}
