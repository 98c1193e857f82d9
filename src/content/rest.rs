use super::ContentStore;
use super::postgrest::{Query, decode_rows, delete_query, item_query, list_query, table_url};
use super::records::{ContentItem, ContentKind, NewContent};
use crate::error::ContentError;
use reqwest::blocking::{Client, RequestBuilder, Response};

/// Hosted table store reached over its REST interface
/// (`/rest/v1/<table>`, PostgREST filters). One request per call, no retries.
pub struct RestContentStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestContentStore {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn request(&self, method: reqwest::Method, kind: ContentKind, query: &Query) -> RequestBuilder {
        self.client
            .request(method, table_url(&self.base_url, kind))
            .query(query)
            .header("apikey", &self.api_key)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, ContentError> {
        let response = request.send()?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(ContentError::Status {
                status,
                body: body.trim().to_string(),
            });
        }
        Ok(response)
    }
}

impl ContentStore for RestContentStore {
    fn list(&self, kind: ContentKind) -> Result<Vec<ContentItem>, ContentError> {
        let request = self.request(reqwest::Method::GET, kind, &list_query());
        let body = self.send(request)?.text()?;
        decode_rows(kind, &body)
    }

    fn get(&self, kind: ContentKind, id: &str) -> Result<ContentItem, ContentError> {
        let request = self.request(reqwest::Method::GET, kind, &item_query(id));
        let body = self.send(request)?.text()?;
        decode_rows(kind, &body)?
            .into_iter()
            .next()
            .ok_or_else(|| ContentError::NotFound {
                kind: kind.noun(),
                id: id.to_owned(),
            })
    }

    fn insert(&mut self, record: NewContent) -> Result<(), ContentError> {
        let row = record.to_json()?;
        let request = self
            .request(reqwest::Method::POST, record.kind(), &Vec::new())
            .json(&[row]);
        self.send(request)?;
        Ok(())
    }

    fn delete(&mut self, kind: ContentKind, id: &str) -> Result<(), ContentError> {
        let request = self.request(reqwest::Method::DELETE, kind, &delete_query(id));
        self.send(request)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let store = RestContentStore::new("https://db.example.co/ ", "key");
        assert_eq!(store.base_url, "https://db.example.co");
    }

    #[test]
    fn ids_are_encoded_as_query_values() {
        let store = RestContentStore::new("https://db.example.co", "key");
        let request = store
            .request(reqwest::Method::GET, ContentKind::Myth, &item_query("a&b c=d"))
            .build()
            .unwrap();
        let url = request.url();

        assert_eq!(url.path(), "/rest/v1/myths_facts");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("select".to_string(), "*".to_string()),
                ("id".to_string(), "eq.a&b c=d".to_string()),
            ]
        );
        assert_eq!(request.headers()["apikey"], "key");
        assert_eq!(request.headers()["authorization"], "Bearer key");
    }

    #[test]
    fn list_orders_newest_first() {
        let store = RestContentStore::new("https://db.example.co", "key");
        let request = store
            .request(reqwest::Method::GET, ContentKind::Ai, &list_query())
            .build()
            .unwrap();
        assert_eq!(request.url().query(), Some("select=*&order=created_at.desc"));
    }
}
