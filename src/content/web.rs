use super::postgrest::{Query, decode_rows, delete_query, item_query, list_query, table_url};
use super::records::{ContentItem, ContentKind, NewContent};
use crate::error::ContentError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Browser client for the hosted table store. Same endpoints as the native
/// `RestContentStore`, but every call is a `fetch` future; the app runs them
/// with `spawn_local` and collects the replies each frame.
#[derive(Clone, Debug)]
pub struct WebContentStore {
    base_url: String,
    api_key: String,
}

fn js_error(err: JsValue) -> ContentError {
    ContentError::Transport(format!("{err:?}"))
}

impl WebContentStore {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn url(&self, kind: ContentKind, query: &Query) -> Result<String, ContentError> {
        let url = web_sys::Url::new(&table_url(&self.base_url, kind)).map_err(js_error)?;
        let params = url.search_params();
        for (name, value) in query {
            params.append(name, value);
        }
        Ok(url.href())
    }

    async fn send(&self, method: &str, url: &str, body: Option<String>) -> Result<String, ContentError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        let headers = request.headers();
        headers.set("apikey", &self.api_key).map_err(js_error)?;
        headers
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .map_err(js_error)?;
        if body.is_some() {
            headers.set("Content-Type", "application/json").map_err(js_error)?;
        }

        let window = web_sys::window()
            .ok_or_else(|| ContentError::Transport("no window in this context".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        if !response.ok() {
            return Err(ContentError::Status {
                status: response.status(),
                body: text.trim().to_string(),
            });
        }
        Ok(text)
    }

    pub async fn list(&self, kind: ContentKind) -> Result<Vec<ContentItem>, ContentError> {
        let url = self.url(kind, &list_query())?;
        let body = self.send("GET", &url, None).await?;
        decode_rows(kind, &body)
    }

    pub async fn get(&self, kind: ContentKind, id: &str) -> Result<ContentItem, ContentError> {
        let url = self.url(kind, &item_query(id))?;
        let body = self.send("GET", &url, None).await?;
        decode_rows(kind, &body)?
            .into_iter()
            .next()
            .ok_or_else(|| ContentError::NotFound {
                kind: kind.noun(),
                id: id.to_owned(),
            })
    }

    pub async fn insert(&self, record: &NewContent) -> Result<(), ContentError> {
        let url = self.url(record.kind(), &Vec::new())?;
        let body = serde_json::to_string(&[record.to_json()?])?;
        self.send("POST", &url, Some(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, kind: ContentKind, id: &str) -> Result<(), ContentError> {
        let url = self.url(kind, &delete_query(id))?;
        self.send("DELETE", &url, None).await?;
        Ok(())
    }
}
