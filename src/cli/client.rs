use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::Url;

use crate::database::Note;

/// Thin HTTP client for the /api/notes endpoints
pub struct NotesClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl NotesClient {
    pub fn new(base_url: &str, token: String) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join drops the last segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: Client::new(),
            base_url,
            token,
        })
    }

    pub fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        Ok(self.base_url.join(&format!("api/notes/{}", path))?)
    }

    pub async fn list(&self) -> anyhow::Result<Vec<Note>> {
        self.send(self.request(Method::GET, "fetchallnotes")?).await
    }

    pub async fn add(
        &self,
        title: &str,
        description: &str,
        tag: Option<&str>,
    ) -> anyhow::Result<Note> {
        let mut body = json!({ "title": title, "description": description });
        if let Some(tag) = tag {
            body["tag"] = json!(tag);
        }
        self.send(self.request(Method::POST, "addnote")?.json(&body)).await
    }

    pub async fn update(&self, id: &str, changes: Value) -> anyhow::Result<Note> {
        let response: Value = self
            .send(self.request(Method::PUT, &format!("updatenote/{}", id))?.json(&changes))
            .await?;
        Ok(serde_json::from_value(response["note"].clone())?)
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<Value> {
        self.send(self.request(Method::DELETE, &format!("deletenote/{}", id))?)
            .await
    }

    fn request(&self, method: Method, path: &str) -> anyhow::Result<RequestBuilder> {
        Ok(self
            .http
            .request(method, self.endpoint(path)?)
            .bearer_auth(&self.token))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> anyhow::Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"));
            anyhow::bail!("{} ({})", message, status.as_u16());
        }

        Ok(response.json().await?)
    }
}
