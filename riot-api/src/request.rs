use crate::{Error, Handle, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

const API_KEY_PARAM: &str = "api_key";
const API_KEY_MASK: &str = "[API-KEY]";

/// A single GET against the api.
///
/// The body is decoded into `W`, the shape the service sends, and then
/// narrowed to `T` (usually the list inside a wrapper object).
pub struct ApiRequest<W, T = W> {
    handle: Arc<Handle>,
    url: Result<Url>,
    extract: fn(W) -> T,
}

impl<W: DeserializeOwned> ApiRequest<W, W> {
    pub(crate) fn new(handle: Arc<Handle>, url: Result<Url>) -> Self {
        Self::with_extract(handle, url, std::convert::identity)
    }
}

impl<W: DeserializeOwned, T> ApiRequest<W, T> {
    pub(crate) fn with_extract(handle: Arc<Handle>, url: Result<Url>, extract: fn(W) -> T) -> Self {
        Self {
            handle,
            url,
            extract,
        }
    }
    pub(crate) fn query(mut self, key: &str, value: &str) -> Self {
        if let Ok(url) = &mut self.url {
            url.query_pairs_mut().append_pair(key, value);
        }
        self
    }
    /// The url this request will hit, api key included
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref().ok()
    }

    pub async fn send(self) -> Result<T> {
        let url = self.url?;
        let line = request_line(&url);
        if self.handle.debug {
            println!("{}", line);
        } else {
            tracing::debug!("{}", line);
        }

        let res = self.handle.web.get(url).send().await?;
        let status = res.status();
        tracing::debug!(status = status.as_u16(), "response received");

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "request rejected");
            if self.handle.raise_status_errors {
                return Err(Error::Status(status));
            }
            let body = res.text().await?;
            return Err(Error::Payload {
                status,
                payload: error_payload(body),
            });
        }

        let body = res.bytes().await?;
        let wrapper: W = serde_json::from_slice(&body)?;
        Ok((self.extract)(wrapper))
    }
}

/// The line written in debug mode, with the key hidden.
pub fn request_line(url: &Url) -> String {
    format!("Started GET request to: {}", redact(url))
}

/// Render `url` with the api key replaced by `[API-KEY]`.
pub fn redact(url: &Url) -> String {
    let mut base = url.clone();
    base.set_query(None);
    base.set_fragment(None);

    let query = url
        .query_pairs()
        .map(|(key, value)| {
            if key == API_KEY_PARAM {
                format!("{}={}", key, API_KEY_MASK)
            } else {
                form_pair(&key, &value)
            }
        })
        .collect::<Vec<_>>();

    let mut out = base.to_string();
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query.join("&"));
    }
    out
}

fn form_pair(key: &str, value: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish()
}

fn error_payload(body: String) -> serde_json::Value {
    serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
}
