//! The async API client.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::Instrument;
use url::Url;
use xivapi_core::logging::request_span;
use xivapi_core::{ClientSettings, XivError, XivResult};
use xivapi_query::{urlencode, PercentEncoder, QueryBuilder, RowParams};

use crate::models::{
    ErrorBody, GameVersion, RowsPage, SearchResults, SheetList, SheetRow, VersionList,
};

/// Image formats the asset endpoint can convert to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetFormat {
    #[default]
    Png,
    Jpg,
    Webp,
}

impl AssetFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Webp => "webp",
        }
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for the game-data REST API.
///
/// Built queries are plain strings, so one client can serve concurrent
/// requests; the underlying `reqwest::Client` is cheap to clone.
#[derive(Debug, Clone)]
pub struct XivApiClient {
    http: reqwest::Client,
    base_url: Url,
    settings: ClientSettings,
}

impl XivApiClient {
    /// Creates a client for the public endpoint with default settings.
    pub fn new() -> XivResult<Self> {
        Self::with_settings(&ClientSettings::default())
    }

    /// Creates a client pointed at another base URL with otherwise default settings.
    pub fn with_base_url(base_url: impl Into<String>) -> XivResult<Self> {
        Self::with_settings(&ClientSettings {
            base_url: base_url.into(),
            ..ClientSettings::default()
        })
    }

    /// Creates a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`XivError::Configuration`] if the base URL does not parse or
    /// cannot carry path segments, or the HTTP client cannot be built.
    pub fn with_settings(settings: &ClientSettings) -> XivResult<Self> {
        let base_url = Url::parse(settings.base_url()).map_err(|e| {
            XivError::Configuration(format!("invalid base URL '{}': {e}", settings.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(XivError::Configuration(format!(
                "base URL '{}' cannot have path segments",
                settings.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| XivError::Configuration(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(base_url = %base_url, "xivapi client initialized");
        Ok(Self {
            http,
            base_url,
            settings: settings.clone(),
        })
    }

    pub const fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    // ── Sheets and rows ──────────────────────────────────────────────

    /// Lists the names of every sheet.
    pub async fn get_sheets(&self) -> XivResult<Vec<String>> {
        let url = self.endpoint(&["sheet"], "")?;
        let list: SheetList = self.get_json(url).await?;
        Ok(list.sheets.into_iter().map(|s| s.name).collect())
    }

    /// Fetches one row.
    pub async fn get_sheet_row(
        &self,
        sheet: &str,
        row_id: u32,
        params: &RowParams,
    ) -> XivResult<SheetRow> {
        let row = row_id.to_string();
        let url = self.endpoint(&["sheet", sheet, row.as_str()], &self.row_query(params))?;
        self.get_json(url).await
    }

    /// Fetches one subrow, addressed as `row_id:subrow_id`.
    pub async fn get_sheet_subrow(
        &self,
        sheet: &str,
        row_id: u32,
        subrow_id: u16,
        params: &RowParams,
    ) -> XivResult<SheetRow> {
        let row = format!("{row_id}:{subrow_id}");
        let url = self.endpoint(&["sheet", sheet, row.as_str()], &self.row_query(params))?;
        self.get_json(url).await
    }

    /// Fetches a page of rows, optionally restricted to explicit ids.
    pub async fn get_sheet_rows(&self, sheet: &str, params: &RowParams) -> XivResult<RowsPage> {
        let url = self.endpoint(&["sheet", sheet], &self.row_query(params))?;
        self.get_json(url).await
    }

    // ── Search ───────────────────────────────────────────────────────

    /// Runs a search and returns its first page.
    pub async fn search(&self, query: &QueryBuilder) -> XivResult<SearchResults> {
        let url = self.endpoint(&["search"], &query.build())?;
        self.get_json(url).await
    }

    /// Fetches the page a previous search's `next` cursor points at.
    pub async fn search_cursor(&self, cursor: &str, limit: Option<u32>) -> XivResult<SearchResults> {
        let mut params = vec![("cursor", cursor.to_string())];
        if let Some(limit) = limit.filter(|l| *l > 0) {
            params.push(("limit", limit.to_string()));
        }
        let url = self.endpoint(&["search"], &urlencode(&params, &PercentEncoder))?;
        self.get_json(url).await
    }

    /// Runs a search and follows `next` cursors, fetching at most `max_pages` pages.
    ///
    /// The returned `next` is the cursor left over when the page cap was hit,
    /// or `None` once every page was read.
    pub async fn search_all(
        &self,
        query: &QueryBuilder,
        max_pages: usize,
    ) -> XivResult<SearchResults> {
        let mut collected = SearchResults::default();
        if max_pages == 0 {
            return Ok(collected);
        }

        let mut page = self.search(query).await?;
        let mut pages = 1;
        loop {
            let SearchResults {
                next,
                schema,
                results,
            } = page;
            collected.schema = schema;
            collected.results.extend(results);
            collected.next = next;

            let Some(cursor) = collected.next.as_deref() else {
                break;
            };
            if pages >= max_pages {
                tracing::debug!(pages, "search page cap reached");
                break;
            }
            page = self.search_cursor(cursor, query.get_limit()).await?;
            pages += 1;
        }

        Ok(collected)
    }

    // ── Assets and metadata ──────────────────────────────────────────

    /// Downloads a game file converted to an image format.
    pub async fn get_asset(&self, path: &str, format: AssetFormat) -> XivResult<Bytes> {
        let params = [("path", path), ("format", format.as_str())];
        let url = self.endpoint(&["asset"], &urlencode(&params, &PercentEncoder))?;
        self.get_bytes(url).await
    }

    /// Downloads a composed map image, e.g. territory `s1d1`, index `00`.
    pub async fn get_map(&self, territory: &str, index: &str) -> XivResult<Bytes> {
        let url = self.endpoint(&["asset", "map", territory, index], "")?;
        self.get_bytes(url).await
    }

    /// Lists the game versions the service holds data for.
    pub async fn get_versions(&self) -> XivResult<Vec<GameVersion>> {
        let url = self.endpoint(&["version"], "")?;
        let list: VersionList = self.get_json(url).await?;
        Ok(list.versions)
    }

    // ── Plumbing ─────────────────────────────────────────────────────

    fn row_query(&self, params: &RowParams) -> String {
        params
            .clone()
            .with_defaults(self.settings.language, self.settings.schema.as_deref())
            .build()
    }

    /// Appends `segments` to the base path and attaches an already-encoded query.
    fn endpoint(&self, segments: &[&str], query: &str) -> XivResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                XivError::Configuration(format!("base URL '{}' cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        url.set_query((!query.is_empty()).then_some(query));
        Ok(url)
    }

    async fn send(&self, url: Url) -> XivResult<reqwest::Response> {
        let span = request_span("GET", url.as_str());
        async {
            tracing::debug!("requesting");
            let response = self
                .http
                .get(url.clone())
                .send()
                .await
                .map_err(|e| XivError::Http(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "request failed");
            Err(status_error(status, &body, &url))
        }
        .instrument(span)
        .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> XivResult<T> {
        let body = self
            .send(url)
            .await?
            .text()
            .await
            .map_err(|e| XivError::Http(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| XivError::InvalidResponse(e.to_string()))
    }

    async fn get_bytes(&self, url: Url) -> XivResult<Bytes> {
        self.send(url)
            .await?
            .bytes()
            .await
            .map_err(|e| XivError::Http(e.to_string()))
    }
}

/// Maps a non-success status and its body onto an error.
fn status_error(status: StatusCode, body: &str, url: &Url) -> XivError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::BAD_REQUEST => XivError::RemoteParameter(message),
        StatusCode::NOT_FOUND => XivError::NotFound(if message.is_empty() {
            url.path().to_string()
        } else {
            message
        }),
        StatusCode::TOO_MANY_REQUESTS => XivError::RateLimited,
        other => XivError::Server(other.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> XivApiClient {
        XivApiClient::with_base_url(base).unwrap()
    }

    #[test]
    fn test_endpoint_joins_under_base_path() {
        let c = client("https://v2.xivapi.com/api");
        let url = c.endpoint(&["sheet", "Item", "12056"], "language=en").unwrap();
        assert_eq!(url.as_str(), "https://v2.xivapi.com/api/sheet/Item/12056?language=en");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_and_root() {
        let c = client("http://127.0.0.1:8080/api/");
        assert_eq!(
            c.endpoint(&["search"], "").unwrap().as_str(),
            "http://127.0.0.1:8080/api/search"
        );
        let root = client("http://127.0.0.1:8080");
        assert_eq!(
            root.endpoint(&["sheet"], "").unwrap().as_str(),
            "http://127.0.0.1:8080/sheet"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let c = client("http://localhost/api");
        let url = c.endpoint(&["sheet", "Item Name"], "").unwrap();
        assert_eq!(url.path(), "/api/sheet/Item%20Name");
    }

    #[test]
    fn test_endpoint_keeps_encoded_query() {
        let c = client("http://localhost/api");
        let query = QueryBuilder::new(["Item"])
            .filter("Name", xivapi_query::Operator::Contains, "Lesser Panda")
            .build();
        let url = c.endpoint(&["search"], &query).unwrap();
        assert_eq!(url.query(), Some(query.as_str()));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = XivApiClient::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, XivError::Configuration(_)));
        let err = XivApiClient::with_base_url("mailto:someone@example.com").unwrap_err();
        assert!(matches!(err, XivError::Configuration(_)));
    }

    #[test]
    fn test_row_query_applies_defaults() {
        let settings = ClientSettings {
            base_url: "http://localhost/api".to_string(),
            language: Some(xivapi_core::Language::De),
            schema: Some("exdschema@2".to_string()),
            ..ClientSettings::default()
        };
        let c = XivApiClient::with_settings(&settings).unwrap();
        assert_eq!(
            c.row_query(&RowParams::new()),
            "language=de&schema=exdschema%402"
        );
        assert_eq!(
            c.row_query(&RowParams::new().set_language(xivapi_core::Language::Ja)),
            "language=ja&schema=exdschema%402"
        );
    }

    #[test]
    fn test_status_error_mapping() {
        let url = Url::parse("http://localhost/api/sheet/Nope").unwrap();
        let err = status_error(
            StatusCode::BAD_REQUEST,
            r#"{"code": 400, "message": "limit must be at most 500"}"#,
            &url,
        );
        match err {
            XivError::RemoteParameter(msg) => assert_eq!(msg, "limit must be at most 500"),
            other => panic!("Expected RemoteParameter, got {other:?}"),
        }

        match status_error(StatusCode::NOT_FOUND, "", &url) {
            XivError::NotFound(msg) => assert_eq!(msg, "/api/sheet/Nope"),
            other => panic!("Expected NotFound, got {other:?}"),
        }

        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "", &url),
            XivError::RateLimited
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, "<html>", &url),
            XivError::Server(502)
        ));
    }

    #[test]
    fn test_asset_format_tokens() {
        assert_eq!(AssetFormat::default(), AssetFormat::Png);
        assert_eq!(AssetFormat::Webp.to_string(), "webp");
    }
}
