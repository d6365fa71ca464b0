// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

use crate::error::CatalogError;
use crate::http::HttpClient;

use super::parse::{Catalog, parse_catalog};

/// Pagination and ordering parameters sent to the episodes endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Maximum number of episodes to request
    pub limit: usize,
    /// Field to sort by
    pub sort: String,
    /// Sort direction, "asc" or "desc"
    pub order: String,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            limit: 12,
            sort: "published_at".to_string(),
            order: "desc".to_string(),
        }
    }
}

/// Build the episodes endpoint URL for an API base URL
///
/// The base may or may not end with a slash; `episodes` is always appended
/// as a path segment.
pub fn catalog_url(api_base: &str, query: &CatalogQuery) -> Result<Url, CatalogError> {
    let mut url = Url::parse(api_base)?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    let mut url = url.join("episodes")?;

    url.query_pairs_mut()
        .append_pair("_limit", &query.limit.to_string())
        .append_pair("_sort", &query.sort)
        .append_pair("_order", &query.order);

    Ok(url)
}

/// Fetch and parse the episode catalog
pub async fn fetch_catalog<C: HttpClient>(
    client: &C,
    api_base: &str,
    query: &CatalogQuery,
) -> Result<Catalog, CatalogError> {
    let url = catalog_url(api_base, query)?;

    let response = client
        .get(url.as_str())
        .await
        .map_err(|e| CatalogError::FetchFailed {
            url: url.to_string(),
            source: e,
        })?;

    if !response.is_success() {
        return Err(CatalogError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    parse_catalog(&response.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use crate::http::HttpResponse;
    use async_trait::async_trait;
    use bytes::Bytes;

    struct MockHttpClient {
        status: u16,
        body: &'static str,
        requested: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(HttpResponse {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    #[test]
    fn catalog_url_appends_query_parameters() {
        let url = catalog_url("http://localhost:3333", &CatalogQuery::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn catalog_url_keeps_base_path() {
        let query = CatalogQuery {
            limit: 5,
            ..Default::default()
        };

        let without_slash = catalog_url("https://api.example.com/v1", &query).unwrap();
        let with_slash = catalog_url("https://api.example.com/v1/", &query).unwrap();

        assert_eq!(without_slash, with_slash);
        assert_eq!(
            without_slash.as_str(),
            "https://api.example.com/v1/episodes?_limit=5&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn catalog_url_rejects_relative_base() {
        let result = catalog_url("not a url", &CatalogQuery::default());
        assert!(matches!(result, Err(CatalogError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn fetch_catalog_requests_episodes_endpoint() {
        let client = MockHttpClient::new(200, "[]");

        let catalog = fetch_catalog(&client, "http://localhost:3333", &CatalogQuery::default())
            .await
            .unwrap();

        assert!(catalog.is_empty());
        let requested = client.requested.lock().unwrap();
        assert_eq!(requested.len(), 1);
        assert!(requested[0].starts_with("http://localhost:3333/episodes?"));
    }

    #[tokio::test]
    async fn fetch_catalog_fails_on_http_error() {
        let client = MockHttpClient::new(500, "oops");

        let result =
            fetch_catalog(&client, "http://localhost:3333", &CatalogQuery::default()).await;

        match result.unwrap_err() {
            CatalogError::HttpStatus { status, .. } => assert_eq!(status, 500),
            other => panic!("Expected HttpStatus error, got {other:?}"),
        }
    }
}
