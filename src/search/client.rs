//! Search endpoint transport.
//!
//! [`SearchRequest`] is the fully-resolved request (query plus filters);
//! [`SearchTransport`] is the seam the controller and worker call through.
//! [`HttpSearchClient`] is the production implementation over
//! `reqwest::blocking`.

use crate::domain::error::{ReelfindError, Result};
use crate::domain::{FilterConfig, SearchResult};
use reqwest::StatusCode;
use std::time::Duration;

/// A single search to issue: the raw query and a snapshot of the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub filters: FilterConfig,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>, filters: FilterConfig) -> Self {
        Self {
            query: query.into(),
            filters,
        }
    }

    /// Query-string pairs in wire order: `query`, `yearStart`, `yearEnd`,
    /// `genres`, `sortBy`.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("query", self.query.clone())];
        params.extend(self.filters.query_params());
        params
    }
}

/// Anything that can answer a [`SearchRequest`].
pub trait SearchTransport: Send {
    /// Performs one search.
    ///
    /// # Errors
    ///
    /// - [`ReelfindError::RateLimited`] for HTTP 429
    /// - [`ReelfindError::Server`] for any other non-2xx status
    /// - [`ReelfindError::Transport`] when no usable response arrives
    fn search(&self, request: &SearchRequest) -> Result<SearchResult>;
}

/// Maps a non-success HTTP status to the matching error.
#[must_use]
pub fn status_error(status: StatusCode) -> ReelfindError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        ReelfindError::RateLimited
    } else {
        ReelfindError::Server(status.as_u16())
    }
}

/// Blocking HTTP client for `GET <base_url>/search`.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSearchClient {
    /// Creates a client for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ReelfindError::Config`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReelfindError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

impl SearchTransport for HttpSearchClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        let _span = tracing::debug_span!("http_search",
            query = %request.query,
            sort_by = request.filters.sort_by.as_param()
        )
        .entered();

        let response = self
            .client
            .get(self.endpoint())
            .query(&request.query_params())
            .send()
            .map_err(|e| ReelfindError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "search request rejected");
            return Err(status_error(status));
        }

        let result: SearchResult = response
            .json()
            .map_err(|e| ReelfindError::Transport(e.to_string()))?;

        tracing::debug!(movies = result.movies.len(), "search response decoded");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_params_lead_with_raw_query() {
        let mut filters = FilterConfig {
            year_range: (1900, 2000),
            ..FilterConfig::default()
        };
        filters.toggle_genre("Comedy");
        filters.toggle_genre("Crime");
        let request = SearchRequest::new("  heist movies ", filters);

        let params = request.query_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["query", "yearStart", "yearEnd", "genres", "sortBy"]);
        assert_eq!(params[0].1, "  heist movies ");
        assert_eq!(params[3].1, "Comedy,Crime");
    }

    #[test]
    fn status_mapping_distinguishes_rate_limit() {
        assert!(matches!(status_error(StatusCode::TOO_MANY_REQUESTS), ReelfindError::RateLimited));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR),
            ReelfindError::Server(500)
        ));
        assert!(matches!(status_error(StatusCode::NOT_FOUND), ReelfindError::Server(404)));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = HttpSearchClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/search");
    }

    #[test]
    fn unreachable_host_is_a_transport_failure() {
        let client = HttpSearchClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        let err = client
            .search(&SearchRequest::new("alien", FilterConfig::default()))
            .unwrap_err();
        assert!(matches!(err, ReelfindError::Transport(_)));
    }
}
