//! Search API endpoints.

use crate::IotmapClient;
use iotmap_core::{HostCount, Result, SearchResults};

/// Search API endpoints
pub struct SearchApi<'a> {
    client: &'a IotmapClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a IotmapClient) -> Self {
        Self { client }
    }

    /// Search the device database with a query string
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let results = client.search().query("country:GB port:23").send().await?;
    /// println!("Found {} devices", results.matches.len());
    /// ```
    #[must_use]
    pub fn query(&self, query: impl Into<String>) -> SearchRequestBuilder<'a> {
        SearchRequestBuilder::new(self.client, query.into())
    }

    /// Get count of results without consuming query credits
    #[must_use]
    pub fn count(&self, query: impl Into<String>) -> CountRequestBuilder<'a> {
        CountRequestBuilder::new(self.client, query.into())
    }
}

/// Builder for search requests
pub struct SearchRequestBuilder<'a> {
    client: &'a IotmapClient,
    query: String,
    page: u32,
    minify: bool,
}

impl<'a> SearchRequestBuilder<'a> {
    fn new(client: &'a IotmapClient, query: String) -> Self {
        Self {
            client,
            query,
            page: 1,
            minify: false,
        }
    }

    /// Set the page number (1-indexed)
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Return minimal results
    #[must_use]
    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Execute the search
    pub async fn send(self) -> Result<SearchResults> {
        let mut params = vec![("query", self.query.as_str())];

        let page_str = self.page.to_string();
        if self.page > 1 {
            params.push(("page", &page_str));
        }

        if self.minify {
            params.push(("minify", "true"));
        }

        self.client
            .get_with_query("/shodan/host/search", &params)
            .await
    }
}

/// Builder for count requests
pub struct CountRequestBuilder<'a> {
    client: &'a IotmapClient,
    query: String,
    facets: Vec<String>,
}

impl<'a> CountRequestBuilder<'a> {
    fn new(client: &'a IotmapClient, query: String) -> Self {
        Self {
            client,
            query,
            facets: Vec::new(),
        }
    }

    /// Add a facet to aggregate results
    #[must_use]
    pub fn facet(mut self, facet: impl Into<String>) -> Self {
        self.facets.push(facet.into());
        self
    }

    /// Execute the count request
    pub async fn send(self) -> Result<HostCount> {
        let mut params = vec![("query", self.query.as_str())];

        let facets_str = self.facets.join(",");
        if !self.facets.is_empty() {
            params.push(("facets", &facets_str));
        }

        self.client
            .get_with_query("/shodan/host/count", &params)
            .await
    }
}
