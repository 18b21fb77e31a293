//! Cursor pagination.
//!
//! Listing endpoints answer with one page and a continuation token:
//!
//! ```json
//! { "data": [ ... ], "meta": { "next_cursor": "g3Q...", "limit": 100 } }
//! ```
//!
//! [`Paginator`] walks such a listing one request per [`Paginator::next`]
//! call. It stops only when the server returns no `next_cursor`, so a short
//! page with a cursor is followed like any other.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut stores = client.paginate::<KvStore>("/resources/stores/kv", 100);
//! while stores.next().await {
//!     for store in stores.items() {
//!         println!("{:?}", store.name);
//!     }
//! }
//! if let Some(e) = stores.err() {
//!     eprintln!("listing failed: {e}");
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, HttpRequest, RequestOptions, RestClient};
use crate::rest::decode;
use crate::rest::errors::ApiError;

/// Query parameters set by the paginator itself.
const RESERVED_PARAMS: [&str; 2] = ["cursor", "limit"];

/// One page of a cursor listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Items on this page.
    #[serde(default)]
    pub data: Vec<T>,
    /// Continuation metadata.
    #[serde(default)]
    pub meta: PageMeta,
}

/// Pagination metadata of a [`Page`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Token for the next page; absent or empty on the last page.
    pub next_cursor: Option<String>,
    /// Page size the server applied.
    pub limit: Option<u32>,
}

impl PageMeta {
    /// Returns the next cursor, treating an empty string as absent.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|cursor| !cursor.is_empty())
    }
}

/// Continuation state owned by one [`Paginator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Opaque token; empty before the first page.
    pub token: String,
    /// Requested page size; zero lets the server decide.
    pub limit: u32,
}

/// Lifecycle of a [`Paginator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// More pages may be fetched.
    Ready,
    /// The last page has been fetched.
    Exhausted,
    /// A fetch failed; see [`Paginator::err`].
    Errored,
}

/// Stateful iterator over a cursor listing.
///
/// `next` takes `&mut self`, so each paginator has exactly one consumer.
#[derive(Debug)]
pub struct Paginator<'c, T> {
    client: &'c RestClient,
    path: String,
    options: RequestOptions,
    cursor: Cursor,
    state: PageState,
    items: Vec<T>,
    error: Option<ApiError>,
    pages: usize,
}

impl<'c, T: DeserializeOwned> Paginator<'c, T> {
    /// Creates a paginator in the `Ready` state with an empty cursor.
    #[must_use]
    pub fn new(client: &'c RestClient, path: String, limit: u32) -> Self {
        Self {
            client,
            path,
            options: RequestOptions::default(),
            cursor: Cursor {
                token: String::new(),
                limit,
            },
            state: PageState::Ready,
            items: Vec::new(),
            error: None,
            pages: 0,
        }
    }

    /// Attaches headers and query parameters sent with every page request.
    ///
    /// `cursor` and `limit` are owned by the paginator; option parameters
    /// with those names are dropped.
    #[must_use]
    pub fn with_options(mut self, mut options: RequestOptions) -> Self {
        options.params.retain(|(key, _)| {
            let reserved = RESERVED_PARAMS.contains(&key.as_str());
            if reserved {
                tracing::debug!(
                    path = %self.path,
                    param = %key,
                    "dropping paging parameter from options"
                );
            }
            !reserved
        });
        self.options = options;
        self
    }

    /// Fetches the next page.
    ///
    /// Returns `true` if a page was fetched; its items are then available
    /// from [`items`](Self::items). Returns `false` once the listing is
    /// exhausted or after an error, and keeps returning `false`.
    #[allow(clippy::should_implement_trait)]
    pub async fn next(&mut self) -> bool {
        if self.state != PageState::Ready {
            return false;
        }

        match self.fetch().await {
            Ok(page) => {
                self.pages += 1;
                self.items = page.data;
                match page.meta.next_cursor() {
                    Some(next) => self.cursor.token = next.to_string(),
                    None => {
                        self.cursor.token.clear();
                        self.state = PageState::Exhausted;
                    }
                }
                tracing::trace!(
                    path = %self.path,
                    page = self.pages,
                    items = self.items.len(),
                    state = ?self.state,
                    "fetched page"
                );
                true
            }
            Err(error) => {
                tracing::trace!(path = %self.path, page = self.pages + 1, %error, "page fetch failed");
                self.items.clear();
                self.error = Some(error);
                self.state = PageState::Errored;
                false
            }
        }
    }

    async fn fetch(&self) -> Result<Page<T>, ApiError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, self.path.clone());
        if !self.cursor.token.is_empty() {
            builder = builder.query_param("cursor", self.cursor.token.clone());
        }
        if self.cursor.limit > 0 {
            builder = builder.query_param("limit", self.cursor.limit.to_string());
        }
        let request = builder
            .options(&self.options)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let response = self.client.http_client().request(request).await?;
        Ok(decode::from_response(&response, "Page")?)
    }

    /// Items of the most recently fetched page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the paginator, returning the most recent page's items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The error that stopped the paginator, if any.
    #[must_use]
    pub const fn err(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> PageState {
        self.state
    }

    /// Current cursor.
    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Number of pages fetched so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> usize {
        self.pages
    }
}
