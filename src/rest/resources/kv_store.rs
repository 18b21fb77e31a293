//! KV store resource.
//!
//! KV stores are account-level resources with a JSON API and a cursor
//! listing:
//!
//! ```text
//! POST,GET   /resources/stores/kv
//! GET,DELETE /resources/stores/kv/{store_id}
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use cdn_api::rest::resources::kv_store;
//!
//! let mut stores = kv_store::list(&client, 100);
//! while stores.next().await {
//!     for store in stores.items() {
//!         println!("{:?} {:?}", store.id, store.name);
//!     }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, HttpResponse, RequestBody, RestClient};
use crate::rest::decode::timestamp;
use crate::rest::{
    build_path, decode_empty, decode_json, encode, require, ApiError, EncodeError, Operation,
    Page, Paginator, ValidationError,
};

const COLLECTION: [&str; 3] = ["resources", "stores", "kv"];

/// A KV store as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvStore {
    /// Store identifier.
    pub id: Option<String>,
    /// Store name.
    pub name: Option<String>,
    /// Creation time.
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Starts a cursor listing of all KV stores, `limit` per page.
#[must_use]
pub fn list(client: &RestClient, limit: u32) -> Paginator<'_, KvStore> {
    client.paginate(build_path(&COLLECTION), limit)
}

/// Fetches a single page of the KV store listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListKvStoresInput {
    /// Cursor from a previous page's `meta.next_cursor`.
    pub cursor: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
}

impl Operation for ListKvStoresInput {
    type Output = Page<KvStore>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const NAME: &'static str = "ListKvStores";

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn path(&self) -> String {
        build_path(&COLLECTION)
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(cursor) = self.cursor.as_deref().filter(|c| !c.is_empty()) {
            query.push(("cursor".to_string(), cursor.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        query
    }

    fn decode(response: &HttpResponse) -> Result<Page<KvStore>, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Creates a KV store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateKvStoreInput {
    /// Store name (required).
    pub name: String,
    /// Storage region; sent as the `location` query parameter.
    #[serde(skip)]
    pub location: Option<String>,
}

impl Operation for CreateKvStoreInput {
    type Output = KvStore;
    const METHOD: HttpMethod = HttpMethod::Post;
    const NAME: &'static str = "CreateKvStore";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, ValidationError::MissingName)
    }

    fn path(&self) -> String {
        build_path(&COLLECTION)
    }

    fn query(&self) -> Vec<(String, String)> {
        self.location
            .iter()
            .map(|location| ("location".to_string(), location.clone()))
            .collect()
    }

    async fn body(&self) -> Result<Option<RequestBody>, EncodeError> {
        encode::json(self).map(Some)
    }

    fn decode(response: &HttpResponse) -> Result<KvStore, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Fetches a KV store by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetKvStoreInput {
    /// Store identifier (required).
    pub store_id: String,
}

impl Operation for GetKvStoreInput {
    type Output = KvStore;
    const METHOD: HttpMethod = HttpMethod::Get;
    const NAME: &'static str = "GetKvStore";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.store_id, ValidationError::MissingStoreId)
    }

    fn path(&self) -> String {
        build_path(&["resources", "stores", "kv", self.store_id.as_str()])
    }

    fn decode(response: &HttpResponse) -> Result<KvStore, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Deletes a KV store. The API answers `204 No Content`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteKvStoreInput {
    /// Store identifier (required).
    pub store_id: String,
}

impl Operation for DeleteKvStoreInput {
    type Output = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    const NAME: &'static str = "DeleteKvStore";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.store_id, ValidationError::MissingStoreId)
    }

    fn path(&self) -> String {
        build_path(&["resources", "stores", "kv", self.store_id.as_str()])
    }

    fn decode(response: &HttpResponse) -> Result<(), ApiError> {
        decode_empty(response)
    }
}
