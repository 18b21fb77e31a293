//! Resource implementations.
//!
//! Each module pairs output structs (all fields optional, decoded from
//! JSON) with input structs implementing [`Operation`](crate::rest::Operation).
//!
//! | Module | Scope | Body codec |
//! |--------|-------|------------|
//! | [`backend`] | service version | form |
//! | [`cache_setting`] | service version | form |
//! | [`kv_store`] | account | JSON, cursor listing |
//! | [`package`] | service version | multipart |
//! | [`product`] | service | none |
//! | [`rate_limiter`] | service version, flat by id | form |

pub mod backend;
pub mod cache_setting;
pub mod kv_store;
pub mod package;
pub mod product;
pub mod rate_limiter;
