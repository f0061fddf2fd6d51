// StorageBackend trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::{
    Buckets,
    ObjectPage,
};

/// `StorageBackend` represents the calls we need from an object store to list
/// buckets and the objects within them.
///
/// A backend is cheap to clone. Every bucket scan gets its own clone, possibly
/// rebound to another region with `in_region`.
#[async_trait]
pub trait StorageBackend: Clone + Send + Sync + 'static {
    /// Returns every bucket visible to the account.
    async fn list_all_buckets(&self) -> Result<Buckets>;

    /// Returns the location constraint of `bucket`, if it has one.
    async fn location_constraint(&self, bucket: &str) -> Result<Option<String>>;

    /// Returns a copy of this backend issuing its calls against `region`.
    fn in_region(&self, region: &str) -> Self;

    /// Returns a single page of objects in `bucket`.
    ///
    /// `continuation_token` is `None` for the first page and the token from
    /// the previous `ObjectPage` after that.
    async fn list_objects_page(
        &self,
        bucket:             &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage>;
}
