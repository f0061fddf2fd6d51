// An in-memory StorageBackend for tests
use anyhow::{
    anyhow,
    Result,
};
use async_trait::async_trait;
use chrono::{
    DateTime,
    Utc,
};
use std::collections::{
    HashMap,
    HashSet,
};
use std::sync::{
    Arc,
    Mutex,
};
use std::time::Duration;
use super::{
    Bucket,
    Buckets,
    ObjectDescriptor,
    ObjectPage,
    StorageBackend,
};

/// A page request seen by the `MockBackend`: region, bucket and the
/// continuation token that was sent.
pub type PageRequest = (Option<String>, String, Option<String>);

/// Serves buckets and object pages from memory.
///
/// Continuation tokens are the index of the next page.
#[derive(Clone, Debug, Default)]
pub struct MockBackend {
    pub region:    Option<String>,
    buckets:       Buckets,
    fail_listing:  bool,
    locations:     HashMap<String, String>,
    bad_locations: HashSet<String>,
    pages:         HashMap<String, Vec<Vec<ObjectDescriptor>>>,
    failing_pages: HashMap<String, usize>,
    delays:        HashMap<String, Duration>,
    panics:        HashSet<String>,
    requests:      Arc<Mutex<Vec<PageRequest>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bucket holding the given pages of objects.
    pub fn with_bucket(
        mut self,
        name:  &str,
        pages: Vec<Vec<ObjectDescriptor>>,
    ) -> Self {
        let creation_date = timestamp("2020-03-12T14:45:00Z");

        self.buckets.push(Bucket::new(name, creation_date));
        self.pages.insert(name.into(), pages);
        self
    }

    pub fn with_location(mut self, bucket: &str, region: &str) -> Self {
        self.locations.insert(bucket.into(), region.into());
        self
    }

    pub fn with_failing_location(mut self, bucket: &str) -> Self {
        self.bad_locations.insert(bucket.into());
        self
    }

    /// Listing `bucket` fails when page number `page` is requested.
    pub fn with_failing_page(mut self, bucket: &str, page: usize) -> Self {
        self.failing_pages.insert(bucket.into(), page);
        self
    }

    /// Every page of `bucket` takes `delay` to arrive.
    pub fn with_delay(mut self, bucket: &str, delay: Duration) -> Self {
        self.delays.insert(bucket.into(), delay);
        self
    }

    /// Listing `bucket` panics instead of returning.
    pub fn with_panic(mut self, bucket: &str) -> Self {
        self.panics.insert(bucket.into());
        self
    }

    pub fn with_failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Page requests made against this backend or any of its clones.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageBackend for MockBackend {
    async fn list_all_buckets(&self) -> Result<Buckets> {
        if self.fail_listing {
            return Err(anyhow!("ListBuckets: AccessDenied"));
        }

        Ok(self.buckets.clone())
    }

    async fn location_constraint(&self, bucket: &str) -> Result<Option<String>> {
        if self.bad_locations.contains(bucket) {
            return Err(anyhow!("GetBucketLocation: NoSuchBucket"));
        }

        Ok(self.locations.get(bucket).cloned())
    }

    fn in_region(&self, region: &str) -> Self {
        let mut backend = self.clone();
        backend.region = Some(region.into());
        backend
    }

    async fn list_objects_page(
        &self,
        bucket:             &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage> {
        self.requests.lock().unwrap().push((
            self.region.clone(),
            bucket.into(),
            continuation_token.clone(),
        ));

        if self.panics.contains(bucket) {
            panic!("listing '{}' panicked", bucket);
        }

        if let Some(delay) = self.delays.get(bucket) {
            tokio::time::sleep(*delay).await;
        }

        let index = match continuation_token {
            Some(token) => token.parse::<usize>()?,
            None        => 0,
        };

        if self.failing_pages.get(bucket) == Some(&index) {
            return Err(anyhow!("ListObjectsV2: InternalError on page {}", index));
        }

        let pages = self.pages
            .get(bucket)
            .ok_or_else(|| anyhow!("NoSuchBucket: {}", bucket))?;

        let objects = pages.get(index).cloned().unwrap_or_default();

        let continuation_token = if index + 1 < pages.len() {
            Some((index + 1).to_string())
        }
        else {
            None
        };

        Ok(ObjectPage {
            objects,
            continuation_token,
        })
    }
}

/// Parse an RFC3339 timestamp into a UTC `DateTime`.
pub fn timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap()
        .with_timezone(&Utc)
}

/// Shorthand for building an `ObjectDescriptor`.
pub fn object(
    key:           &str,
    size:          u64,
    owner:         &str,
    last_modified: &str,
) -> ObjectDescriptor {
    ObjectDescriptor {
        key:           key.into(),
        size:          size,
        last_modified: timestamp(last_modified),
        owner:         owner.into(),
    }
}
