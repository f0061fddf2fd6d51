// Objects observed while scanning a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::{
    DateTime,
    Utc,
};

/// Owner ID used when the backend doesn't tell us who owns an object.
pub const UNKNOWN_OWNER: &str = "unknown";

/// A single object seen during a bucket scan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObjectDescriptor {
    /// The object key, unique within the bucket.
    pub key: String,

    /// Size of the object in bytes.
    pub size: u64,

    /// When the object was last modified.
    pub last_modified: DateTime<Utc>,

    /// ID of the account owning the object.
    pub owner: String,
}

/// One page of a paginated object listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectPage {
    /// The objects on this page, in the order the backend returned them.
    pub objects: Vec<ObjectDescriptor>,

    /// Token for requesting the next page. `None` on the last page.
    pub continuation_token: Option<String>,
}

impl ObjectPage {
    /// Returns `true` if there are no further pages after this one.
    pub fn is_last(&self) -> bool {
        self.continuation_token.is_none()
    }
}
