// Converting ListObjectsV2 output into an ObjectPage
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::types::Object;
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::{
    ObjectDescriptor,
    ObjectPage,
    UNKNOWN_OWNER,
};
use tracing::warn;

/// Implement a conversion from an S3 `Object` to an `ObjectDescriptor`.
///
/// Objects listed without `fetch_owner` have no owner, they're attributed to
/// `UNKNOWN_OWNER`.
impl From<&Object> for ObjectDescriptor {
    fn from(object: &Object) -> Self {
        let size = object.size()
            .and_then(|s| u64::try_from(s).ok())
            .unwrap_or_default();

        let last_modified = object.last_modified()
            .and_then(|t| t.to_chrono_utc().ok())
            .unwrap_or_default();

        let owner = object.owner()
            .and_then(|o| o.id())
            .unwrap_or(UNKNOWN_OWNER);

        Self {
            key:           object.key().unwrap_or_default().to_string(),
            size:          size,
            last_modified: last_modified,
            owner:         owner.to_string(),
        }
    }
}

/// Implement a conversion from `ListObjectsV2Output` to an `ObjectPage`.
impl From<ListObjectsV2Output> for ObjectPage {
    fn from(output: ListObjectsV2Output) -> Self {
        let objects = output.contents()
            .iter()
            .map(ObjectDescriptor::from)
            .collect();

        // If the output was truncated (Some(true)), we should have a
        // next_continuation_token.
        // If it wasn't, (Some(false) | None) this is the last page.
        let continuation_token = match output.is_truncated() {
            Some(true) => {
                let token = output.next_continuation_token().map(String::from);

                if token.is_none() {
                    warn!("Truncated listing without a continuation token");
                }

                token
            },
            _ => None,
        };

        Self {
            objects,
            continuation_token,
        }
    }
}
