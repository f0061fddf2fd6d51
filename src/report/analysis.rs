// Per-bucket aggregation
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::{
    DateTime,
    SecondsFormat,
    Utc,
};
use crate::common::{
    Bucket,
    Error,
    HumanSize,
    ObjectDescriptor,
};
use serde::{
    Serialize,
    Serializer,
};
use std::collections::BTreeMap;
use tracing::debug;

/// The report for a single bucket.
///
/// Field names serialize exactly as they appear in the JSON output.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Analysis {
    pub name: String,

    #[serde(serialize_with = "serialize_rfc3339")]
    pub creation_date: DateTime<Utc>,

    /// Most recent modification time of any object in the bucket.
    #[serde(serialize_with = "serialize_rfc3339")]
    pub last_modified: DateTime<Utc>,

    pub total_size: u64,

    /// The `--count` the report was made with.
    pub display_object_count: i64,

    pub total_count: u64,

    #[serde(rename = "SizePerOwnerID")]
    pub size_per_owner_id: BTreeMap<String, u64>,

    /// Rendered object descriptors, sorted, at most `|display_object_count|`
    /// of them.
    pub objects: Vec<String>,

    /// Set if the scan failed, in which case the totals are not reported.
    pub error: Option<String>,
}

/// Accumulates an `Analysis` while a bucket is scanned.
///
/// An `Accumulator` belongs to a single scan. It's consumed by `finalize` or
/// `fail`, so a bucket can only ever produce one `Analysis`.
#[derive(Debug)]
pub struct Accumulator {
    analysis: Analysis,
}

impl Accumulator {
    /// Start accumulating for `bucket`.
    pub fn new(bucket: &Bucket, display_object_count: i64) -> Self {
        let analysis = Analysis {
            name:                 bucket.name.clone(),
            creation_date:        bucket.creation_date,
            display_object_count: display_object_count,
            ..Default::default()
        };

        Self {
            analysis,
        }
    }

    /// Fold `object` into the running totals.
    pub fn process_object(&mut self, object: ObjectDescriptor) {
        let a = &mut self.analysis;

        a.total_count += 1;
        a.total_size  += object.size;

        *a.size_per_owner_id.entry(object.owner).or_insert(0) += object.size;

        if object.last_modified > a.last_modified {
            a.last_modified = object.last_modified;
        }

        let descriptor = format!(
            "{} {} {}",
            rfc3339(&object.last_modified),
            object.size.humansize(),
            object.key,
        );

        a.objects.push(descriptor);
    }

    /// Running total size.
    pub fn total_size(&self) -> u64 {
        self.analysis.total_size
    }

    /// Finish a successful scan.
    ///
    /// The object descriptors are sorted and cut down to the display count.
    pub fn finalize(self) -> Analysis {
        let mut analysis = self.analysis;

        debug!(
            "finalize: '{}' has {} objects totalling {} bytes",
            analysis.name,
            analysis.total_count,
            analysis.total_size,
        );

        let mut objects = std::mem::take(&mut analysis.objects);
        objects.sort();

        analysis.objects = select_sample(objects, analysis.display_object_count);

        analysis
    }

    /// Finish a failed scan.
    ///
    /// Whatever was accumulated before the failure is thrown away, only the
    /// bucket details and the error are reported.
    pub fn fail(self, error: &Error) -> Analysis {
        let analysis = self.analysis;

        debug!("fail: '{}' failed: {}", analysis.name, error);

        Analysis {
            name:                 analysis.name,
            creation_date:        analysis.creation_date,
            display_object_count: analysis.display_object_count,
            error:                Some(error.to_string()),
            ..Default::default()
        }
    }
}

/// Pick the entries of sorted `entries` that should be displayed.
///
/// A positive `count` keeps the last `count` entries (the newest, when
/// entries start with their timestamp), a negative `count` keeps the first
/// `-count`. Zero keeps nothing.
pub fn select_sample(mut entries: Vec<String>, count: i64) -> Vec<String> {
    let len = entries.len();
    let n   = usize::try_from(count.unsigned_abs())
        .unwrap_or(usize::MAX)
        .min(len);

    if count >= 0 {
        entries.split_off(len - n)
    }
    else {
        entries.truncate(n);
        entries
    }
}

/// RFC3339 with whole seconds and a `Z` suffix.
pub fn rfc3339(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_rfc3339<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&rfc3339(timestamp))
}
