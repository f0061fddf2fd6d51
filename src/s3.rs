// Imports all of the components needed for s3::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Conversion from `ListBucketsOutput` into our `Buckets`.
mod bucket_list;

/// S3 `Client`.
mod client;

/// Conversion from `ListObjectsV2Output` into an `ObjectPage`.
mod object_page;

/// Implementation of the `StorageBackend` trait for our S3 `Client`.
mod storage_backend;

pub use client::*;
