// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::config::Region as S3Region;
use crate::common::{
    Buckets,
    ObjectPage,
    Region,
};
use super::bucket_list::BucketList;
use tracing::debug;

/// The S3 `Client`.
#[derive(Clone, Debug)]
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,

    /// `Region` that this client issues requests in.
    pub region: Region,
}

impl Client {
    /// Return a new S3 `Client` in the given `Region`.
    ///
    /// Failed requests are not retried, errors are reported straight away.
    pub async fn new(region: Region) -> Self {
        debug!("new: Creating S3Client in region '{}'", region.name());

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(region.clone())
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint) = region.endpoint() {
            debug!("new: Using custom endpoint '{}'", endpoint);

            loader = loader.endpoint_url(endpoint);
        }

        let config = loader.load().await;

        // S3 compatible services generally want path style URLs.
        let config = S3ConfigBuilder::from(&config)
            .force_path_style(region.is_custom())
            .build();

        let client = S3Client::from_conf(config);

        Self {
            client,
            region,
        }
    }

    /// Return a copy of this `Client` issuing requests in `region`.
    ///
    /// Everything else about the configuration, including any custom
    /// endpoint, is kept.
    pub fn in_region(&self, region: &str) -> Self {
        debug!("in_region: Creating S3Client in region '{}'", region);

        let config = self.client.config()
            .to_builder()
            .region(S3Region::new(region.to_owned()))
            .build();

        Self {
            client: S3Client::from_conf(config),
            region: self.region.clone().set_region(region),
        }
    }

    /// Returns the buckets owned by the account.
    pub async fn list_buckets(&self) -> Result<Buckets> {
        debug!("list_buckets: Listing...");

        let output = self.client.list_buckets()
            .send()
            .await
            .context("ListBuckets")?;

        let bucket_list: BucketList = output.into();

        Ok(bucket_list.into_buckets())
    }

    /// Return the location constraint for the given `bucket`, if any.
    ///
    /// This method will properly handle the case of the empty and `EU`
    /// location constraints, by replacing them with `us-east-1` and
    /// `eu-west-1` respectively.
    pub async fn get_bucket_location(&self, bucket: &str) -> Result<Option<String>> {
        debug!("get_bucket_location for '{}'", bucket);

        let output = self.client.get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .with_context(|| format!("GetBucketLocation for '{}'", bucket))?;

        let location = output.location_constraint()
            .map(|l| normalise_location(l.as_str()));

        debug!("GetBucketLocation API returned '{:?}'", location);

        Ok(location)
    }

    /// Return a single page of the current objects in `bucket`.
    ///
    /// Owners are requested along with the objects, so that sizes can be
    /// attributed to them.
    pub async fn list_objects(
        &self,
        bucket:             &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage> {
        debug!("list_objects for '{}', token: {:?}", bucket, continuation_token);

        let output = self.client.list_objects_v2()
            .bucket(bucket)
            .fetch_owner(true)
            .set_continuation_token(continuation_token)
            .send()
            .await
            .with_context(|| format!("ListObjectsV2 for '{}'", bucket))?;

        Ok(output.into())
    }
}

// Location constraints for sufficiently old buckets in S3 may not quite meet
// expectations. These returns are badly documented and the assumptions here
// are based on what the web console does.
fn normalise_location(location: &str) -> String {
    match location {
        ""   => "us-east-1".to_string(),
        "EU" => "eu-west-1".to_string(),
        _    => location.to_string(),
    }
}
