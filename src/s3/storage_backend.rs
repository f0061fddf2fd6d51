// Implement the StorageBackend trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::{
    Buckets,
    ObjectPage,
    StorageBackend,
};
use super::client::Client;

#[async_trait]
impl StorageBackend for Client {
    /// Return `Buckets` discovered in S3.
    async fn list_all_buckets(&self) -> Result<Buckets> {
        self.list_buckets().await
    }

    /// Return the normalised location constraint of `bucket`.
    async fn location_constraint(&self, bucket: &str) -> Result<Option<String>> {
        self.get_bucket_location(bucket).await
    }

    fn in_region(&self, region: &str) -> Self {
        Client::in_region(self, region)
    }

    /// Return a page of the current objects in `bucket`.
    async fn list_objects_page(
        &self,
        bucket:             &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage> {
        self.list_objects(bucket, continuation_token).await
    }
}

#[cfg(test)]
mod tests {
    use crate::common::ReportConfig;
    use crate::report::{
        analyze_bucket,
        list_buckets,
    };
    use crate::s3::client::tests::{
        mock_client,
        ResponseType,
    };
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_list_buckets() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-list-buckets.xml"),
        ]);

        let buckets = list_buckets(&client, "another", "").await.unwrap();

        let buckets: Vec<String> = buckets.iter()
            .map(|b| b.name.to_owned())
            .collect();

        assert_eq!(buckets, vec!["another-bucket-name"]);
    }

    #[tokio::test]
    async fn test_analyze_bucket() {
        let client = mock_client(vec![
            ResponseType::FromFile("s3-list-buckets.xml"),
            ResponseType::FromFile("s3-get-bucket-location.xml"),
            ResponseType::FromFile("s3-list-objects-page-1.xml"),
            ResponseType::FromFile("s3-list-objects-page-2.xml"),
        ]);

        let config = ReportConfig {
            display_count: 2,
            ..Default::default()
        };

        let bucket = list_buckets(&client, "a-bucket", "")
            .await
            .unwrap()
            .remove(0);

        let analysis = analyze_bucket(client, bucket, config.display_count).await;

        let expected_objects = vec![
            "2020-03-01T21:10:00Z 1.0kB photos/2019/b.jpg",
            "2020-03-02T09:30:00Z 500B photos/2020/c.jpg",
        ];

        assert_eq!(analysis.error, None);
        assert_eq!(analysis.total_count, 3);
        assert_eq!(analysis.total_size, 34_292);
        assert_eq!(analysis.size_per_owner_id["owner-a"], 33_792);
        assert_eq!(analysis.size_per_owner_id["unknown"], 500);
        assert_eq!(analysis.objects, expected_objects);
    }
}
