// Handles region things
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use std::env;
use tracing::debug;

/// The region, and optionally a custom endpoint, that the default client is
/// created with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    region:   Option<region::Region>,
    endpoint: Option<String>,
}

impl Region {
    /// Return a `Region` from the environment.
    pub fn new() -> Self {
        // By default, we try to get a region from the environment, this might
        // be overridden later depending on CLI options.
        let possibilities = [
            env::var("AWS_REGION"),
            env::var("AWS_DEFAULT_REGION"),
        ];

        let region = possibilities
            .iter()
            .find_map(|region| region.as_ref().ok())
            .filter(|region| !region.is_empty())
            .map(|region| region::Region::new(region.to_owned()));

        debug!("AWS_REGION in environment is: {:?}", region);

        Self {
            region: region,
            ..Default::default()
        }
    }

    /// Returns the region name.
    pub fn name(&self) -> &str {
        match &self.region {
            Some(region) => region.as_ref(),
            None         => "default",
        }
    }

    /// Returns the custom endpoint URL, if one was set.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Returns `true` if a custom endpoint was set.
    ///
    /// Custom endpoints are S3 compatible services, which generally want path
    /// style addressing.
    pub fn is_custom(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Set a custom endpoint URL.
    pub fn set_endpoint(mut self, endpoint: &str) -> Self {
        debug!("Region endpoint set to: {:?}", endpoint);

        self.endpoint = Some(endpoint.to_string());
        self
    }

    /// Set the region name.
    pub fn set_region(mut self, region: &str) -> Self {
        debug!("Region set to: {:?}", region);

        let region = region::Region::new(region.to_string());
        self.region = Some(region);
        self
    }
}

impl ProvideRegion for Region {
    // Takes our region string and returns a proper AWS Region, this should
    // allow us to pass our Region into AWS SDK functions expecting an AWS
    // Region.
    fn region(&self) -> future::ProvideRegion<'_> {
        future::ProvideRegion::ready(self.region.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name() {
        let region = Region::default();
        assert_eq!(region.name(), "default");

        let region = region.set_region("eu-west-2");
        assert_eq!(region.name(), "eu-west-2");
    }

    #[test]
    fn test_endpoint() {
        let region = Region::default().set_region("us-east-1");
        assert!(!region.is_custom());
        assert_eq!(region.endpoint(), None);

        let region = region.set_endpoint("http://localhost:9000");
        assert!(region.is_custom());
        assert_eq!(region.endpoint(), Some("http://localhost:9000"));
    }
}
