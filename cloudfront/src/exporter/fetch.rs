use anyhow::Context;
use aws_sdk_cloudfront::types::DistributionConfig;

use crate::document::{
    CachePolicyRecord, OriginRequestPolicyRecord, PolicyError, PolicyResolution, ResponseHeadersPolicyRecord,
};

use super::Exporter;
use super::extract;

impl Exporter {
    /// Fetch the distribution config and its ETag. This is the one provider
    /// call whose failure aborts the export.
    pub async fn distribution_config(&self, distribution_id: &str) -> anyhow::Result<(String, DistributionConfig)> {
        let get_response = self
            .client
            .get_distribution_config()
            .id(distribution_id)
            .send()
            .await
            .with_context(|| format!("Failed to fetch distribution config for {distribution_id}"))?;

        let config = get_response.distribution_config().context("No distribution config")?.clone();
        let etag = get_response.e_tag().context("No ETag in response")?;
        Ok((etag.to_string(), config))
    }

    /// Look up a cache policy by id. `None` in means `None` out; a provider
    /// error degrades to the inline error marker instead of propagating.
    pub async fn resolve_cache_policy(&self, policy_id: Option<&str>) -> Option<PolicyResolution<CachePolicyRecord>> {
        let policy_id = policy_id?;

        match self.client.get_cache_policy().id(policy_id).send().await {
            Ok(output) => match output.cache_policy {
                Some(policy) => Some(PolicyResolution::Resolved(extract::cache_policy_record(&policy))),
                None => Some(policy_failure(format!("No cache policy in response for {policy_id}"))),
            },
            Err(e) => {
                let err = anyhow::Error::from(e);
                tracing::warn!("Failed to fetch cache policy {}: {:#}", policy_id, err);
                Some(policy_failure(format!("{err:#}")))
            }
        }
    }

    pub async fn resolve_origin_request_policy(
        &self,
        policy_id: Option<&str>,
    ) -> Option<PolicyResolution<OriginRequestPolicyRecord>> {
        let policy_id = policy_id?;

        match self.client.get_origin_request_policy().id(policy_id).send().await {
            Ok(output) => match output.origin_request_policy {
                Some(policy) => Some(PolicyResolution::Resolved(extract::origin_request_policy_record(&policy))),
                None => Some(policy_failure(format!("No origin request policy in response for {policy_id}"))),
            },
            Err(e) => {
                let err = anyhow::Error::from(e);
                tracing::warn!("Failed to fetch origin request policy {}: {:#}", policy_id, err);
                Some(policy_failure(format!("{err:#}")))
            }
        }
    }

    pub async fn resolve_response_headers_policy(
        &self,
        policy_id: Option<&str>,
    ) -> Option<PolicyResolution<ResponseHeadersPolicyRecord>> {
        let policy_id = policy_id?;

        match self.client.get_response_headers_policy().id(policy_id).send().await {
            Ok(output) => match output.response_headers_policy {
                Some(policy) => Some(PolicyResolution::Resolved(extract::response_headers_policy_record(&policy))),
                None => Some(policy_failure(format!("No response headers policy in response for {policy_id}"))),
            },
            Err(e) => {
                let err = anyhow::Error::from(e);
                tracing::warn!("Failed to fetch response headers policy {}: {:#}", policy_id, err);
                Some(policy_failure(format!("{err:#}")))
            }
        }
    }
}

fn policy_failure<T>(error: String) -> PolicyResolution<T> {
    PolicyResolution::Failed(PolicyError { error })
}
