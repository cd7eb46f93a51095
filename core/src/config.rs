use std::path::Path;

use anyhow::{Context, bail};
use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use serde::{Deserialize, Serialize};

/// AWS-side settings for an export run, optionally loaded from a RON file.
///
/// `account_id`, when set, pins the run to one AWS account: the exporter
/// calls `sts:GetCallerIdentity` before touching CloudFront and refuses to
/// run against credentials for any other account.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct AwsExporterConfig {
    pub account_id:   Option<String>,
    pub endpoint_url: Option<String>,
    pub region:       String,
}

impl Default for AwsExporterConfig {
    fn default() -> Self {
        Self {
            account_id:   Default::default(),
            endpoint_url: Default::default(),
            // CloudFront's control plane is global and served out of us-east-1.
            region: String::from("us-east-1"),
        }
    }
}

impl AwsExporterConfig {
    pub fn try_load(config_path: Option<&Path>) -> anyhow::Result<AwsExporterConfig> {
        match config_path {
            Some(config_path) => {
                tracing::info!("Loading exporter config file at {:?}", config_path);
                let contents = std::fs::read_to_string(config_path)
                    .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;
                let config: AwsExporterConfig = ron::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file at {}", config_path.display()))?;
                Ok(config)
            }
            None => Ok(AwsExporterConfig::default()),
        }
    }

    /// When an account id is pinned, verify the ambient credentials belong to
    /// it. A mismatch or an STS failure aborts the run.
    pub async fn verify_sts(&self) -> anyhow::Result<()> {
        let Some(ref account_id) = self.account_id else {
            return Ok(());
        };

        let sts_config = aws_config::defaults(BehaviorVersion::latest())
            .region(RegionProviderChain::first_try(Region::new(self.region.clone())))
            .load()
            .await;

        let sts_client = aws_sdk_sts::Client::new(&sts_config);
        let caller_identity = sts_client.get_caller_identity().send().await;

        match caller_identity {
            Ok(caller_identity) => {
                let Some(caller_account_id) = caller_identity.account else {
                    bail!("Failed to get current account ID!");
                };

                check_account_id(account_id, &caller_account_id)
            }
            Err(e) => {
                tracing::error!("Failed to call sts:GetCallerIdentity: {}", e);
                Err(e.into())
            }
        }
    }
}

pub fn check_account_id(expected: &str, actual: &str) -> anyhow::Result<()> {
    if expected != actual {
        bail!(
            "AWS: Account ID mismatch. Configured to use account ID {expected}, \nbut credentials provided are for account ID {actual}."
        )
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_us_east_1() {
        let config = AwsExporterConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.account_id, None);
        assert_eq!(config.endpoint_url, None);
    }

    #[test]
    fn no_path_yields_defaults() {
        let config = AwsExporterConfig::try_load(None).unwrap();
        assert_eq!(config, AwsExporterConfig::default());
    }

    #[test]
    fn parses_ron_config() {
        let config: AwsExporterConfig = ron::from_str(
            r#"AwsExporterConfig(
                account_id: Some("123456789012"),
                endpoint_url: None,
                region: "eu-west-1",
            )"#,
        )
        .unwrap();
        assert_eq!(config.account_id.as_deref(), Some("123456789012"));
        assert_eq!(config.region, "eu-west-1");
    }

    #[test]
    fn try_load_reads_file() {
        let path = std::env::temp_dir().join("cfdump-config-test.ron");
        std::fs::write(
            &path,
            r#"AwsExporterConfig(account_id: None, endpoint_url: Some("http://localhost:4566"), region: "us-east-1")"#,
        )
        .unwrap();

        let config = AwsExporterConfig::try_load(Some(&path)).unwrap();
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn try_load_missing_file_errors() {
        let result = AwsExporterConfig::try_load(Some(Path::new("/does/not/exist.ron")));
        assert!(result.is_err());
    }

    #[test]
    fn account_id_mismatch_is_rejected() {
        assert!(check_account_id("123456789012", "123456789012").is_ok());
        let err = check_account_id("123456789012", "999999999999").unwrap_err();
        assert!(err.to_string().contains("Account ID mismatch"));
    }
}
