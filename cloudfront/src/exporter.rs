mod extract;
mod fetch;

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain, timeout::TimeoutConfig};
use cfdump_core::config::AwsExporterConfig;

use crate::document::ExportDocument;
use crate::table;

pub struct Exporter {
    client: aws_sdk_cloudfront::Client,
}

impl Exporter {
    pub async fn connect(config: &AwsExporterConfig) -> Exporter {
        let region = RegionProviderChain::first_try(Region::new(config.region.clone()));

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .timeout_config(
                TimeoutConfig::builder()
                    .connect_timeout(Duration::from_secs(30))
                    .operation_timeout(Duration::from_secs(30))
                    .operation_attempt_timeout(Duration::from_secs(30))
                    .read_timeout(Duration::from_secs(30))
                    .build(),
            );

        if let Some(ref endpoint_url) = config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let sdk_config = loader.load().await;

        Exporter {
            client: aws_sdk_cloudfront::Client::new(&sdk_config),
        }
    }

    /// Run the whole export: fetch the distribution config, reshape origins
    /// and behaviors (resolving referenced policies along the way), write the
    /// JSON document, and print the summary table when asked for one.
    pub async fn export(&self, distribution_id: &str, output: &Path, want_table: bool) -> anyhow::Result<()> {
        let (etag, config) = self.distribution_config(distribution_id).await?;
        tracing::info!("Fetched distribution config for {} (ETag {})", distribution_id, etag);

        let origins = match config.origins() {
            Some(origins) => extract::origin_records(origins),
            None => Vec::new(),
        };

        // Row collection only exists when --table was passed.
        let mut rows = if want_table { Some(Vec::new()) } else { None };

        let default_behavior = config
            .default_cache_behavior()
            .context("No default cache behavior in distribution config")?;
        let default_cache_behavior = vec![self.default_behavior_record(default_behavior, rows.as_mut()).await];

        let mut additional_cache_behaviors = Vec::new();
        if let Some(items) = config.cache_behaviors().and_then(|behaviors| behaviors.items.as_ref()) {
            for behavior in items {
                additional_cache_behaviors.push(self.behavior_record(behavior, rows.as_mut()).await);
            }
        }

        let document = ExportDocument {
            distribution_id: distribution_id.to_string(),
            origins,
            default_cache_behavior,
            additional_cache_behaviors,
        };

        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(output, json).with_context(|| format!("Failed to write {}", output.display()))?;

        println!("JSON written to {}", output.display());

        if let Some(rows) = rows {
            println!();
            println!("Behavior summary:");
            println!();
            println!("{}", table::render(&rows));
        }

        Ok(())
    }
}
