use std::path::PathBuf;

use cfdump_cloudfront::exporter::Exporter;
use cfdump_core::config::AwsExporterConfig;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cfdump", about = "Export a CloudFront distribution's configuration to JSON", version)]
struct Cli {
    /// CloudFront distribution ID
    #[arg(long)]
    dist_id: String,

    /// Path to write JSON output
    #[arg(long, default_value = "distribution-dump.json")]
    output: PathBuf,

    /// Print a summary table to stdout
    #[arg(long)]
    table: bool,

    /// RON config file (region, endpoint override, pinned account id)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cfdump_cloudfront=warn,cfdump_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AwsExporterConfig::try_load(cli.config.as_deref())?;
    config.verify_sts().await?;

    let exporter = Exporter::connect(&config).await;
    exporter.export(&cli.dist_id, &cli.output, cli.table).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_distribution_dump() {
        let cli = Cli::try_parse_from(["cfdump", "--dist-id", "E2EXAMPLE"]).unwrap();
        assert_eq!(cli.dist_id, "E2EXAMPLE");
        assert_eq!(cli.output, PathBuf::from("distribution-dump.json"));
        assert!(!cli.table);
        assert!(cli.config.is_none());
    }

    #[test]
    fn dist_id_is_required() {
        assert!(Cli::try_parse_from(["cfdump"]).is_err());
    }

    #[test]
    fn table_flag_is_recognized() {
        let cli = Cli::try_parse_from(["cfdump", "--dist-id", "E2EXAMPLE", "--table"]).unwrap();
        assert!(cli.table);
    }
}
