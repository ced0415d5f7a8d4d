//! Command handlers: map parsed arguments onto gateway operations.

use ghz_config::GhzConfig;
use ghz_ops::{ReportInput, SearchInput, TopInput, VolcanoSearchInput};
use ghz_upstream::UpstreamClient;

use crate::cli::{Commands, OutputFormat};
use crate::output::output;

/// Run the requested operation and print its response.
pub async fn dispatch(
    command: &Commands,
    client: &UpstreamClient,
    config: &GhzConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        Commands::Overview => output(&ghz_ops::overview(), format),
        Commands::Lookup(args) => {
            let response = ghz_ops::lookup(client, &args.event_id).await?;
            output(&response, format)
        }
        Commands::Search(args) => {
            let input = SearchInput {
                latitude: args.latitude,
                longitude: args.longitude,
                radius_km: args.radius_km,
                min_magnitude: args.min_magnitude,
                max_magnitude: args.max_magnitude,
                days: args.days,
                limit: args.limit.unwrap_or(config.general.default_limit),
            };
            let response = ghz_ops::search(client, &input).await?;
            output(&response, format)
        }
        Commands::Top(args) => {
            let input = TopInput {
                period: args.period.into(),
                min_magnitude: args.min_magnitude,
                limit: args.limit,
            };
            let response = ghz_ops::top(client, &input).await?;
            output(&response, format)
        }
        Commands::VolcanoSearch(args) => {
            let input = VolcanoSearchInput {
                country: args.country.clone(),
                name: args.name.clone(),
                limit: args.limit.unwrap_or(config.general.default_limit),
            };
            let response = ghz_ops::volcano_search(client, &input).await?;
            output(&response, format)
        }
        Commands::Report(args) => {
            let input = ReportInput {
                latitude: args.latitude,
                longitude: args.longitude,
                radius_km: args.radius_km,
            };
            let response = ghz_ops::report(client, &input).await?;
            output(&response, format)
        }
    }
}
