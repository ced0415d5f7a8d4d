use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `ghz` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ghz",
    version,
    about = "Geohazard Gateway - seismic and volcanic data access"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Top-level command tree, one subcommand per gateway operation.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Describe the gateway's operations and data sources.
    Overview,
    /// Fetch one seismic event by its upstream id.
    Lookup(LookupArgs),
    /// Search seismic events, newest first.
    Search(SearchArgs),
    /// Largest events in a period, by magnitude.
    Top(TopArgs),
    /// Search volcanoes by country and/or name substring.
    #[command(name = "volcano-search")]
    VolcanoSearch(VolcanoSearchArgs),
    /// Combined seismic + volcanic hazard report for a point.
    Report(ReportArgs),
}

/// Arguments for `ghz lookup`.
#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    /// Upstream event identifier (e.g., us7000abcd).
    pub event_id: String,
}

/// Arguments for `ghz search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Spatial center latitude; ignored without --longitude.
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,
    /// Spatial center longitude; ignored without --latitude.
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,
    /// Spatial radius in km; applied only with a complete center.
    #[arg(long, default_value_t = 500.0)]
    pub radius_km: f64,
    /// Minimum magnitude.
    #[arg(long, default_value_t = 4.0)]
    pub min_magnitude: f64,
    /// Maximum magnitude.
    #[arg(long)]
    pub max_magnitude: Option<f64>,
    /// Lookback window in days.
    #[arg(long, default_value_t = 7)]
    pub days: u32,
    /// Max results to return (defaults to the configured limit).
    #[arg(short, long)]
    pub limit: Option<u32>,
}

/// Lookback period accepted by `ghz top`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum PeriodArg {
    Day,
    #[default]
    Week,
    Month,
}

impl From<PeriodArg> for ghz_ops::Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Day => Self::Day,
            PeriodArg::Week => Self::Week,
            PeriodArg::Month => Self::Month,
        }
    }
}

/// Arguments for `ghz top`.
#[derive(Clone, Debug, Args)]
pub struct TopArgs {
    /// Lookback period.
    #[arg(long, value_enum, default_value_t = PeriodArg::Week)]
    pub period: PeriodArg,
    /// Minimum magnitude.
    #[arg(long, default_value_t = 5.0)]
    pub min_magnitude: f64,
    /// Max results to return.
    #[arg(short, long, default_value_t = 10)]
    pub limit: u32,
}

/// Arguments for `ghz volcano-search`.
#[derive(Clone, Debug, Args)]
pub struct VolcanoSearchArgs {
    /// Case-insensitive country substring.
    #[arg(long)]
    pub country: Option<String>,
    /// Case-insensitive name substring; ANDed with --country.
    #[arg(long)]
    pub name: Option<String>,
    /// Max results to return (defaults to the configured limit).
    #[arg(short, long)]
    pub limit: Option<u32>,
}

/// Arguments for `ghz report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Center latitude.
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,
    /// Center longitude.
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,
    /// Radius in km, within [50, 1000].
    #[arg(long, default_value_t = 300.0)]
    pub radius_km: f64,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat, PeriodArg};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["ghz", "--format", "raw", "--verbose", "overview"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Overview));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["ghz", "overview", "--quiet"]).expect("cli should parse");
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["ghz", "--format", "xml", "overview"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn search_accepts_full_filter_set() {
        let cli = Cli::try_parse_from([
            "ghz",
            "search",
            "--latitude",
            "35.68",
            "--longitude",
            "139.65",
            "--radius-km",
            "300",
            "--min-magnitude",
            "3",
            "--max-magnitude",
            "7",
            "--days",
            "14",
            "--limit",
            "5",
        ])
        .expect("cli should parse");

        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.latitude, Some(35.68));
        assert_eq!(args.longitude, Some(139.65));
        assert_eq!(args.radius_km, 300.0);
        assert_eq!(args.max_magnitude, Some(7.0));
        assert_eq!(args.days, 14);
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn top_period_parses() {
        let cli =
            Cli::try_parse_from(["ghz", "top", "--period", "month"]).expect("cli should parse");
        let Commands::Top(args) = cli.command else {
            panic!("expected top");
        };
        assert_eq!(args.period, PeriodArg::Month);
        assert_eq!(args.limit, 10);
    }

    #[test]
    fn report_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "ghz",
            "report",
            "--latitude",
            "-7.54",
            "--longitude",
            "110.446",
        ])
        .expect("cli should parse");
        let Commands::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.latitude, -7.54);
        assert_eq!(args.radius_km, 300.0);
    }

    #[test]
    fn lookup_requires_event_id() {
        assert!(Cli::try_parse_from(["ghz", "lookup"]).is_err());
        let cli = Cli::try_parse_from(["ghz", "lookup", "us7000abcd"]).expect("cli should parse");
        let Commands::Lookup(args) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(args.event_id, "us7000abcd");
    }
}
