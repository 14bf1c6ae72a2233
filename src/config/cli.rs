use crate::config::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fueleu")]
#[command(about = "FuelEU Maritime compliance console: routes, banking and pooling")]
pub struct CliConfig {
    /// Backend API base URL (overrides FUELEU_API_BASE_URL and the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            config_file: self.config.clone(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Route listing, baseline selection and comparison
    #[command(subcommand)]
    Routes(RoutesCommand),
    /// Compliance balance banking (Article 20)
    #[command(subcommand)]
    Banking(BankingCommand),
    /// Compliance pooling (Article 21)
    #[command(subcommand)]
    Pool(PoolCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum RoutesCommand {
    List {
        #[arg(long)]
        vessel_type: Option<String>,
        #[arg(long)]
        fuel_type: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        /// table, json or csv
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Mark a route as the comparison baseline
    Baseline { id: String },
    /// Compare every route against the baseline
    Compare,
}

#[derive(Debug, Clone, Args)]
pub struct ShipYear {
    #[arg(long)]
    pub ship: String,
    #[arg(long)]
    pub year: i32,
}

#[derive(Debug, Clone, Subcommand)]
pub enum BankingCommand {
    /// Show compliance balance and banked total
    Show(ShipYear),
    /// Bank the ship's current surplus
    Bank(ShipYear),
    /// Apply banked surplus against a deficit
    Apply {
        #[command(flatten)]
        target: ShipYear,
        #[arg(long)]
        amount: f64,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PoolCommand {
    /// List the year's ships with their adjusted balances
    Candidates {
        #[arg(long)]
        year: i32,
    },
    /// Build a pool from the ships' adjusted balances and submit it
    Create {
        #[arg(long)]
        year: i32,
        #[arg(long = "ship", required = true)]
        ships: Vec<String>,
        /// Show members, sum and validity without submitting
        #[arg(long)]
        dry_run: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filtered_route_listing() {
        let cli = CliConfig::try_parse_from([
            "fueleu",
            "routes",
            "list",
            "--vessel-type",
            "Container",
            "--year",
            "2024",
            "--base-url",
            "http://backend:3000/api",
        ])
        .unwrap();

        assert_eq!(cli.overrides().base_url.as_deref(), Some("http://backend:3000/api"));
        match cli.command {
            Command::Routes(RoutesCommand::List {
                vessel_type, year, format, ..
            }) => {
                assert_eq!(vessel_type.as_deref(), Some("Container"));
                assert_eq!(year, Some(2024));
                assert_eq!(format, "table");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_pool_with_repeated_ships() {
        let cli = CliConfig::try_parse_from([
            "fueleu", "pool", "create", "--year", "2024", "--ship", "R001", "--ship", "R002",
        ])
        .unwrap();

        match cli.command {
            Command::Pool(PoolCommand::Create {
                year,
                ships,
                dry_run,
            }) => {
                assert_eq!(year, 2024);
                assert_eq!(ships, ["R001", "R002"]);
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_pool_candidates_and_dry_run() {
        let cli =
            CliConfig::try_parse_from(["fueleu", "pool", "candidates", "--year", "2025"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Pool(PoolCommand::Candidates { year: 2025 })
        ));

        let cli = CliConfig::try_parse_from([
            "fueleu", "pool", "create", "--year", "2024", "--ship", "R001", "--dry-run",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Pool(PoolCommand::Create { dry_run: true, .. })
        ));
    }

    #[test]
    fn apply_requires_amount() {
        assert!(CliConfig::try_parse_from([
            "fueleu", "banking", "apply", "--ship", "R001", "--year", "2024"
        ])
        .is_err());
    }
}
