//! Runs one parsed `fueleu` command against the backend and writes the result to `out`.

use crate::adapters::{ApiClient, BankingApi, PoolingApi, RouteApi};
use crate::app::session::pooling::MIN_POOL_MEMBERS;
use crate::app::session::{BankingSession, PoolingSession, RoutesSession};
use crate::config::cli::{BankingCommand, CliConfig, Command, PoolCommand, RoutesCommand};
use crate::config::ClientConfig;
use crate::domain::model::RouteFilters;
use crate::presentation::{
    render_banking, render_comparisons, render_pool, render_pool_candidates, render_routes,
    routes_to_csv, routes_to_json, OutputFormat,
};
use crate::utils::validation::{validate_non_empty_string, validate_positive_amount};
use anyhow::{anyhow, Context};
use std::io::Write;

pub async fn run(cli: CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let config = ClientConfig::resolve(&cli.overrides()).context("Invalid API configuration")?;
    let client = ApiClient::new(&config)?;
    tracing::debug!("Using backend at {}", client.base_url());

    match cli.command {
        Command::Routes(command) => run_routes(client, command, out).await,
        Command::Banking(command) => run_banking(client, command, out).await,
        Command::Pool(command) => run_pool(client, command, out).await,
    }
}

async fn run_routes(
    client: ApiClient,
    command: RoutesCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut session = RoutesSession::new(RouteApi::new(client));

    match command {
        RoutesCommand::List {
            vessel_type,
            fuel_type,
            year,
            format,
        } => {
            let format: OutputFormat = format.parse()?;
            session.set_filters(RouteFilters {
                vessel_type,
                fuel_type,
                year,
            });
            session.load_routes().await;
            bail_on_error(session.error())?;

            let output = match format {
                OutputFormat::Table => render_routes(session.routes()),
                OutputFormat::Json => routes_to_json(session.routes())? + "\n",
                OutputFormat::Csv => routes_to_csv(session.routes())?,
            };
            write!(out, "{}", output)?;
        }
        RoutesCommand::Baseline { id } => {
            validate_non_empty_string("id", &id)?;
            session.set_baseline(&id).await;
            bail_on_error(session.error())?;
            writeln!(out, "✅ Route {} is now the baseline", id)?;
            write!(out, "{}", render_routes(session.routes()))?;
        }
        RoutesCommand::Compare => {
            session.load_comparisons().await;
            bail_on_error(session.error())?;
            write!(out, "{}", render_comparisons(session.comparisons()))?;
        }
    }
    Ok(())
}

async fn run_banking(
    client: ApiClient,
    command: BankingCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut session = BankingSession::new(BankingApi::new(client));

    let (ship, year) = match command {
        BankingCommand::Show(target) => {
            validate_non_empty_string("ship", &target.ship)?;
            session.load_cb(&target.ship, target.year).await;
            bail_on_error(session.error())?;
            session.load_bank_records(&target.ship, target.year).await;
            (target.ship, target.year)
        }
        BankingCommand::Bank(target) => {
            validate_non_empty_string("ship", &target.ship)?;
            session.load_cb(&target.ship, target.year).await;
            bail_on_error(session.error())?;
            if !session.can_bank() {
                return Err(anyhow!(
                    "Ship {} has no surplus to bank for {}",
                    target.ship,
                    target.year
                ));
            }
            session.bank_surplus(&target.ship, target.year).await;
            (target.ship, target.year)
        }
        BankingCommand::Apply { target, amount } => {
            validate_non_empty_string("ship", &target.ship)?;
            validate_positive_amount("amount", amount)?;
            session.load_cb(&target.ship, target.year).await;
            bail_on_error(session.error())?;
            if !session.can_apply(amount) {
                return Err(anyhow!(
                    "Ship {} has no deficit to offset for {}",
                    target.ship,
                    target.year
                ));
            }
            session.apply_banked(&target.ship, target.year, amount).await;
            (target.ship, target.year)
        }
    };

    // A write that reached the backend is reported even when the reload after it fails.
    if let Some(message) = session.success_message() {
        writeln!(out, "✅ {}", message)?;
    }
    match (session.success_message(), session.error()) {
        (Some(_), Some(error)) => {
            return Err(anyhow!(
                "Saved, but reloading the balance for {} {} failed: {}",
                ship,
                year,
                error
            ))
        }
        (None, Some(error)) => return Err(anyhow!("{}", error)),
        _ => {}
    }

    write!(
        out,
        "{}",
        render_banking(
            &ship,
            year,
            session.cb(),
            session.bank_record(),
            session.apply_result()
        )
    )?;
    Ok(())
}

async fn run_pool(client: ApiClient, command: PoolCommand, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        PoolCommand::Candidates { year } => {
            let mut routes = RoutesSession::new(RouteApi::new(client.clone()));
            routes.set_filters(RouteFilters {
                year: Some(year),
                ..Default::default()
            });
            routes.load_routes().await;
            bail_on_error(routes.error())?;

            let mut session = PoolingSession::new(PoolingApi::new(client));
            for route in routes.routes() {
                session.load_adjusted_cb(&route.route_id, year).await;
            }

            write!(
                out,
                "{}",
                render_pool_candidates(routes.routes(), session.adjusted_cbs())
            )?;
            if let Some(error) = session.error() {
                writeln!(out, "Some balances could not be loaded: {}", error)?;
            }
        }
        PoolCommand::Create {
            year,
            ships,
            dry_run,
        } => {
            let mut session = PoolingSession::new(PoolingApi::new(client));
            for ship in &ships {
                validate_non_empty_string("ship", ship)?;
                if !session.add_ship(ship, year).await {
                    bail_on_error(session.error())?;
                }
            }

            if dry_run {
                write!(out, "{}", render_pool(session.members(), None))?;
                writeln!(
                    out,
                    "Ready to submit: {}",
                    if session.can_submit() { "yes" } else { "no" }
                )?;
                return Ok(());
            }

            if session.members().len() < MIN_POOL_MEMBERS {
                return Err(anyhow!(
                    "A pool needs at least {} distinct ships",
                    MIN_POOL_MEMBERS
                ));
            }
            if !session.is_valid() {
                write!(out, "{}", render_pool(session.members(), None))?;
            }

            // refused locally, without a request, when the sum is negative
            session.create_pool(year).await;
            bail_on_error(session.error())?;
            if let Some(message) = session.success_message() {
                writeln!(out, "✅ {}", message)?;
            }
            write!(
                out,
                "{}",
                render_pool(session.members(), session.pool_results())
            )?;
        }
    }
    Ok(())
}

fn bail_on_error(error: Option<&str>) -> anyhow::Result<()> {
    match error {
        Some(message) => Err(anyhow!("{}", message)),
        None => Ok(()),
    }
}
