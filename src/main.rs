use clap::Parser;
use fueleu_console::app::commands;
use fueleu_console::config::toml_config::TomlConfig;
use fueleu_console::utils::logger;
use fueleu_console::CliConfig;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // Logging format comes from the config file when one is given
    let json_logs = cli
        .config
        .as_ref()
        .and_then(|path| TomlConfig::from_file(path).ok())
        .is_some_and(|c| c.json_logging());
    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Err(e) = commands::run(cli, &mut std::io::stdout()).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
