use clap::Parser;
use snb_storefront::app::commands;
use snb_storefront::utils::{logger, validation::Validate};
use snb_storefront::{CliConfig, StoreError, Storefront};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting snb-storefront");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Storefront failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(cli: &CliConfig) -> Result<(), StoreError> {
    let config = cli.load_store_config()?;

    // 驗證配置
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated");

    let mut store = Storefront::from_config(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    commands::run_command(&mut store, cli.command(), cli.json, stdin.lock(), &mut out)
}
