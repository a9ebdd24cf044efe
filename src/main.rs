use anyhow::Context;
use clap::Parser;
use csv2json::utils::error::ErrorSeverity;
use csv2json::utils::logger;
use csv2json::CliConfig;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli
        .into_convert_config()
        .context("failed to resolve default input/output paths")?;

    match csv2json::run(config) {
        Ok(output_path) => {
            println!(
                "Conversion complete. JSON file saved to {}",
                output_path.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
