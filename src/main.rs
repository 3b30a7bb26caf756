use clap::Parser;
use primbon::utils::{logger, validation::Validate};
use primbon::{CliConfig, EmbeddedLocales, LocaleDir, ReportEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting primbon report generation");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let today = chrono::Local::now().date_naive();

    let result = match &config.locale_dir {
        Some(dir) => {
            tracing::info!("📁 Loading locales from: {}", dir);
            let engine = ReportEngine::new(LocaleDir::new(dir.clone()));
            engine.generate_request(&config, today)
        }
        None => {
            let engine = ReportEngine::new(EmbeddedLocales);
            engine.generate_request(&config, today)
        }
    };

    match result {
        Ok(report) => {
            tracing::info!("✅ Report generated successfully");
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report.data)?);
            } else {
                println!("{}", report.text);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Report generation failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                primbon::utils::error::ErrorSeverity::Low => 0,
                primbon::utils::error::ErrorSeverity::Medium => 2,
                primbon::utils::error::ErrorSeverity::High => 1,
                primbon::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
