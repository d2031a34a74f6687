use clap::Parser;
use geocode_client::utils::error::ErrorSeverity;
use geocode_client::utils::{logger, validation::Validate};
use geocode_client::{CliArgs, MapsClient, MapsError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting geocode-client");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    match run(&args).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Query failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            // 依錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

async fn run(args: &CliArgs) -> Result<serde_json::Value, MapsError> {
    let config = args.load_config()?;
    config.validate()?;

    let query = args.query_args()?;
    let client = MapsClient::new(config);

    tracing::info!("Querying service '{}' with {} parameter(s)", args.service, query.len());
    let response = client.query(&args.service, &query).await?;
    tracing::info!("✅ Service returned {} result(s)", response.results().len());

    Ok(response.into_inner())
}
