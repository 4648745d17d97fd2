use clap::Parser;
use usagov::utils::logger;
use usagov::{CliConfig, Client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 設定檔只讀取一次，日誌與連線設定共用
    let file = config.load_config_file();

    // 初始化日誌
    let (verbose, json_logs) = config.logging(file.as_ref().ok().and_then(Option::as_ref));
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", config.command);
    if let Some(path) = &config.config {
        tracing::debug!("Config file: {}", path.display());
    }

    let settings = match file.and_then(|file| config.settings(file.as_ref())) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let client = Client::from_config(&settings)?;
    let command = config.command;
    let name = command.name();

    tracing::info!("Querying {} from {}", name, client.base_url());

    match command.execute(&client).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            tracing::info!("✅ {} request completed", name);
        }
        Err(e) => {
            tracing::error!(
                "❌ {} request failed: {} (Category: {:?}, Severity: {:?})",
                name,
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 依錯誤嚴重程度決定退出碼
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
