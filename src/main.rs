use clap::Parser;
use rand::SeedableRng;
use secret_santa::core::MailSender;
use secret_santa::domain::model::{DispatchSummary, Participant, SenderIdentity};
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{CliConfig, FileMailer, RosterConfig, SantaEngine, SmtpMailer};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🎅 Starting secret-santa CLI");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 驗證命令列參數
    if let Err(e) = args.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 載入 TOML 配置，任何配置錯誤都在寄出任何信之前終止
    let config = match RosterConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            eprintln!("❌ Failed to load config file '{}'", args.config);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no draw performed, no mail sent");
        return Ok(());
    }

    let smtp = config.smtp.clone();
    let (sender, roster) = config.into_parts();

    // 選擇寄送通道並執行
    let result = match &args.output {
        Some(dir) => run_engine(FileMailer::new(dir), sender, roster, args.seed).await,
        None => {
            let mailer = SmtpMailer::new(
                smtp.host.clone(),
                smtp.port,
                Duration::from_secs(smtp.timeout_seconds),
            );
            run_engine(mailer, sender, roster, args.seed).await
        }
    };

    match result {
        Ok(summary) if summary.all_sent() => {
            tracing::info!("✅ Secret santa run completed successfully!");
            println!("✅ All {} notifications delivered!", summary.sent);
        }
        Ok(summary) => {
            for failure in &summary.failures {
                eprintln!("⚠️ {}: {}", failure.name, failure.reason);
            }
            eprintln!(
                "⚠️ Delivered {} notification(s), {} failed - re-run for the failed participants",
                summary.sent,
                summary.failures.len()
            );
            std::process::exit(2);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Secret santa run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                secret_santa::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                secret_santa::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                secret_santa::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                secret_santa::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run_engine<M: MailSender>(
    mailer: M,
    sender: SenderIdentity,
    roster: Vec<Participant>,
    seed: Option<u64>,
) -> secret_santa::Result<DispatchSummary> {
    let engine = SantaEngine::new(roster, sender, mailer);

    match seed {
        Some(seed) => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            engine.run(&mut rng).await
        }
        None => engine.run(&mut rand::rng()).await,
    }
}

fn display_config_summary(config: &RosterConfig, args: &CliConfig) {
    println!("📋 Configuration Summary:");
    println!("  Sender: {}", config.sender.address);
    println!("  SMTP: {}:{}", config.smtp.host, config.smtp.port);
    println!("  Participants: {}", config.participants.len());

    for participant in &config.participants {
        println!("    - {} <{}>", participant.name, participant.address);
    }

    if let Some(output) = &args.output {
        println!("  Output: {} (composed messages, not sent)", output);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }
}
