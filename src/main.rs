use anyhow::Context;
use clap::Parser;
use r_addin_probe::utils::{logger, validation::Validate};
use r_addin_probe::{CliConfig, HealthChecker, HttpProber, ProbeConfig, ProbeError};

fn load_config(args: &CliConfig) -> anyhow::Result<ProbeConfig> {
    args.resolve().with_context(|| match &args.config {
        Some(path) => format!("Failed to load config file '{}'", path.display()),
        None => "Failed to resolve configuration".to_string(),
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // clap 預設以 2 退出，這裡統一成 0/1
    let args = match CliConfig::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            if let Some(probe_err) = e.downcast_ref::<ProbeError>() {
                eprintln!("💡 {}", probe_err.recovery_suggestion());
            }
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::debug!("Resolved config: {:?}", config);

    let prober = match HttpProber::from_config(&config) {
        Ok(prober) => prober,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let checker = HealthChecker::new(prober);
    let healthy = checker.run().await;

    std::process::exit(if healthy { 0 } else { 1 });
}
