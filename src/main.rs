use clap::Parser;
use multi_calendar::core::runner;
use multi_calendar::utils::logger;
use multi_calendar::CliConfig;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match runner::execute(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(runner::exit_code(&e));
        }
    }
}
