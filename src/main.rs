use clap::Parser;
use tip_split::app::{batch, calc::CalcReport, session::FormSession, AppContext};
use tip_split::config::cli::{Command, LogFormat};
use tip_split::utils::error::{ErrorSeverity, TipError};
use tip_split::utils::{logger, validation::Validate};
use tip_split::{CliConfig, TipForm, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ tip-split failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<(), TipError> {
    config.validate()?;

    // 沒有指定設定檔時使用預設值
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    file_config.validate()?;

    let context = AppContext::from_settings(
        &file_config,
        file_config.currency_formatter(),
        config.split_mode,
    );

    match &config.command {
        Command::Calc(args) => {
            let form = TipForm::new(args.bill.as_str())
                .with_people(args.people.as_str())
                .with_rating(args.rating)
                .with_round_up(args.round_up.unwrap_or(context.default_round_up));

            let report = CalcReport::new(context.calculator.calculate(&form), &context.formatter);
            if args.json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.to_text());
            }
        }
        Command::Batch(args) => {
            batch::run(&context, &args.input, args.output.as_deref())?;
        }
        Command::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            FormSession::new(&context).run(stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}
