#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::cli::{Command, LogFormat};
    use crate::domain::model::SplitMode;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "tip-split")]
    #[command(version, about = "Tip and bill split calculator")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long, global = true, env = "TIP_SPLIT_CONFIG")]
        pub config: Option<String>,

        /// How the total is divided: per_person or whole_bill (overrides the config file)
        #[arg(long, global = true)]
        pub split_mode: Option<SplitMode>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
        pub log_format: LogFormat,

        #[command(subcommand)]
        pub command: Command,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }

            if let Command::Batch(batch) = &self.command {
                validate_path("batch.input", &batch.input)?;
                if let Some(output) = &batch.output {
                    validate_path("batch.output", output)?;
                }
            }

            Ok(())
        }
    }

}
