pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::currency::{CurrencyFormatter, SymbolPosition};
pub use app::AppContext;
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    compute_grand_total, compute_person_share, compute_tip, parse_amount, parse_people_count,
    tip_percent_for_rating, TipCalculator,
};
pub use domain::model::{ServiceRating, SplitMode, TipBreakdown, TipForm};
pub use domain::ports::{AmountFormatter, SplitSettings};
pub use utils::error::{Result, TipError};
