// Application layer: presentation flows that feed raw input to the core and render results.

pub mod batch;
pub mod calc;
pub mod session;

use crate::adapters::currency::CurrencyFormatter;
use crate::core::TipCalculator;
use crate::domain::model::SplitMode;
use crate::domain::ports::SplitSettings;

/// 每個畫面共用的計算器、格式化器與預設值
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub calculator: TipCalculator,
    pub formatter: CurrencyFormatter,
    pub default_round_up: bool,
}

impl AppContext {
    pub fn new(calculator: TipCalculator, formatter: CurrencyFormatter, default_round_up: bool) -> Self {
        Self {
            calculator,
            formatter,
            default_round_up,
        }
    }

    /// 以設定檔為底，命令列指定的 split mode 優先
    pub fn from_settings<S: SplitSettings>(
        settings: &S,
        formatter: CurrencyFormatter,
        split_mode_override: Option<SplitMode>,
    ) -> Self {
        let split_mode = split_mode_override.unwrap_or_else(|| settings.split_mode());
        tracing::debug!(
            "Using split mode {} (default round up: {})",
            split_mode,
            settings.default_round_up()
        );
        Self::new(
            TipCalculator::new(split_mode),
            formatter,
            settings.default_round_up(),
        )
    }
}
