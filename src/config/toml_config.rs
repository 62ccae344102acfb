use crate::adapters::currency::{CurrencyFormatter, SymbolPosition};
use crate::domain::model::SplitMode;
use crate::domain::ports::SplitSettings;
use crate::utils::error::{Result, TipError};
use crate::utils::validation::{
    validate_distinct_separators, validate_non_empty_string, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_FRACTION_DIGITS: usize = 4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub calculation: CalculationConfig,
    pub currency: CurrencyConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    pub split_mode: Option<SplitMode>,
    pub default_round_up: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub symbol: Option<String>,
    pub symbol_position: Option<SymbolPosition>,
    pub fraction_digits: Option<usize>,
    /// 空字串表示不分位
    pub grouping_separator: Option<String>,
    pub decimal_separator: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TipError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TipError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TIP_CURRENCY})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TipError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let currency = &self.currency;

        if let Some(symbol) = &currency.symbol {
            validate_non_empty_string("currency.symbol", symbol)?;
        }

        if let Some(digits) = currency.fraction_digits {
            validate_range("currency.fraction_digits", digits, 0, MAX_FRACTION_DIGITS)?;
        }

        let grouping = match &currency.grouping_separator {
            Some(separator) => single_char("currency.grouping_separator", separator, true)?,
            None => Some(','),
        };
        let decimal = match &currency.decimal_separator {
            Some(separator) => single_char("currency.decimal_separator", separator, false)?
                .unwrap_or('.'),
            None => '.',
        };
        validate_distinct_separators("currency.decimal_separator", grouping, decimal)?;

        Ok(())
    }

    /// 依設定組出貨幣格式化器，未設定的欄位使用預設值。
    /// 呼叫前應先通過 `validate`。
    pub fn currency_formatter(&self) -> CurrencyFormatter {
        let currency = &self.currency;
        let defaults = CurrencyFormatter::default();

        let symbol = currency.symbol.as_deref().unwrap_or("$");
        let formatter = CurrencyFormatter::new(symbol, currency.symbol_position.unwrap_or_default())
            .with_fraction_digits(
                currency
                    .fraction_digits
                    .unwrap_or_else(|| defaults.fraction_digits()),
            );

        let grouping = match &currency.grouping_separator {
            Some(separator) => separator.chars().next(),
            None => Some(','),
        };
        let decimal = currency
            .decimal_separator
            .as_deref()
            .and_then(|separator| separator.chars().next())
            .unwrap_or('.');

        formatter.with_separators(grouping, decimal)
    }
}

fn single_char(field: &str, value: &str, allow_empty: bool) -> Result<Option<char>> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) if allow_empty => Ok(None),
        (Some(c), None) if !c.is_ascii_digit() => Ok(Some(c)),
        _ => Err(TipError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Separator must be a single non-digit character".to_string(),
        }),
    }
}

impl SplitSettings for TomlConfig {
    fn split_mode(&self) -> SplitMode {
        self.calculation.split_mode.unwrap_or_default()
    }

    fn default_round_up(&self) -> bool {
        self.calculation.default_round_up.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::AmountFormatter;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.split_mode(), SplitMode::PerPerson);
        assert!(!config.default_round_up());
        assert_eq!(config.currency_formatter(), CurrencyFormatter::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[calculation]
split_mode = "whole_bill"
default_round_up = true

[currency]
symbol = "€"
symbol_position = "suffix"
fraction_digits = 2
grouping_separator = "."
decimal_separator = ","
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.split_mode(), SplitMode::WholeBill);
        assert!(config.default_round_up());
        assert_eq!(config.currency_formatter().format(1234.5), "1.234,50 €");
    }

    #[test]
    fn test_empty_grouping_separator_disables_grouping() {
        let toml_content = r#"
[currency]
grouping_separator = ""
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency_formatter().format(1234.5), "$1234.50");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TIP_SPLIT_TEST_SYMBOL", "CHF");

        let toml_content = r#"
[currency]
symbol = "${TIP_SPLIT_TEST_SYMBOL}"
symbol_position = "suffix"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.currency.symbol.as_deref(), Some("CHF"));

        std::env::remove_var("TIP_SPLIT_TEST_SYMBOL");
    }

    #[test]
    fn test_unset_env_var_is_left_untouched() {
        let toml_content = r#"
[currency]
symbol = "${TIP_SPLIT_SURELY_UNSET_VARIABLE}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.currency.symbol.as_deref(),
            Some("${TIP_SPLIT_SURELY_UNSET_VARIABLE}")
        );
    }

    #[test]
    fn test_config_validation() {
        let too_precise = TomlConfig::from_toml_str("[currency]\nfraction_digits = 9\n").unwrap();
        assert!(matches!(
            too_precise.validate(),
            Err(TipError::InvalidConfigValueError { .. })
        ));

        let same_separators = TomlConfig::from_toml_str(
            "[currency]\ngrouping_separator = \",\"\ndecimal_separator = \",\"\n",
        )
        .unwrap();
        assert!(same_separators.validate().is_err());

        let long_separator =
            TomlConfig::from_toml_str("[currency]\ndecimal_separator = \"..\"\n").unwrap();
        assert!(long_separator.validate().is_err());

        let blank_symbol = TomlConfig::from_toml_str("[currency]\nsymbol = \" \"\n").unwrap();
        assert!(blank_symbol.validate().is_err());
    }

    #[test]
    fn test_split_mode_accepts_same_spellings_as_cli() {
        let config =
            TomlConfig::from_toml_str("[calculation]\nsplit_mode = \"Whole-Bill\"\n").unwrap();
        assert_eq!(config.split_mode(), SplitMode::WholeBill);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[calculation]\nsplit_mode = \"evenly\"\n").unwrap_err();
        assert!(matches!(err, TipError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[calculation]\nsplit_mode = \"per_person\"\ndefault_round_up = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.split_mode(), SplitMode::PerPerson);
        assert!(config.default_round_up());
    }
}
