use crate::domain::ports::AmountFormatter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    #[default]
    Prefix,
    Suffix,
}

/// 固定格式的貨幣顯示，不做系統語系偵測
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    symbol: String,
    position: SymbolPosition,
    fraction_digits: usize,
    grouping_separator: Option<char>,
    decimal_separator: char,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            position: SymbolPosition::Prefix,
            fraction_digits: 2,
            grouping_separator: Some(','),
            decimal_separator: '.',
        }
    }
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>, position: SymbolPosition) -> Self {
        Self {
            symbol: symbol.into(),
            position,
            ..Self::default()
        }
    }

    pub fn with_fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = digits;
        self
    }

    pub fn with_separators(mut self, grouping: Option<char>, decimal: char) -> Self {
        self.grouping_separator = grouping;
        self.decimal_separator = decimal;
        self
    }

    pub fn fraction_digits(&self) -> usize {
        self.fraction_digits
    }

    /// 只輸出數字，不帶符號也不分位，給 CSV 之類的機器可讀輸出使用
    pub fn format_plain(&self, amount: f64) -> String {
        let rendered = format!("{:.*}", self.fraction_digits, amount);
        strip_negative_zero(rendered)
    }

    fn format_number(&self, amount: f64) -> String {
        let rendered = strip_negative_zero(format!("{:.*}", self.fraction_digits, amount));
        let (sign, unsigned) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered.as_str()),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(rendered.len() + integer.len() / 3);
        out.push_str(sign);
        out.push_str(&self.group_digits(integer));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    fn group_digits(&self, integer: &str) -> String {
        let Some(separator) = self.grouping_separator else {
            return integer.to_string();
        };

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

fn strip_negative_zero(rendered: String) -> String {
    match rendered.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => rendered,
    }
}

impl AmountFormatter for CurrencyFormatter {
    fn format(&self, amount: f64) -> String {
        let number = self.format_number(amount);
        match self.position {
            SymbolPosition::Prefix => format!("{}{}", self.symbol, number),
            SymbolPosition::Suffix => format!("{} {}", number, self.symbol),
        }
    }
}
