use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 服務評分，三段式，對應固定的小費百分比
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceRating {
    #[default]
    Poor,
    Good,
    Excellent,
}

impl ServiceRating {
    /// 任何不在 {1, 2, 3} 之內的等級都落回 `Poor`
    pub fn from_level(level: i64) -> Self {
        match level {
            3 => ServiceRating::Excellent,
            2 => ServiceRating::Good,
            _ => ServiceRating::Poor,
        }
    }

    pub fn level(self) -> i64 {
        match self {
            ServiceRating::Poor => 1,
            ServiceRating::Good => 2,
            ServiceRating::Excellent => 3,
        }
    }

    pub fn tip_percent(self) -> f64 {
        match self {
            ServiceRating::Poor => 15.0,
            ServiceRating::Good => 18.0,
            ServiceRating::Excellent => 20.0,
        }
    }
}

/// How the bill is divided among the people at the table.
///
/// 設定檔與命令列共用 `FromStr`，兩邊接受的寫法一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum SplitMode {
    /// Total is divided first, then rounded; the share is that divided total.
    #[default]
    PerPerson,
    /// Total is rounded as a whole bill; the share divides it once.
    WholeBill,
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitMode::PerPerson => f.write_str("per_person"),
            SplitMode::WholeBill => f.write_str("whole_bill"),
        }
    }
}

impl FromStr for SplitMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "per_person" => Ok(SplitMode::PerPerson),
            "whole_bill" => Ok(SplitMode::WholeBill),
            other => Err(format!(
                "unknown split mode '{}', expected per_person or whole_bill",
                other
            )),
        }
    }
}

impl TryFrom<String> for SplitMode {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// 表單的原始輸入，畫面每次變動就換一份新的，不做就地修改
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TipForm {
    pub bill_text: String,
    pub people_text: String,
    pub rating: i64,
    pub round_up: bool,
}

impl TipForm {
    pub fn new(bill_text: impl Into<String>) -> Self {
        Self {
            bill_text: bill_text.into(),
            ..Self::default()
        }
    }

    pub fn with_bill(self, bill_text: impl Into<String>) -> Self {
        Self {
            bill_text: bill_text.into(),
            ..self
        }
    }

    pub fn with_people(self, people_text: impl Into<String>) -> Self {
        Self {
            people_text: people_text.into(),
            ..self
        }
    }

    pub fn with_rating(self, rating: i64) -> Self {
        Self { rating, ..self }
    }

    pub fn with_round_up(self, round_up: bool) -> Self {
        Self { round_up, ..self }
    }

    pub fn service_rating(&self) -> ServiceRating {
        ServiceRating::from_level(self.rating)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipBreakdown {
    pub amount: f64,
    pub people: u32,
    pub round_up: bool,
    pub split_mode: SplitMode,
    pub tip_percent: f64,
    pub tip_amount: f64,
    pub grand_total: f64,
    pub person_share: f64,
}
