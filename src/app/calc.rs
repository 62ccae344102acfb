use crate::domain::model::TipBreakdown;
use crate::domain::ports::AmountFormatter;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FormattedBreakdown {
    pub tip_percent: String,
    pub tip_amount: String,
    pub grand_total: String,
    pub person_share: String,
}

#[derive(Debug, Serialize)]
pub struct CalcReport {
    #[serde(flatten)]
    pub breakdown: TipBreakdown,
    pub formatted: FormattedBreakdown,
}

impl CalcReport {
    pub fn new<F: AmountFormatter + ?Sized>(breakdown: TipBreakdown, formatter: &F) -> Self {
        Self {
            breakdown,
            formatted: FormattedBreakdown {
                tip_percent: formatter.format_percent(breakdown.tip_percent),
                tip_amount: formatter.format(breakdown.tip_amount),
                grand_total: formatter.format(breakdown.grand_total),
                person_share: formatter.format(breakdown.person_share),
            },
        }
    }

    pub fn to_text(&self) -> String {
        let f = &self.formatted;
        format!(
            "Tip percent: {}\nTip amount:  {}\nTotal:       {}\nPer person:  {}\n",
            f.tip_percent, f.tip_amount, f.grand_total, f.person_share
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
