use crate::domain::model::SplitMode;

/// 金額顯示交給外部格式化元件，計算核心只產出數值
pub trait AmountFormatter {
    fn format(&self, amount: f64) -> String;

    fn format_percent(&self, percent: f64) -> String {
        format!("{}%", percent.trunc() as i64)
    }
}

pub trait SplitSettings {
    fn split_mode(&self) -> SplitMode;
    fn default_round_up(&self) -> bool;
}
