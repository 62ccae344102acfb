//! Parse-with-default for the two free-text fields of the form.
//!
//! Typing must never be blocked, so nothing here fails: bad input simply
//! falls back to the value that keeps every later division safe.

/// 超過此金額的帳單視為無效，確保小費與總額都是有限值
pub const MAX_BILL_AMOUNT: f64 = 1e15;

/// Bill amount. Empty, unparsable, negative, non-finite or above
/// [`MAX_BILL_AMOUNT`] input yields `0.0`.
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount > 0.0 && amount <= MAX_BILL_AMOUNT => amount,
        _ => 0.0,
    }
}

/// Number of people sharing the bill. Never returns 0.
///
/// Empty or unparsable input yields `1`, and so does zero, a negative value or
/// anything too large for a `u32`.
pub fn parse_people_count(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(people) if people >= 1 => people,
        _ => 1,
    }
}

/// 評分欄位也是文字輸入時使用（批次檔、互動模式）
pub fn parse_rating(text: &str) -> i64 {
    text.trim().parse::<i64>().unwrap_or(1)
}

/// 開關欄位：true/yes/on/1 視為開啟，其餘一律關閉
pub fn parse_flag(text: &str) -> bool {
    matches!(
        text.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "on" | "1"
    )
}
