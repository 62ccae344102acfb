use crate::adapters::currency::CurrencyFormatter;
use crate::core::parse::{parse_flag, parse_rating};
use crate::domain::model::{TipBreakdown, TipForm};
use crate::utils::error::{Result, TipError};
use serde::Serialize;
use std::io::{Read, Write};

pub const INPUT_COLUMNS: [&str; 4] = ["bill", "people", "rating", "round_up"];

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    bill: &'a str,
    people: u32,
    rating: i64,
    round_up: bool,
    tip_percent: String,
    tip_amount: String,
    grand_total: String,
    person_share: String,
}

/// 讀取批次 CSV，每一列都當作原始文字交給解析函式處理。
/// 欄位以標頭名稱比對，缺少的欄位視為空字串；`round_up` 為空時採用 `default_round_up`。
pub fn read_forms<R: Read>(input: R, default_round_up: bool) -> Result<Vec<TipForm>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let column_index: Vec<Option<usize>> = INPUT_COLUMNS
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
        })
        .collect();

    if column_index[0].is_none() {
        return Err(TipError::BatchFormatError {
            message: format!(
                "CSV header must contain a 'bill' column, found: {}",
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    let mut forms = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| TipError::BatchRowError {
            row: index + 1,
            message: e.to_string(),
        })?;
        let field = |column: usize| {
            column_index[column]
                .and_then(|i| record.get(i))
                .unwrap_or("")
        };

        forms.push(TipForm {
            bill_text: field(0).to_string(),
            people_text: field(1).to_string(),
            rating: parse_rating(field(2)),
            round_up: match field(3) {
                "" => default_round_up,
                flag => parse_flag(flag),
            },
        });
    }

    tracing::debug!("Read {} rows from batch input", forms.len());
    Ok(forms)
}

/// 寫出計算結果，數值只保留格式化器的小數位數，不含貨幣符號
pub fn write_breakdowns<W: Write>(
    output: W,
    rows: &[(TipForm, TipBreakdown)],
    formatter: &CurrencyFormatter,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);

    for (form, breakdown) in rows {
        writer.serialize(OutputRow {
            bill: &form.bill_text,
            people: breakdown.people,
            rating: form.service_rating().level(),
            round_up: breakdown.round_up,
            tip_percent: format!("{}", breakdown.tip_percent),
            tip_amount: formatter.format_plain(breakdown.tip_amount),
            grand_total: formatter.format_plain(breakdown.grand_total),
            person_share: formatter.format_plain(breakdown.person_share),
        })?;
    }

    writer.flush()?;
    Ok(())
}
