use crate::adapters::batch::{read_forms, write_breakdowns};
use crate::app::AppContext;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub rows: usize,
    pub total_tips: f64,
}

/// 逐列計算後寫出；計算本身不會失敗，錯誤只來自讀寫
pub fn process<R: Read, W: Write>(context: &AppContext, input: R, output: W) -> Result<BatchSummary> {
    let forms = read_forms(input, context.default_round_up)?;

    let rows: Vec<_> = forms
        .into_iter()
        .map(|form| {
            let breakdown = context.calculator.calculate(&form);
            (form, breakdown)
        })
        .collect();

    write_breakdowns(output, &rows, &context.formatter)?;

    let summary = BatchSummary {
        rows: rows.len(),
        total_tips: rows.iter().map(|(_, breakdown)| breakdown.tip_amount).sum(),
    };
    tracing::debug!("Batch summary: {:?}", summary);
    Ok(summary)
}

pub fn run(context: &AppContext, input_path: &str, output_path: Option<&str>) -> Result<BatchSummary> {
    tracing::info!("📁 Reading bills from: {}", input_path);
    let input = BufReader::new(File::open(input_path)?);

    let summary = match output_path {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let output = BufWriter::new(File::create(path)?);
            let summary = process(context, input, output)?;
            tracing::info!("📁 Output saved to: {}", path);
            summary
        }
        None => process(context, input, std::io::stdout().lock())?,
    };

    tracing::info!(
        "✅ Processed {} rows, tips total {}",
        summary.rows,
        context.formatter.format_plain(summary.total_tips)
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::currency::CurrencyFormatter;
    use crate::core::TipCalculator;
    use crate::domain::model::SplitMode;

    #[test]
    fn test_process_in_memory() {
        let context = AppContext::default();
        let input = "bill,people,rating,round_up\n100,1,3,false\n50,2,2,true\n,,,\n";
        let mut out = Vec::new();

        let summary = process(&context, input.as_bytes(), &mut out).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.total_tips, 29.0);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "100,1,3,false,20,20.00,120.00,120.00");
        assert_eq!(lines[2], "50,2,2,true,18,9.00,30.00,30.00");
        assert_eq!(lines[3], ",1,1,false,15,0.00,0.00,0.00");
    }

    #[test]
    fn test_process_applies_default_round_up_when_column_missing() {
        let context = AppContext::new(
            TipCalculator::new(SplitMode::WholeBill),
            CurrencyFormatter::default(),
            true,
        );
        let input = "bill,people\n50,2\n";
        let mut out = Vec::new();

        process(&context, input.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().nth(1), Some("50,2,1,true,15,7.50,58.00,29.00"));
    }
}
