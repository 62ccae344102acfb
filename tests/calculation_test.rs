use tip_split::{
    compute_grand_total, compute_person_share, compute_tip, parse_amount, parse_people_count,
    tip_percent_for_rating, AmountFormatter, CurrencyFormatter, SplitMode, TipCalculator, TipForm,
};

#[test]
fn test_parse_with_defaults() {
    assert_eq!(parse_amount(""), 0.0);
    assert_eq!(parse_amount("12.5"), 12.5);
    assert_eq!(parse_amount("abc"), 0.0);

    assert_eq!(parse_people_count(""), 1);
    assert_eq!(parse_people_count("4"), 4);
    assert_eq!(parse_people_count("xyz"), 1);
    assert_eq!(parse_people_count("0"), 1);
    assert_eq!(parse_people_count("-3"), 1);
}

#[test]
fn test_rating_table() {
    assert_eq!(tip_percent_for_rating(3), 20.0);
    assert_eq!(tip_percent_for_rating(2), 18.0);
    assert_eq!(tip_percent_for_rating(1), 15.0);
    assert_eq!(tip_percent_for_rating(0), 15.0);
}

#[test]
fn test_tip_and_total_formulas() {
    assert_eq!(compute_tip(100.0, 20.0), 20.0);
    assert_eq!(compute_tip(0.0, 20.0), 0.0);

    assert_eq!(compute_grand_total(100.0, 15.0, 1, false), 115.0);
    assert_eq!(compute_grand_total(100.0, 15.0, 2, false), 57.5);
    assert_eq!(compute_grand_total(100.0, 15.0, 2, true), 58.0);
    assert_eq!(compute_person_share(115.0, 2), 57.5);
}

/// bill=50, people=2, 18% 服務 → 小費 9，每人 29.5，進位後 30
#[test]
fn test_end_to_end_per_person() {
    let calculator = TipCalculator::new(SplitMode::PerPerson);
    let form = TipForm::new("50").with_people("2").with_rating(2);

    let breakdown = calculator.calculate(&form);
    assert_eq!(breakdown.tip_percent, 18.0);
    assert_eq!(breakdown.tip_amount, 9.0);
    assert_eq!(breakdown.grand_total, 29.5);

    let rounded = calculator.calculate(&form.with_round_up(true));
    assert_eq!(rounded.grand_total, 30.0);
}

#[test]
fn test_end_to_end_whole_bill() {
    let calculator = TipCalculator::new(SplitMode::WholeBill);
    let form = TipForm::new("50")
        .with_people("2")
        .with_rating(2)
        .with_round_up(true);

    let breakdown = calculator.calculate(&form);
    assert_eq!(breakdown.grand_total, 59.0);
    assert_eq!(breakdown.person_share, 29.5);
}

#[test]
fn test_zero_people_clamps_in_both_modes() {
    for mode in [SplitMode::PerPerson, SplitMode::WholeBill] {
        let calculator = TipCalculator::new(mode);
        let zero = calculator.calculate(&TipForm::new("100").with_people("0").with_round_up(true));
        let one = calculator.calculate(&TipForm::new("100").with_people("1").with_round_up(true));
        assert_eq!(zero, one, "mode {}", mode);
        assert_eq!(zero.grand_total, 115.0);
    }
}

/// 極大的輸入一律回到預設值，輸出永遠可以直接格式化
#[test]
fn test_oversized_inputs_fall_back_to_defaults() {
    assert_eq!(parse_amount("1e308"), 0.0);
    assert_eq!(parse_people_count("99999999999"), 1);
    assert_eq!(parse_people_count("99999999999999999999"), 1);

    let formatter = CurrencyFormatter::default();
    let breakdown = TipCalculator::default().calculate(
        &TipForm::new("1e308")
            .with_people("99999999999")
            .with_rating(3),
    );
    assert_eq!(breakdown.people, 1);
    assert_eq!(formatter.format(breakdown.tip_amount), "$0.00");
    assert_eq!(formatter.format(breakdown.grand_total), "$0.00");
}

#[test]
fn test_repeated_calls_are_identical() {
    let calculator = TipCalculator::default();
    let form = TipForm::new("77.77").with_people("3").with_rating(3);

    let results: Vec<_> = (0..5).map(|_| calculator.calculate(&form)).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}
