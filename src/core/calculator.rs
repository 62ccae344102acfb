use crate::core::parse::{parse_amount, parse_people_count};
use crate::domain::model::{ServiceRating, SplitMode, TipBreakdown, TipForm};

/// 3 → 20%, 2 → 18%, 其餘（包含 1）→ 15%
pub fn tip_percent_for_rating(rating: i64) -> f64 {
    ServiceRating::from_level(rating).tip_percent()
}

/// No rounding here; only the grand total is ever rounded.
pub fn compute_tip(amount: f64, tip_percent: f64) -> f64 {
    amount * tip_percent / 100.0
}

/// `(amount + tip) / people`, then rounded up to the next whole unit when
/// `round_up` is set. Rounding happens after the division.
pub fn compute_grand_total(amount: f64, tip: f64, people: u32, round_up: bool) -> f64 {
    let total = (amount + tip) / f64::from(people.max(1));
    if round_up {
        total.ceil()
    } else {
        total
    }
}

pub fn compute_person_share(grand_total: f64, people: u32) -> f64 {
    grand_total / f64::from(people.max(1))
}

/// 將一份表單換算成完整的小費與分攤結果
#[derive(Debug, Clone, Copy, Default)]
pub struct TipCalculator {
    split_mode: SplitMode,
}

impl TipCalculator {
    pub fn new(split_mode: SplitMode) -> Self {
        Self { split_mode }
    }

    pub fn split_mode(&self) -> SplitMode {
        self.split_mode
    }

    pub fn calculate(&self, form: &TipForm) -> TipBreakdown {
        let amount = parse_amount(&form.bill_text);
        let people = parse_people_count(&form.people_text);
        let tip_percent = tip_percent_for_rating(form.rating);
        let tip_amount = compute_tip(amount, tip_percent);

        let (grand_total, person_share) = match self.split_mode {
            SplitMode::PerPerson => {
                let total = compute_grand_total(amount, tip_amount, people, form.round_up);
                (total, total)
            }
            SplitMode::WholeBill => {
                let total = compute_grand_total(amount, tip_amount, 1, form.round_up);
                (total, compute_person_share(total, people))
            }
        };

        tracing::trace!(
            amount,
            people,
            tip_percent,
            tip_amount,
            grand_total,
            person_share,
            split_mode = %self.split_mode,
            "Calculated tip breakdown"
        );

        TipBreakdown {
            amount,
            people,
            round_up: form.round_up,
            split_mode: self.split_mode,
            tip_percent,
            tip_amount,
            grand_total,
            person_share,
        }
    }
}
