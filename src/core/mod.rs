pub mod calculator;
pub mod parse;

pub use calculator::{
    compute_grand_total, compute_person_share, compute_tip, tip_percent_for_rating, TipCalculator,
};
pub use parse::{parse_amount, parse_people_count};
