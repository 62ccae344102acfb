use clap::{Args, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Calculate tip, total and share for a single bill
    Calc(CalcArgs),
    /// Calculate every row of a CSV file (bill,people,rating,round_up)
    Batch(BatchArgs),
    /// Edit the form line by line and watch the totals update
    Interactive,
}

#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Bill amount as typed; anything unparsable counts as 0
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub bill: String,

    /// Number of people splitting the bill; anything unparsable counts as 1
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub people: String,

    /// Service rating: 1 (15%), 2 (18%) or 3 (20%)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub rating: i64,

    /// Round the total up to the next whole unit (overrides the config file)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub round_up: Option<bool>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// CSV file to read
    #[arg(short, long)]
    pub input: String,

    /// CSV file to write; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,
}
