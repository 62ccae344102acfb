//! Line-oriented version of the tip form.
//!
//! The session owns the current field values and, after every command,
//! hands a fresh [`TipForm`] to the calculator and re-renders everything.

use crate::app::calc::CalcReport;
use crate::app::AppContext;
use crate::core::parse::{parse_flag, parse_rating};
use crate::domain::model::{TipBreakdown, TipForm};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  bill <amount>      set the bill amount
  people <count>     set how many people split the bill
  rating <1|2|3>     set the service rating (15%, 18%, 20%)
  round [on|off]     set or toggle rounding the total up
  show               print the current totals
  reset              clear the form
  help               print this help
  quit               leave
";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Bill(String),
    People(String),
    Rating(i64),
    Round(Option<bool>),
    Show,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    /// 空白行回傳 `None`
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "bill" => SessionCommand::Bill(arg.to_string()),
            "people" => SessionCommand::People(arg.to_string()),
            "rating" => SessionCommand::Rating(parse_rating(arg)),
            "round" if arg.is_empty() => SessionCommand::Round(None),
            "round" => SessionCommand::Round(Some(parse_flag(arg))),
            "show" => SessionCommand::Show,
            "reset" => SessionCommand::Reset,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => SessionCommand::Unknown(name.to_string()),
        };
        Some(command)
    }
}

pub struct FormSession<'a> {
    context: &'a AppContext,
    form: TipForm,
}

impl<'a> FormSession<'a> {
    pub fn new(context: &'a AppContext) -> Self {
        Self {
            context,
            form: Self::empty_form(context),
        }
    }

    fn empty_form(context: &AppContext) -> TipForm {
        TipForm::default().with_rating(1).with_round_up(context.default_round_up)
    }

    pub fn form(&self) -> &TipForm {
        &self.form
    }

    pub fn breakdown(&self) -> TipBreakdown {
        self.context.calculator.calculate(&self.form)
    }

    /// 套用一個指令，回傳 `false` 代表結束
    pub fn apply(&mut self, command: &SessionCommand) -> bool {
        let form = std::mem::take(&mut self.form);
        self.form = match command {
            SessionCommand::Bill(text) => form.with_bill(text.as_str()),
            SessionCommand::People(text) => form.with_people(text.as_str()),
            SessionCommand::Rating(level) => form.with_rating(*level),
            SessionCommand::Round(Some(flag)) => form.with_round_up(*flag),
            SessionCommand::Round(None) => {
                let toggled = !form.round_up;
                form.with_round_up(toggled)
            }
            SessionCommand::Reset => Self::empty_form(self.context),
            SessionCommand::Show
            | SessionCommand::Help
            | SessionCommand::Quit
            | SessionCommand::Unknown(_) => form,
        };
        tracing::debug!("Form after {:?}: {:?}", command, self.form);

        !matches!(command, SessionCommand::Quit)
    }

    pub fn render(&self) -> String {
        let form = &self.form;
        let report = CalcReport::new(self.breakdown(), &self.context.formatter);
        format!(
            "Bill: '{}'  People: '{}'  Rating: {}  Round up: {}\n{}",
            form.bill_text,
            form.people_text,
            form.service_rating().level(),
            if form.round_up { "on" } else { "off" },
            report.to_text()
        )
    }

    /// 讀到 EOF 或 quit 為止
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}\n{}> ", HELP, self.render())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let Some(command) = SessionCommand::parse(&line) else {
                write!(output, "> ")?;
                output.flush()?;
                continue;
            };

            if !self.apply(&command) {
                break;
            }

            match &command {
                SessionCommand::Help => write!(output, "{}", HELP)?,
                SessionCommand::Unknown(name) => {
                    writeln!(output, "Unknown command '{}', type 'help' for a list", name)?
                }
                _ => write!(output, "{}", self.render())?,
            }
            write!(output, "> ")?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }
}
