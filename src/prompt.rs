//! Interactive collection of the filter selection.
//!
//! The prompter reads lines from any `BufRead` and writes prompts to any `Write`,
//! so the same code drives the terminal and the tests.

use crate::models::{Choice, City, FilterSelection};
use anyhow::Result;
use chrono::{Month, Weekday};
use std::io::{BufRead, Write};

/// Typing this at any prompt ends the program.
pub const EXIT_WORD: &str = "exit";
/// Typing this at a filter prompt disables that filter.
pub const ALL_WORD: &str = "all";

/// Result of asking the user something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    /// The user typed the exit word, or input ended.
    Exit,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one trimmed line. `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for one filter dimension until the answer is valid.
    ///
    /// `Answer::Value(None)` means the user asked for "all".
    pub fn ask_choice<T: Choice>(&mut self) -> Result<Answer<Option<T>>> {
        let names: Vec<&str> = T::ALLOWED.iter().map(|c| c.name()).collect();
        let listed = names.join(", ");
        writeln!(
            self.output,
            "Please, write down the {} ({listed}) to show the data, or if you want to see data from all of them, type \"{ALL_WORD}\"",
            T::DETAIL
        )?;
        let prompt = format!("Please, type the {} ({listed} or '{ALL_WORD}'): ", T::DETAIL);

        loop {
            let Some(value) = self.read_line(&prompt)? else {
                return Ok(Answer::Exit);
            };
            if value.eq_ignore_ascii_case(EXIT_WORD) {
                return Ok(Answer::Exit);
            }
            if value.eq_ignore_ascii_case(ALL_WORD) {
                writeln!(self.output, "Ok. You choose: All.\n")?;
                return Ok(Answer::Value(None));
            }
            match T::parse_name(&value) {
                Some(choice) => {
                    writeln!(self.output, "Ok. You choose: {}.\n", choice.name())?;
                    return Ok(Answer::Value(Some(choice)));
                }
                None => writeln!(self.output, "The value you've entered '{value}' is invalid.")?,
            }
        }
    }

    /// Greet the user and collect city, month and day.
    pub fn get_filters(&mut self) -> Result<Answer<FilterSelection>> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;
        writeln!(self.output, "To exit, enter \"{EXIT_WORD}\" in any time")?;

        let Answer::Value(city) = self.ask_choice::<City>()? else {
            return Ok(Answer::Exit);
        };
        let Answer::Value(month) = self.ask_choice::<Month>()? else {
            return Ok(Answer::Exit);
        };
        let Answer::Value(day) = self.ask_choice::<Weekday>()? else {
            return Ok(Answer::Exit);
        };

        writeln!(self.output, "{}", crate::report::separator())?;
        Ok(Answer::Value(FilterSelection { city, month, day }))
    }

    /// Only an answer of exactly "yes" (after trimming and lowercasing) restarts.
    pub fn ask_restart(&mut self) -> Result<bool> {
        let answer = self.read_line("\nWould you like to restart? Enter yes or no.\n")?;
        Ok(answer.is_some_and(|a| a.to_lowercase() == "yes"))
    }
}
