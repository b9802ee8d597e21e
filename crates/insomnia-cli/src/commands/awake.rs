use std::io::{BufRead, Write};
use std::path::Path;

use colored::Colorize;

use insomnia_mechanics::CharacterSheet;
use insomnia_session::wizard::{self, Prompter, Step, StepOutcome};

use super::{load_sheet, save_sheet};

/// Run the character questionnaire over stdin and save the sheet.
pub fn run(file: &Path) -> Result<(), String> {
    let sheet = if file.exists() {
        load_sheet(file)?
    } else {
        CharacterSheet::default()
    };

    println!("{}", "The questions you answer before you stop sleeping.".italic());
    println!("Enter keeps the current answer; '<' goes back; 'quit' cancels.");
    println!();

    let stdin = std::io::stdin();
    let mut prompter = StdinPrompter {
        input: stdin.lock(),
    };

    match wizard::run(&sheet, &mut prompter) {
        Some(updated) => {
            save_sheet(file, &updated)?;
            println!();
            println!("Sheet saved to {}", file.display());
            Ok(())
        }
        None => {
            println!();
            println!("Cancelled; sheet unchanged.");
            Ok(())
        }
    }
}

/// A prompter that reads answers line by line from stdin.
struct StdinPrompter<R: BufRead> {
    input: R,
}

impl<R: BufRead> Prompter for StdinPrompter<R> {
    fn ask(&mut self, step: &Step, default: &str) -> StepOutcome {
        println!("{}", step.title.bold());
        println!("  {}", step.hint.dimmed());
        if !default.is_empty() {
            println!("  {}", format!("[{default}]").dimmed());
        }
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => return StepOutcome::Cancel,
            Ok(_) => {}
        }

        let answer = line.trim();
        match answer {
            "<" => StepOutcome::Back,
            "quit" | "cancel" => StepOutcome::Cancel,
            "" => StepOutcome::Next(default.to_string()),
            _ => StepOutcome::Next(answer.to_string()),
        }
    }

    fn invalid(&mut self, message: &str) {
        println!("  {}", message.red());
    }
}
