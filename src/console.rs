use crate::ports::UserInterface;
use std::io::{self, BufRead, Write};

/// Terminal front end for the workflow: confirmation reads a line from
/// stdin, notifications go to stdout/stderr.
#[derive(Debug, Clone)]
pub struct ConsoleInterface;

impl UserInterface for ConsoleInterface {
    fn confirm_booking(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn notify_success(&self, message: &str) {
        println!("{message}");
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{message}");
    }

    fn open_appointments(&self) {
        println!("Opening your appointments overview...");
    }
}
