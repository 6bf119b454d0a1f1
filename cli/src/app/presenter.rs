//! User-facing alerts and confirmations.

use std::io::{self, BufRead, Write};

/// Title used for every hard-failure alert.
pub const ALERT_TITLE: &str = "NiceUtil Error";

/// Blocking interactions with the user.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter: Send + Sync {
    /// Shows a hard failure. Returns once the user has seen it.
    fn alert(&self, message: &str);

    /// Asks a yes/no question; `false` on anything but an explicit yes.
    fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Presenter for an interactive terminal.
pub struct TerminalPresenter {
    /// Answer yes to every confirmation without asking.
    pub assume_yes: bool,
}

impl Presenter for TerminalPresenter {
    fn alert(&self, message: &str) {
        eprintln!("{ALERT_TITLE}: {message}");
    }

    fn confirm(&self, title: &str, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        println!("{title}");
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return false;
        }
        let answer = input.trim();
        answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    }
}
