//! Console implementation of the UI notification port

use askdesk_application::ports::ui::UiNotifier;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Renders UI signals on the terminal.
///
/// `set_loading(true)` shows a steady-tick spinner; triggering it again
/// replaces the previous spinner. `set_error` prints a one-shot red
/// notification line, routed through the live spinner so the two never
/// interleave on screen.
pub struct ConsoleUi {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleUi {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl UiNotifier for ConsoleUi {
    fn set_loading(&self, loading: bool) {
        let mut slot = self.spinner.lock().unwrap();

        // Replace any previous spinner
        if let Some(pb) = slot.take() {
            pb.finish_and_clear();
        }

        if loading {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_message("Waiting for answer...");
            pb.enable_steady_tick(Duration::from_millis(100));
            *slot = Some(pb);
        }
    }

    fn set_error(&self, message: &str) {
        let line = format!("{} {}", "error:".red().bold(), message);
        let slot = self.spinner.lock().unwrap();
        match slot.as_ref() {
            Some(pb) => pb.println(line),
            None => eprintln!("{}", line),
        }
    }
}
