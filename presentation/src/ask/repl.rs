//! REPL (Read-Eval-Print Loop) for interactive questioning

use crate::output::console::AnswerFormatter;
use askdesk_application::SubmitQuestionUseCase;
use askdesk_application::ports::fault::FaultLog;
use askdesk_application::ports::ui::UiNotifier;
use askdesk_domain::{AnswerResponse, QuestionRequest};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Interactive ask REPL
pub struct AskRepl {
    use_case: SubmitQuestionUseCase,
    ui: Arc<dyn UiNotifier>,
    faults: Arc<dyn FaultLog>,
    service_url: String,
    show_progress: bool,
    history_file: Option<PathBuf>,
    last_answer: Option<AnswerResponse>,
}

impl AskRepl {
    /// Create a new AskRepl
    pub fn new(
        use_case: SubmitQuestionUseCase,
        ui: Arc<dyn UiNotifier>,
        faults: Arc<dyn FaultLog>,
    ) -> Self {
        Self {
            use_case,
            ui,
            faults,
            service_url: String::new(),
            show_progress: true,
            history_file: None,
            last_answer: None,
        }
    }

    /// Set whether to show the progress spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set an explicit history file path
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Set the service URL shown in the welcome banner
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("askdesk").join("history.txt")))
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Empty input never submits
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.submit(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              askdesk - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        if !self.service_url.is_empty() {
            println!("Service: {}", self.service_url);
            println!();
        }
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /last     - Show the last answer again");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /last            - Show the last answer again");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/last" => {
                println!();
                match &self.last_answer {
                    Some(answer) => println!("{}", AnswerFormatter::format(answer)),
                    None => println!("No answer yet."),
                }
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Submit one question and render the outcome.
    async fn submit(&mut self, question: &str) {
        let Some(request) = QuestionRequest::try_new(question) else {
            return;
        };

        println!();

        if self.show_progress {
            self.ui.set_loading(true);
        }

        let result = self.use_case.execute(request).await;

        if self.show_progress {
            self.ui.set_loading(false);
        }

        match result {
            Ok(Some(answer)) => {
                println!("{}", AnswerFormatter::format_answer_only(&answer));
                self.last_answer = Some(answer);
            }
            Ok(None) => {
                println!("{}", AnswerFormatter::format_empty());
            }
            Err(e) => {
                // Service errors were already surfaced through the UI and
                // transport failures stay out of the UI by contract, so the
                // escaped error is only recorded.
                self.faults.unhandled("question submission", &e);
            }
        }
        println!();
    }
}
