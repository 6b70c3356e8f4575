//! Interactive session REPL
//!
//! Plain lines are prompts. An empty line submits when an image is staged,
//! which is how the attachment-only models are run.

use super::command::ReplCommand;
use crate::ConsoleFormatter;
use crate::ProgressReporter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use studio_application::{
    ActionOutcome, AttachmentPicker, NoProgress, SessionController, SubmissionProgress, TurnAction,
    TurnActionHandler,
};
use studio_domain::ImageModel;

/// Result of one REPL step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplStep {
    Print(String),
    Exit,
}

pub struct StudioRepl {
    controller: Arc<SessionController>,
    actions: TurnActionHandler,
    picker: Arc<dyn AttachmentPicker>,
    show_progress: bool,
}

impl StudioRepl {
    pub fn new(
        controller: Arc<SessionController>,
        actions: TurnActionHandler,
        picker: Arc<dyn AttachmentPicker>,
    ) -> Self {
        Self {
            controller,
            actions,
            picker,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("image-studio").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            println!("{}", self.status_line());
            let model = self.controller.snapshot().selected_model();
            let readline = rl.readline(&format!("{} > ", model.action_label()));

            match readline {
                Ok(line) => {
                    let line = line.trim();
                    let step = if line.starts_with('/') {
                        self.execute(ReplCommand::parse(line)).await
                    } else {
                        if !line.is_empty() {
                            let _ = rl.add_history_entry(line);
                        }
                        self.submit_line(line).await
                    };

                    match step {
                        ReplStep::Print(text) if text.is_empty() => {}
                        ReplStep::Print(text) => println!("{}\n", text),
                        ReplStep::Exit => {
                            println!("Bye!");
                            break;
                        }
                    }
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

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn status_line(&self) -> String {
        ConsoleFormatter::format_status(
            &self.controller.snapshot(),
            self.controller.dispatcher().catalog(),
        )
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         image-studio - Interactive          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", Self::help_text());
    }

    fn help_text() -> String {
        [
            "Type a prompt and press Enter to create an image.",
            "With an image staged, an empty line submits it.",
            "",
            "Commands:",
            "  /model <id>      - Switch model (/models to list)",
            "  /attach <path>   - Stage an image",
            "  /detach          - Drop the staged image",
            "  /base <index>    - Pick a base image (/presets to list)",
            "  /history         - Show all turns",
            "  /save <turn>     - Download a turn's image",
            "  /copy <turn>     - Copy a turn's prompt",
            "  /clear           - Clear the history",
            "  /help, /h, /?    - Show this help",
            "  /quit, /exit, /q - Exit",
        ]
        .join("\n")
    }

    /// Submit a typed line as the draft.
    ///
    /// An empty line goes through too: with nothing staged the controller
    /// rejects it and records the rejection.
    pub async fn submit_line(&self, line: &str) -> ReplStep {
        self.controller.set_draft(line);
        let reporter = ProgressReporter::new();
        let progress: &dyn SubmissionProgress = if self.show_progress {
            &reporter
        } else {
            &NoProgress
        };

        match self.controller.submit(progress).await {
            Ok(report) => ReplStep::Print(ConsoleFormatter::format_report(&report)),
            Err(reason) => ReplStep::Print(ConsoleFormatter::format_rejection(&reason)),
        }
    }

    /// Execute one slash command.
    pub async fn execute(&self, command: ReplCommand) -> ReplStep {
        let text = match command {
            ReplCommand::Quit => return ReplStep::Exit,
            ReplCommand::Help => Self::help_text(),
            ReplCommand::Models => {
                ConsoleFormatter::format_models(self.controller.snapshot().selected_model())
            }
            ReplCommand::Model(id) => match id.parse::<ImageModel>() {
                Ok(model) => {
                    self.controller.select_model(model);
                    format!("Model: {}", model.display_name().bold())
                }
                Err(e) => format!("{} (see /models)", e),
            },
            ReplCommand::Attach(location) => match self.picker.pick(&location) {
                Ok(attachment) => {
                    let name = attachment.file_name().unwrap_or_else(|| location.clone());
                    self.controller.stage_attachment(attachment);
                    format!("Staged {}", name.bold())
                }
                Err(e) => format!("{} {}", "Cannot attach:".red(), e),
            },
            ReplCommand::Detach => match self.controller.clear_attachment() {
                Some(_) => "Image removed".to_string(),
                None => "No image staged".to_string(),
            },
            ReplCommand::Presets => ConsoleFormatter::format_presets(
                self.controller.dispatcher().catalog(),
                self.controller.snapshot().base_image(),
            ),
            ReplCommand::Base(index) => match self.controller.select_base_image(index) {
                Ok(()) => format!("Base image: {}", index),
                Err(e) => format!("{} (see /presets)", e),
            },
            ReplCommand::History => ConsoleFormatter::format_history(&self.controller.snapshot()),
            ReplCommand::Save(turn) => self.action(TurnAction::SaveImage(turn)).await,
            ReplCommand::Copy(turn) => self.action(TurnAction::CopyPrompt(turn)).await,
            ReplCommand::Clear => self.action(TurnAction::ClearHistory).await,
            ReplCommand::Usage(usage) => format!("Usage: {}", usage),
            ReplCommand::Unknown(cmd) => {
                format!("Unknown command: {}\nType /help for available commands", cmd)
            }
        };
        ReplStep::Print(text)
    }

    async fn action(&self, action: TurnAction) -> String {
        match self.actions.handle(action).await {
            Ok(ActionOutcome::Saved(path)) => format!("Saved to {}", path.display()),
            Ok(ActionOutcome::Copied) => "Prompt copied".to_string(),
            Ok(ActionOutcome::Cleared) => "History cleared".to_string(),
            Ok(ActionOutcome::Nothing) => String::new(),
            Err(e) => format!("{} {}", "Error:".red(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use studio_application::{
        ClipboardError, ClipboardPort, DownloadError, GatewayError, GenerationGateway,
        ImageDownloader, PickError, RequestDispatcher, SessionParams, TurnEvent, TurnEventLogger,
    };
    use studio_domain::{Attachment, GenerationRequest};

    // ==================== Test Mocks ====================

    struct EchoGateway {
        requests: Mutex<Vec<GenerationRequest>>,
    }

    #[async_trait]
    impl GenerationGateway for EchoGateway {
        async fn generate(&self, request: &GenerationRequest) -> Result<Value, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(json!({ "image": "https://cdn.example.com/out.png" }))
        }
    }

    struct StubDownloader;

    #[async_trait]
    impl ImageDownloader for StubDownloader {
        async fn download(&self, _url: &str, directory: &Path) -> Result<PathBuf, DownloadError> {
            Ok(directory.join("out.png"))
        }
    }

    struct StubClipboard;

    impl ClipboardPort for StubClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    struct StubPicker;

    impl AttachmentPicker for StubPicker {
        fn pick(&self, location: &str) -> Result<Attachment, PickError> {
            if location.ends_with(".png") {
                Attachment::new(format!("file://{}", location), "image/png")
                    .map_err(|e| PickError(e.to_string()))
            } else {
                Err(PickError(format!("{} is not an image", location)))
            }
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl TurnEventLogger for RecordingLogger {
        fn log(&self, event: TurnEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn repl() -> (StudioRepl, Arc<SessionController>, Arc<EchoGateway>) {
        let (repl, controller, gateway, _) = repl_with_logger();
        (repl, controller, gateway)
    }

    fn repl_with_logger() -> (
        StudioRepl,
        Arc<SessionController>,
        Arc<EchoGateway>,
        Arc<RecordingLogger>,
    ) {
        let gateway = Arc::new(EchoGateway {
            requests: Mutex::new(Vec::new()),
        });
        let logger = Arc::new(RecordingLogger::default());
        let controller = Arc::new(
            SessionController::new(
                RequestDispatcher::new(gateway.clone()),
                &SessionParams::default(),
            )
            .with_event_logger(logger.clone()),
        );
        let actions = TurnActionHandler::new(
            controller.clone(),
            Arc::new(StubDownloader),
            Arc::new(StubClipboard),
            "/tmp/studio",
        );
        let repl =
            StudioRepl::new(controller.clone(), actions, Arc::new(StubPicker)).with_progress(false);
        (repl, controller, gateway, logger)
    }

    fn printed(step: ReplStep) -> String {
        match step {
            ReplStep::Print(text) => text,
            ReplStep::Exit => panic!("unexpected exit"),
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_prompt_line_submits() {
        let (repl, controller, gateway) = repl();

        let output = printed(repl.submit_line("a lighthouse").await);

        assert!(output.contains("https://cdn.example.com/out.png"));
        assert_eq!(gateway.requests.lock().unwrap().len(), 1);
        assert_eq!(controller.snapshot().turns().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_line_without_image_is_rejected_and_logged() {
        let (repl, controller, gateway, logger) = repl_with_logger();

        let output = printed(repl.submit_line("").await);

        assert!(output.contains("Not sent"));
        assert!(output.contains("needs a prompt"));
        assert!(gateway.requests.lock().unwrap().is_empty());
        assert!(!controller.snapshot().has_history());
        assert_eq!(*logger.events.lock().unwrap(), vec!["submission_rejected"]);
    }

    #[tokio::test]
    async fn test_attach_then_empty_line_uploads() {
        let (repl, _controller, gateway) = repl();

        printed(repl.execute(ReplCommand::Model("removeBg".to_string())).await);
        let staged = printed(repl.execute(ReplCommand::Attach("/tmp/cat.png".to_string())).await);
        assert!(staged.contains("cat.png"));

        printed(repl.submit_line("").await);

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].is_multipart());
    }

    #[tokio::test]
    async fn test_missing_attachment_is_reported_not_sent() {
        let (repl, controller, gateway) = repl();
        printed(repl.execute(ReplCommand::Model("upscale".to_string())).await);

        let output = printed(repl.submit_line("make it bigger").await);

        assert!(output.contains("Not sent"));
        assert!(gateway.requests.lock().unwrap().is_empty());
        assert!(!controller.snapshot().has_history());
    }

    #[tokio::test]
    async fn test_bad_attachment_and_model() {
        let (repl, controller, _gateway) = repl();

        let output = printed(repl.execute(ReplCommand::Attach("notes.txt".to_string())).await);
        assert!(output.contains("not an image"));
        assert!(controller.snapshot().pending_attachment().is_none());

        let output = printed(repl.execute(ReplCommand::Model("dalle".to_string())).await);
        assert!(output.contains("dalle"));
        assert_eq!(controller.snapshot().selected_model(), ImageModel::FastImage);
    }

    #[tokio::test]
    async fn test_base_out_of_range_rejected() {
        let (repl, controller, _gateway) = repl();

        printed(repl.execute(ReplCommand::Base(2)).await);
        assert_eq!(controller.snapshot().base_image(), 2);

        printed(repl.execute(ReplCommand::Base(99)).await);
        assert_eq!(controller.snapshot().base_image(), 2);
    }

    #[tokio::test]
    async fn test_save_and_clear() {
        let (repl, controller, _gateway) = repl();
        printed(repl.submit_line("a fox").await);

        let output = printed(repl.execute(ReplCommand::Save(studio_domain::TurnId::new(0))).await);
        assert!(output.contains("/tmp/studio/out.png"));

        let output = printed(repl.execute(ReplCommand::Clear).await);
        assert!(output.contains("cleared"));
        assert!(!controller.snapshot().has_history());
    }

    #[tokio::test]
    async fn test_quit() {
        let (repl, _controller, _gateway) = repl();
        assert_eq!(repl.execute(ReplCommand::Quit).await, ReplStep::Exit);
    }
}
