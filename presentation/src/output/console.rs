//! Console output formatter for the session history

use colored::Colorize;
use studio_application::SubmitReport;
use studio_domain::{
    BaseImageCatalog, ConfigIssue, GenerationOutcome, ImageModel, RejectReason, Session,
    Settlement, Turn, TurnId, TurnState,
};

/// Formats session state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One history entry: what was sent, then what came back
    pub fn format_turn(id: TurnId, turn: &Turn) -> String {
        let input = match (turn.prompt_text(), turn.attachment()) {
            (Some(prompt), Some(attachment)) => format!(
                "{} {}",
                prompt,
                format!("[{}]", attachment_name(attachment.uri(), attachment.file_name())).dimmed()
            ),
            (Some(prompt), None) => prompt.to_string(),
            (None, Some(attachment)) => {
                format!("[{}]", attachment_name(attachment.uri(), attachment.file_name()))
            }
            (None, None) => "(no input)".dimmed().to_string(),
        };

        let result = match turn.state() {
            TurnState::Pending => format!("{} generating...", "…".yellow()),
            TurnState::Resolved => format!(
                "{} {} {}",
                "✓".green(),
                turn.result_url().unwrap_or_default(),
                format!("({})", turn.model_label().unwrap_or_default()).dimmed()
            ),
            TurnState::Unresolved => format!("{} no result", "✗".red()),
        };

        format!("{} {}\n    {}", id.to_string().cyan().bold(), input, result)
    }

    /// The whole history, oldest first
    pub fn format_history(session: &Session) -> String {
        if !session.has_history() {
            return "No turns yet.".dimmed().to_string();
        }
        session
            .turns()
            .iter()
            .map(|(id, turn)| Self::format_turn(id, turn))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The model catalog, marking the selected one
    pub fn format_models(selected: ImageModel) -> String {
        let mut output = format!("{}\n", "Models:".cyan().bold());
        for model in ImageModel::ALL {
            let marker = if model == selected { "*".green().bold() } else { " ".normal() };
            let needs = if model.requires_attachment() {
                " (needs an image)".dimmed().to_string()
            } else {
                String::new()
            };
            output.push_str(&format!(
                " {} {:<18} {}{}\n",
                marker,
                model.as_str(),
                model.display_name(),
                needs
            ));
        }
        output
    }

    /// Base image presets, marking the selected one
    pub fn format_presets(catalog: &BaseImageCatalog, selected: usize) -> String {
        let mut output = format!("{}\n", "Base images:".cyan().bold());
        for (index, preset) in catalog.iter().enumerate() {
            let marker = if index == selected { "*".green().bold() } else { " ".normal() };
            output.push_str(&format!(
                " {} {:>2}  {:<16} {}\n",
                marker,
                index,
                preset.label,
                preset.url.dimmed()
            ));
        }
        output
    }

    /// Current selections, shown above the input line
    pub fn format_status(session: &Session, catalog: &BaseImageCatalog) -> String {
        let model = session.selected_model();
        let mut parts = vec![format!("{} {}", "model:".dimmed(), model.display_name().bold())];

        if model == ImageModel::IllusionDiffusion
            && let Some(preset) = catalog.get(session.base_image())
        {
            parts.push(format!("{} {}", "base:".dimmed(), preset.label));
        }

        if let Some(attachment) = session.pending_attachment() {
            parts.push(format!(
                "{} {}",
                "image:".dimmed(),
                attachment_name(attachment.uri(), attachment.file_name())
            ));
        }

        if session.is_busy() {
            parts.push("busy".yellow().to_string());
        }

        parts.join("  ")
    }

    /// What a finished submission produced
    pub fn format_report(report: &SubmitReport) -> String {
        if report.settlement == Settlement::Stale {
            return format!(
                "{} {} finished after the history was cleared",
                "!".yellow(),
                report.turn
            );
        }
        match &report.outcome {
            GenerationOutcome::Success {
                result_url,
                model_label,
            } => format!(
                "{} {} {} {}",
                "✓".green().bold(),
                report.turn.to_string().cyan(),
                result_url,
                format!("({})", model_label).dimmed()
            ),
            GenerationOutcome::Failure { reason } => format!(
                "{} {} {}",
                "✗".red().bold(),
                report.turn.to_string().cyan(),
                reason
            ),
        }
    }

    pub fn format_rejection(reason: &RejectReason) -> String {
        format!("{} {}", "Not sent:".yellow().bold(), reason)
    }

    pub fn format_config_issue(issue: &ConfigIssue) -> String {
        if issue.is_error() {
            format!("{} {}", "config error:".red().bold(), issue.message)
        } else {
            format!("{} {}", "config warning:".yellow().bold(), issue.message)
        }
    }
}

fn attachment_name(uri: &str, file_name: Option<String>) -> String {
    file_name.unwrap_or_else(|| uri.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_domain::{Attachment, Reconciliation};

    fn text_turn(prompt: &str) -> Turn {
        Turn::new(Some(prompt.to_string()), None)
    }

    #[test]
    fn test_pending_turn() {
        let output = ConsoleFormatter::format_turn(TurnId::new(0), &text_turn("a red fox"));
        assert!(output.contains("#0"));
        assert!(output.contains("a red fox"));
        assert!(output.contains("generating"));
    }

    #[test]
    fn test_attachment_turn_shows_file_name() {
        let attachment = Attachment::new("file:///photos/cat.png", "image/png").unwrap();
        let turn = Turn::new(None, Some(attachment));
        let output = ConsoleFormatter::format_turn(TurnId::new(3), &turn);
        assert!(output.contains("cat.png"));
        assert!(!output.contains("/photos/"));
    }

    #[test]
    fn test_empty_history() {
        let session = Session::new(ImageModel::FastImage);
        assert!(ConsoleFormatter::format_history(&session).contains("No turns yet"));
    }

    #[test]
    fn test_models_lists_all() {
        let output = ConsoleFormatter::format_models(ImageModel::Upscale);
        for model in ImageModel::ALL {
            assert!(output.contains(model.as_str()));
        }
        assert!(output.contains("needs an image"));
    }

    #[test]
    fn test_presets_lists_catalog() {
        let catalog = BaseImageCatalog::default();
        let output = ConsoleFormatter::format_presets(&catalog, 1);
        for preset in catalog.iter() {
            assert!(output.contains(&preset.label));
        }
    }

    #[test]
    fn test_status_shows_base_for_illusion_only() {
        let catalog = BaseImageCatalog::default();
        let label = &catalog.get(0).unwrap().label;

        let session = Session::new(ImageModel::IllusionDiffusion);
        assert!(ConsoleFormatter::format_status(&session, &catalog).contains(label.as_str()));

        let session = Session::new(ImageModel::FastImage);
        assert!(!ConsoleFormatter::format_status(&session, &catalog).contains("base:"));
    }

    #[test]
    fn test_report_success_and_failure() {
        let success = SubmitReport {
            turn: TurnId::new(1),
            outcome: GenerationOutcome::success("https://x/y.png", "Upscale"),
            settlement: Settlement::Applied(Reconciliation::Resolved),
        };
        let output = ConsoleFormatter::format_report(&success);
        assert!(output.contains("https://x/y.png"));
        assert!(output.contains("Upscale"));

        let failure = SubmitReport {
            turn: TurnId::new(2),
            outcome: GenerationOutcome::failure("connection refused"),
            settlement: Settlement::Applied(Reconciliation::Unresolved),
        };
        assert!(ConsoleFormatter::format_report(&failure).contains("connection refused"));
    }

    #[test]
    fn test_report_stale() {
        let stale = SubmitReport {
            turn: TurnId::new(0),
            outcome: GenerationOutcome::success("https://x/y.png", "Upscale"),
            settlement: Settlement::Stale,
        };
        let output = ConsoleFormatter::format_report(&stale);
        assert!(output.contains("cleared"));
        assert!(!output.contains("https://x/y.png"));
    }
}
