//! Actions offered on a turn (the action sheet).
//!
//! Long-pressing a turn offers: save the image, clear the history, or
//! cancel. Copying the prompt is available for text turns.

use crate::ports::clipboard::{ClipboardError, ClipboardPort};
use crate::ports::image_downloader::{DownloadError, ImageDownloader};
use crate::use_cases::session_controller::SessionController;
use std::path::PathBuf;
use std::sync::Arc;
use studio_domain::TurnId;
use thiserror::Error;
use tracing::info;

/// A choice from the turn action sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    SaveImage(TurnId),
    CopyPrompt(TurnId),
    ClearHistory,
    Cancel,
}

/// What an action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Saved(PathBuf),
    Copied,
    Cleared,
    Nothing,
}

#[derive(Error, Debug)]
pub enum TurnActionError {
    #[error("Turn {0} does not exist")]
    TurnNotFound(TurnId),

    #[error("Turn {0} has no image to save")]
    NoResult(TurnId),

    #[error("Turn {0} has no prompt to copy")]
    NoPrompt(TurnId),

    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

pub struct TurnActionHandler {
    controller: Arc<SessionController>,
    downloader: Arc<dyn ImageDownloader>,
    clipboard: Arc<dyn ClipboardPort>,
    save_dir: PathBuf,
}

impl TurnActionHandler {
    pub fn new(
        controller: Arc<SessionController>,
        downloader: Arc<dyn ImageDownloader>,
        clipboard: Arc<dyn ClipboardPort>,
        save_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            controller,
            downloader,
            clipboard,
            save_dir: save_dir.into(),
        }
    }

    pub fn save_dir(&self) -> &PathBuf {
        &self.save_dir
    }

    pub async fn handle(&self, action: TurnAction) -> Result<ActionOutcome, TurnActionError> {
        match action {
            TurnAction::SaveImage(turn) => {
                let url = {
                    let session = self.controller.snapshot();
                    let entry = session
                        .turns()
                        .get(turn)
                        .ok_or(TurnActionError::TurnNotFound(turn))?;
                    entry
                        .result_url()
                        .map(str::to_string)
                        .ok_or(TurnActionError::NoResult(turn))?
                };
                info!("Saving image for turn {} ...", turn);
                let path = self.downloader.download(&url, &self.save_dir).await?;
                Ok(ActionOutcome::Saved(path))
            }
            TurnAction::CopyPrompt(turn) => {
                let session = self.controller.snapshot();
                let prompt = session
                    .turns()
                    .get(turn)
                    .ok_or(TurnActionError::TurnNotFound(turn))?
                    .prompt_text()
                    .ok_or(TurnActionError::NoPrompt(turn))?;
                self.clipboard.write_text(prompt)?;
                Ok(ActionOutcome::Copied)
            }
            TurnAction::ClearHistory => {
                self.controller.reset();
                Ok(ActionOutcome::Cleared)
            }
            TurnAction::Cancel => Ok(ActionOutcome::Nothing),
        }
    }
}
