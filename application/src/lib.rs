//! Application layer for image-studio
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    attachment_picker::{AttachmentPicker, PickError},
    clipboard::{ClipboardError, ClipboardPort},
    generation_gateway::{GatewayError, GenerationGateway},
    image_downloader::{DownloadError, ImageDownloader},
    progress::{NoProgress, SubmissionProgress},
    turn_event_logger::{NoTurnEventLogger, TurnEvent, TurnEventLogger},
};
pub use use_cases::dispatch::RequestDispatcher;
pub use use_cases::session_controller::{SessionController, SubmitReport};
pub use use_cases::turn_actions::{ActionOutcome, TurnAction, TurnActionError, TurnActionHandler};
