//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod attachment_picker;
pub mod clipboard;
pub mod generation_gateway;
pub mod image_downloader;
pub mod progress;
pub mod turn_event_logger;
