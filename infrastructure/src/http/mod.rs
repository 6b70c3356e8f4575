//! HTTP adapters: the generation endpoint and result downloads.

pub mod downloader;
pub mod error;
pub mod gateway;

pub use downloader::HttpImageDownloader;
pub use error::HttpError;
pub use gateway::HttpGenerationGateway;
