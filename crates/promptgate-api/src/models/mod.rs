//! Request and response models.

pub mod request;
pub mod response;

pub use request::ChatRequest;
pub use response::{
    HealthResponse, ReadyResponse, RefusalResponse, ScannerListResponse, VersionResponse,
};
