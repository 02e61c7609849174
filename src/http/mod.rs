//! HTTP building blocks: MIME type detection and response builders.

pub mod mime;
pub mod response;

pub use response::{
    build_405_response, build_500_response, build_fallback_response, build_file_response,
};
