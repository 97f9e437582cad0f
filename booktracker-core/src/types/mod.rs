//! Core types: the rendering contract and the upstream shapes it is built from

mod account;
mod local;
mod summary;
mod volume;

pub use account::{LoginRequest, RegisterRequest};
pub use local::{AuthorsField, LocalBook, LocalPage, RecordId};
pub use summary::BookSummary;
pub use volume::{ImageLinks, Volume, VolumeInfo, VolumeSearch};
