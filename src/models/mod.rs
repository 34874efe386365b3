//! Data transfer objects (DTOs) for API responses.
//!
//! These structs are serialized to JSON for the presentation layer.
//! - `repository`: RepositoryRef, the per-request repository metadata
//! - `commit`: Commit, a raw upstream commit tagged with its repository
//! - `account`: AccountInfo, ConfigResponse, StatsResponse
//! - `changelog`: ChangelogResponse, LatestResponse, NotifyResponse

pub mod account;
pub mod changelog;
pub mod commit;
pub mod repository;

pub use account::*;
pub use changelog::*;
pub use commit::*;
pub use repository::*;
