//! Client for the remote user directory that seeds the console's record
//! store.
//!
//! The directory is a public, read-only endpoint returning a JSON array of
//! user objects. Each object is reduced to a [`DirectoryUser`]: `name`,
//! `email`, and the nested `company.name` (empty when absent).

mod client;
mod error;
mod model;

pub use client::ClientOptions;
pub use client::DEFAULT_DIRECTORY_URL;
pub use client::DirectoryClient;
pub use client::DirectorySource;
pub use error::DirectoryError;
pub use error::Result;
pub use model::DirectoryUser;
pub use model::UpstreamCompany;
pub use model::UpstreamUser;
pub use model::parse_directory_body;
pub use reqwest::StatusCode;
