//! Client side of the upstream `GetUserCharacterDetails` endpoint.

pub mod client;
pub mod types;

pub use client::{check_envelope, FetchError, HttpStatsFetcher, StatsFetcher};
pub use types::{CharacterDetailsRequest, Credential};
