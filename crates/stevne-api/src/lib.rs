// stevne-api: Async Rust client for the athletics-meet roster JSON API

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod deltager;
mod disciplin;
mod resultater;

pub use client::ApiClient;
pub use error::Error;
pub use reqwest::Method;
pub use transport::{TlsMode, TransportConfig};
pub use types::{
    DisciplineCreateRequest, DisciplineResponse, ParticipantCreateRequest, ParticipantResponse,
    ParticipantUpdateRequest, ResultResponse,
};
