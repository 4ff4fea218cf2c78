pub mod client;
pub mod error;
pub mod types;

pub use client::BlotatoClient;
pub use error::BlotatoError;
pub use types::target_type;
