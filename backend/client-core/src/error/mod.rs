pub mod config;
pub mod gateway;
pub mod store;
pub mod token_store;

pub use config::ConfigError;
pub use gateway::GatewayError;
pub use store::StoreError;
pub use token_store::TokenStoreError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
