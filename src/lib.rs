pub mod config;
pub mod ecs;
pub mod error;
pub mod services;
pub mod telemetry;

pub use config::{LoggingConfig, RegistryConfig};
pub use ecs::{ComponentRegistry, Entity, EntityState};
pub use error::{ConfigError, RegistryError, ServiceError};
pub use services::{ServiceCollection, ServiceProvider};
