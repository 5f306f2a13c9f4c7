//! Error types

use thiserror::Error;

/// Errors raised by [`ComponentRegistry::assign`](crate::ComponentRegistry::assign).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A required argument was absent.
    #[error("invalid argument: {argument} must not be null")]
    ArgumentInvalid {
        /// Name of the offending argument, `"entity"` or `"component"`.
        argument: &'static str,
    },

    /// The entity already holds a component of this type.
    #[error("component of type {type_name} is already assigned to {entity}")]
    ComponentAlreadyAssigned {
        type_name: &'static str,
        entity: String,
    },
}

/// Errors raised while resolving services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("no service registered for type {type_name}")]
    NotRegistered { type_name: &'static str },
}

/// Errors raised while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
