//! Error handling types

use std::fmt;

use thiserror::Error;

/// Boxed error produced by suppliers and external sources
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for vmf
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration defect: unknown holder type, duplicate binding,
    /// or an invalid configuration source
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// A supplier failed while producing a state holder
    #[error("Failed to create state holder '{descriptor}': {source}")]
    FactoryInvocation {
        /// Tag of the requested descriptor
        descriptor: String,
        /// The failure raised by the supplier
        #[source]
        source: BoxError,
    },

    /// Typed access produced an instance of a different concrete type
    #[error("State holder type mismatch: requested '{requested}', produced '{produced}'")]
    HolderTypeMismatch {
        /// Tag of the requested descriptor
        requested: String,
        /// Tag reported by the produced instance
        produced: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create the error raised when no registry entry matches a descriptor
    pub fn unknown_holder(descriptor: impl fmt::Display) -> Self {
        Self::configuration(format!("unknown state holder type '{descriptor}'"))
    }

    /// Create the error raised when a descriptor is bound twice
    pub fn duplicate_binding(descriptor: impl fmt::Display) -> Self {
        Self::configuration(format!("state holder type '{descriptor}' is bound more than once"))
    }
}

// Holder creation error methods
impl Error {
    /// Wrap a supplier failure, keeping it as the source
    pub fn factory_invocation(descriptor: impl fmt::Display, source: BoxError) -> Self {
        Self::FactoryInvocation {
            descriptor: descriptor.to_string(),
            source,
        }
    }

    /// Create a type mismatch error for typed holder access
    pub fn holder_type_mismatch(requested: impl fmt::Display, produced: impl fmt::Display) -> Self {
        Self::HolderTypeMismatch {
            requested: requested.to_string(),
            produced: produced.to_string(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether this error signals an incomplete or invalid configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this error wraps a supplier failure
    pub fn is_factory_invocation(&self) -> bool {
        matches!(self, Self::FactoryInvocation { .. })
    }
}
