//! # Error Hierarchy
//!
//! Structured error types for canteiro, built with `thiserror`.
//!
//! The mask and validator engines are total: they never return these
//! errors. `Result` appears only where a value crosses a typed boundary,
//! i.e. constructing a validated document newtype, parsing a kind or reason
//! key, or loading a form definition from disk.

use thiserror::Error;

/// Top-level error type for canteiro.
#[derive(Error, Debug)]
pub enum CanteiroError {
    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Form definition is structurally inconsistent.
    #[error("form configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Validation errors for document newtypes and key parsing.
///
/// Each variant carries the rejected input so callers can echo it back
/// without keeping their own copy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// CPF fails length, repeated-digit, or check-digit validation.
    #[error("invalid CPF: \"{0}\" (expected 11 digits with valid check digits)")]
    InvalidCpf(String),

    /// CNPJ fails length, repeated-digit, or check-digit validation.
    #[error("invalid CNPJ: \"{0}\" (expected 14 digits with valid check digits)")]
    InvalidCnpj(String),

    /// Value is neither a valid CPF nor a valid CNPJ.
    #[error("invalid CPF/CNPJ: \"{0}\"")]
    InvalidDocumento(String),

    /// Phone number is not 10 digits, or 11 digits with a mobile `9` prefix.
    #[error("invalid phone number: \"{0}\" (expected (DD) XXXX-XXXX or (DD) 9XXXX-XXXX)")]
    InvalidTelefone(String),

    /// Postal code is not 8 digits.
    #[error("invalid CEP: \"{0}\" (expected 8 digits, optionally as XXXXX-XXX)")]
    InvalidCep(String),

    /// Unrecognized mask kind key.
    #[error("unknown mask kind: {0:?}")]
    UnknownMaskKind(String),

    /// Unrecognized failure reason key.
    #[error("unknown failure reason: {0:?}")]
    UnknownReason(String),
}
