//! # Document Newtypes
//!
//! Validated wrappers for the Brazilian identifiers a construction-site
//! registry stores: taxpayer numbers for people ([`Cpf`]) and companies
//! ([`Cnpj`]), either one ([`Documento`]), postal codes ([`Cep`]) and
//! phone numbers ([`Telefone`]).
//!
//! ## Validation
//!
//! Constructors accept raw digits or the masked display form. Any
//! character other than a digit or mask punctuation (`. - / ( )` and
//! space) is rejected rather than silently dropped, since at this boundary
//! the value is being stored, not typed. The canonical form kept inside is
//! digits only; [`std::fmt::Display`] renders the mask.
//!
//! Deserialization routes through the same constructors, so a record read
//! from the backend cannot smuggle in an invalid document.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::kind::MaskKind;
use crate::mask;
use crate::validate;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Display via the mask for `$kind`.
macro_rules! impl_masked_display {
    ($ty:ident, $kind:expr) => {
        impl $ty {
            /// Access the canonical digits.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the masked display form.
            pub fn formatted(&self) -> String {
                mask::apply($kind, &self.0)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.formatted())
            }
        }
    };
}

/// Strip mask punctuation, or `None` if `raw` holds anything else.
fn canonical_digits(raw: &str) -> Option<String> {
    let clean = raw
        .trim()
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '/' | '(' | ')' | ' '));
    clean.then(|| mask::unmask(raw))
}

/// Brazilian individual taxpayer number (CPF).
///
/// # Validation
///
/// - Exactly 11 digits after stripping mask punctuation
/// - Not a single repeated digit
/// - Both mod-11 check digits correct
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);
impl_masked_display!(Cpf, MaskKind::Cpf);

impl Cpf {
    /// Create a CPF from raw or masked input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] if the value is not a valid CPF.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match canonical_digits(&raw) {
            Some(digits) if validate::is_valid_cpf(&digits) => Ok(Self(digits)),
            _ => Err(ValidationError::InvalidCpf(raw)),
        }
    }
}

/// Brazilian company taxpayer number (CNPJ).
///
/// # Validation
///
/// - Exactly 14 digits after stripping mask punctuation
/// - Not a single repeated digit
/// - Both mod-11 check digits correct
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);
impl_masked_display!(Cnpj, MaskKind::Cnpj);

impl Cnpj {
    /// Create a CNPJ from raw or masked input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] if the value is not a valid CNPJ.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match canonical_digits(&raw) {
            Some(digits) if validate::is_valid_cnpj(&digits) => Ok(Self(digits)),
            _ => Err(ValidationError::InvalidCnpj(raw)),
        }
    }

    /// The 8-digit root shared by every branch of the same company.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number (`0001` for the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }
}

/// A taxpayer document that is either a CPF or a CNPJ.
///
/// Persons and companies share the same "documento" column in the
/// registry, so the variant is decided by digit count: up to 11 digits is
/// a CPF, more is a CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Documento {
    /// Individual.
    Cpf(Cpf),
    /// Company.
    Cnpj(Cnpj),
}

impl_validating_deserialize!(Documento);

impl Documento {
    /// Create a document from raw or masked input, picking CPF or CNPJ by
    /// digit count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDocumento`] if the value is
    /// neither a valid CPF nor a valid CNPJ.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let invalid = || ValidationError::InvalidDocumento(raw.clone());
        let digits = canonical_digits(&raw).ok_or_else(invalid)?;
        if digits.len() <= 11 {
            Cpf::new(digits).map(Self::Cpf).map_err(|_| invalid())
        } else {
            Cnpj::new(digits).map(Self::Cnpj).map_err(|_| invalid())
        }
    }

    /// Access the canonical digits.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// Return the masked display form.
    pub fn formatted(&self) -> String {
        match self {
            Self::Cpf(cpf) => cpf.formatted(),
            Self::Cnpj(cnpj) => cnpj.formatted(),
        }
    }

    /// True when this is a company document.
    pub fn is_company(&self) -> bool {
        matches!(self, Self::Cnpj(_))
    }
}

impl std::fmt::Display for Documento {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Brazilian postal code (CEP), 8 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cep(String);

impl_validating_deserialize!(Cep);
impl_masked_display!(Cep, MaskKind::Cep);

impl Cep {
    /// Create a CEP from `"01310100"` or `"01310-100"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCep`] if the value is not 8 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match canonical_digits(&raw) {
            Some(digits) if validate::is_valid_cep(&digits) => Ok(Self(digits)),
            _ => Err(ValidationError::InvalidCep(raw)),
        }
    }
}

/// Brazilian phone number with area code.
///
/// # Validation
///
/// - 10 digits (landline), or
/// - 11 digits with `9` as the first digit after the area code (mobile)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Telefone(String);

impl_validating_deserialize!(Telefone);
impl_masked_display!(Telefone, MaskKind::Telefone);

impl Telefone {
    /// Create a phone number from raw or masked input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTelefone`] on a bad shape.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match canonical_digits(&raw) {
            Some(digits) if validate::is_valid_telefone(&digits) => Ok(Self(digits)),
            _ => Err(ValidationError::InvalidTelefone(raw)),
        }
    }

    /// The two-digit area code (DDD).
    pub fn ddd(&self) -> &str {
        &self.0[..2]
    }

    /// True for an 11-digit mobile number.
    pub fn is_mobile(&self) -> bool {
        self.0.len() == 11
    }
}
