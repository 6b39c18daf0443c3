//! # Field Kinds and Failure Reasons
//!
//! [`MaskKind`] is the closed set of display masks an input field can carry.
//! [`FailureReason`] is the closed set of reasons a field value can be
//! rejected for. Both are exhaustive enums with snake_case keys shared by
//! serde, [`FromStr`], and [`std::fmt::Display`], so form definitions,
//! CLI arguments, and in-process callers all speak the same vocabulary.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Display mask attached to an input field.
///
/// | Kind | Shape | Max digits |
/// |------|-------|-----------|
/// | `cpf` | `ddd.ddd.ddd-dd` | 11 |
/// | `cnpj` | `dd.ddd.ddd/dddd-dd` | 14 |
/// | `documento` | CPF up to 11 digits, CNPJ beyond | 14 |
/// | `telefone` | `(dd) dddd-dddd` / `(dd) ddddd-dddd` | 11 |
/// | `cep` | `ddddd-ddd` | 8 |
/// | `moeda` | `1.234,56` (digits are cents) | unbounded |
/// | `data` | `dd/mm/yyyy` | 8 |
/// | `inteiro` | digits only | unbounded |
/// | `none` | input passed through | n/a |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskKind {
    /// Individual taxpayer number.
    Cpf,
    /// Company taxpayer number.
    Cnpj,
    /// CPF or CNPJ, chosen by digit count on every call.
    Documento,
    /// Landline (10 digits) or mobile (11 digits) phone number.
    Telefone,
    /// Postal code.
    Cep,
    /// Currency amount in BRL, typed as a cents buffer.
    Moeda,
    /// Calendar date, day first.
    Data,
    /// Plain non-negative integer.
    Inteiro,
    /// No mask.
    #[default]
    None,
}

impl MaskKind {
    /// Returns every mask kind in declaration order.
    pub fn all() -> &'static [MaskKind] {
        &[
            Self::Cpf,
            Self::Cnpj,
            Self::Documento,
            Self::Telefone,
            Self::Cep,
            Self::Moeda,
            Self::Data,
            Self::Inteiro,
            Self::None,
        ]
    }

    /// Returns the snake_case key for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Documento => "documento",
            Self::Telefone => "telefone",
            Self::Cep => "cep",
            Self::Moeda => "moeda",
            Self::Data => "data",
            Self::Inteiro => "inteiro",
            Self::None => "none",
        }
    }

    /// Maximum number of digits the mask keeps, or `None` when unbounded.
    pub fn max_digits(&self) -> Option<usize> {
        match self {
            Self::Cpf => Some(11),
            Self::Cnpj | Self::Documento => Some(14),
            Self::Telefone => Some(11),
            Self::Cep => Some(8),
            Self::Data => Some(8),
            Self::Moeda | Self::Inteiro | Self::None => None,
        }
    }
}

impl std::fmt::Display for MaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "documento" => Ok(Self::Documento),
            "telefone" => Ok(Self::Telefone),
            "cep" => Ok(Self::Cep),
            "moeda" => Ok(Self::Moeda),
            "data" => Ok(Self::Data),
            "inteiro" => Ok(Self::Inteiro),
            "none" => Ok(Self::None),
            other => Err(ValidationError::UnknownMaskKind(other.to_string())),
        }
    }
}

/// Why a field value was rejected.
///
/// The key (`as_str()`) is what callers pass around; the human-readable
/// text comes from [`crate::message::error_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Required field left empty.
    CampoObrigatorio,
    /// CPF check digits or length wrong.
    CpfInvalido,
    /// CNPJ check digits or length wrong.
    CnpjInvalido,
    /// Neither a valid CPF nor a valid CNPJ.
    DocumentoInvalido,
    /// Phone number shape wrong.
    TelefoneInvalido,
    /// Postal code length wrong.
    CepInvalido,
    /// E-mail address malformed.
    EmailInvalido,
    /// Date unparseable or not on the calendar.
    DataInvalida,
    /// Amount or integer not numeric or not positive.
    ValorInvalido,
    /// Value shorter than the field's minimum length.
    TamanhoMinimo,
}

impl FailureReason {
    /// Returns every failure reason in declaration order.
    pub fn all() -> &'static [FailureReason] {
        &[
            Self::CampoObrigatorio,
            Self::CpfInvalido,
            Self::CnpjInvalido,
            Self::DocumentoInvalido,
            Self::TelefoneInvalido,
            Self::CepInvalido,
            Self::EmailInvalido,
            Self::DataInvalida,
            Self::ValorInvalido,
            Self::TamanhoMinimo,
        ]
    }

    /// Returns the snake_case key for this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampoObrigatorio => "campo_obrigatorio",
            Self::CpfInvalido => "cpf_invalido",
            Self::CnpjInvalido => "cnpj_invalido",
            Self::DocumentoInvalido => "documento_invalido",
            Self::TelefoneInvalido => "telefone_invalido",
            Self::CepInvalido => "cep_invalido",
            Self::EmailInvalido => "email_invalido",
            Self::DataInvalida => "data_invalida",
            Self::ValorInvalido => "valor_invalido",
            Self::TamanhoMinimo => "tamanho_minimo",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureReason {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownReason(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_kind_as_str_roundtrip() {
        for kind in MaskKind::all() {
            let parsed: MaskKind = kind.as_str().parse().unwrap_or_else(|e| {
                panic!("Failed to parse {:?}: {e}", kind.as_str())
            });
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn mask_kind_from_str_invalid() {
        assert!("CPF".parse::<MaskKind>().is_err()); // case-sensitive
        assert!("rg".parse::<MaskKind>().is_err());
        assert!("".parse::<MaskKind>().is_err());
    }

    #[test]
    fn mask_kind_serde_format_matches_as_str() {
        for kind in MaskKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn mask_kind_default_is_none() {
        assert_eq!(MaskKind::default(), MaskKind::None);
    }

    #[test]
    fn max_digits_per_kind() {
        assert_eq!(MaskKind::Cpf.max_digits(), Some(11));
        assert_eq!(MaskKind::Cnpj.max_digits(), Some(14));
        assert_eq!(MaskKind::Documento.max_digits(), Some(14));
        assert_eq!(MaskKind::Telefone.max_digits(), Some(11));
        assert_eq!(MaskKind::Cep.max_digits(), Some(8));
        assert_eq!(MaskKind::Data.max_digits(), Some(8));
        assert_eq!(MaskKind::Moeda.max_digits(), None);
    }

    #[test]
    fn failure_reason_as_str_roundtrip() {
        for reason in FailureReason::all() {
            let parsed: FailureReason = reason.as_str().parse().unwrap();
            assert_eq!(*reason, parsed);
            assert_eq!(reason.to_string(), reason.as_str());
        }
    }

    #[test]
    fn failure_reason_unique_keys() {
        let mut seen = std::collections::HashSet::new();
        for reason in FailureReason::all() {
            assert!(seen.insert(reason.as_str()), "Duplicate key: {reason}");
        }
    }

    #[test]
    fn failure_reason_serde_format_matches_as_str() {
        for reason in FailureReason::all() {
            let json = serde_json::to_string(reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
        }
    }

    #[test]
    fn failure_reason_unknown_key() {
        let err = "cpf_invalid".parse::<FailureReason>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownReason("cpf_invalid".to_string()));
    }
}
