//! # Form Fields
//!
//! The glue an input widget uses around the two engines: [`FieldSpec`]
//! describes one field (label, mask, required, casing, length bounds),
//! renders keystrokes for display, and checks the value on blur/submit.
//! [`FormSpec`] is a whole form, loaded from YAML, checked in one pass.
//!
//! ## Check order
//!
//! 1. Empty (after trim): `campo_obrigatorio` if required, otherwise accepted.
//! 2. `min_length`: `tamanho_minimo`.
//! 3. `email`: `email_invalido`.
//! 4. The mask kind's validator over the unmasked digits (skipped for `none`).
//!    A `data` value that already parses as a date (including backend ISO
//!    `yyyy-mm-dd`) is accepted before unmasking.
//!
//! The first failing step wins; a field reports at most one error.
//!
//! ```yaml
//! fields:
//!   - name: nome
//!     label: Nome
//!     required: true
//!     uppercase: true
//!     max_length: 120
//!   - name: documento
//!     label: CPF/CNPJ
//!     mask: documento
//!     required: true
//!   - name: email
//!     label: E-mail
//!     email: true
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CanteiroError;
use crate::kind::{FailureReason, MaskKind};
use crate::mask;
use crate::message::error_message;
use crate::validate;

/// One input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    /// Key under which the value is submitted.
    pub name: String,
    /// Label shown to the user and interpolated into messages.
    pub label: String,
    /// Display mask and validation kind.
    #[serde(default)]
    pub mask: MaskKind,
    /// Whether an empty value is an error.
    #[serde(default)]
    pub required: bool,
    /// Upper-case the displayed value.
    #[serde(default)]
    pub uppercase: bool,
    /// Truncate the displayed value to this many characters.
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Reject non-empty values shorter than this (trimmed, in characters).
    #[serde(default)]
    pub min_length: Option<usize>,
    /// Validate as an e-mail address.
    #[serde(default)]
    pub email: bool,
}

/// A field that failed its check.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct FieldError {
    /// The field's `name`.
    pub field: String,
    /// Why it failed.
    pub reason: FailureReason,
    /// Localized message for display.
    pub message: String,
}

impl FieldSpec {
    /// A field with the given name, label and mask and no other constraints.
    pub fn new(name: impl Into<String>, label: impl Into<String>, mask: MaskKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            mask,
            required: false,
            uppercase: false,
            max_length: None,
            min_length: None,
            email: false,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Upper-case displayed values.
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Cap displayed values at `max` characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Require at least `min` characters.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Validate as an e-mail address.
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Render `input` for display: mask, then casing, then length cap.
    pub fn display(&self, input: &str) -> String {
        let mut out = mask::apply(self.mask, input);
        if self.uppercase {
            out = out.to_uppercase();
        }
        if let Some(max) = self.max_length {
            let cut = out.char_indices().nth(max).map(|(idx, _)| idx);
            if let Some(idx) = cut {
                out.truncate(idx);
            }
        }
        out
    }

    /// Check a submitted value (masked or not).
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] in the order described in the
    /// module docs.
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        if !validate::is_non_empty(value) {
            if self.required {
                return Err(self.fail(FailureReason::CampoObrigatorio));
            }
            return Ok(());
        }

        if let Some(min) = self.min_length {
            if !validate::has_min_len(value, min) {
                return Err(self.fail(FailureReason::TamanhoMinimo));
            }
        }

        if self.email && !validate::is_valid_email(value.trim()) {
            return Err(self.fail(FailureReason::EmailInvalido));
        }

        // ISO dates from the backend would unmask into the wrong digit order.
        if self.mask == MaskKind::Data && validate::is_valid_date(value) {
            return Ok(());
        }

        if self.mask != MaskKind::None {
            let digits = mask::unmask(value);
            validate::validate(self.mask, &digits).map_err(|reason| self.fail(reason))?;
        }

        Ok(())
    }

    fn fail(&self, reason: FailureReason) -> FieldError {
        FieldError {
            field: self.name.clone(),
            reason,
            message: error_message(&self.label, reason),
        }
    }
}

/// A form: an ordered list of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSpec {
    /// Fields in display order.
    pub fields: Vec<FieldSpec>,
}

/// Outcome of checking every field of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    /// Number of fields checked.
    pub checked: usize,
    /// Failures, in field order.
    pub errors: Vec<FieldError>,
}

impl FormReport {
    /// True when no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error for field `name`, if it failed.
    pub fn error_for(&self, name: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == name)
    }
}

impl FormSpec {
    /// Build a form from fields, checking consistency.
    ///
    /// # Errors
    ///
    /// Returns [`CanteiroError::Config`] for empty names or labels,
    /// duplicate names, or `min_length` above `max_length`.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, CanteiroError> {
        let form = Self { fields };
        form.check_consistency()?;
        Ok(form)
    }

    /// Parse a form definition from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`CanteiroError::Yaml`] on malformed YAML or unknown keys,
    /// and [`CanteiroError::Config`] on inconsistent fields.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CanteiroError> {
        let form: Self = serde_yaml::from_str(yaml)?;
        form.check_consistency()?;
        Ok(form)
    }

    /// Load a form definition from a YAML file.
    ///
    /// # Errors
    ///
    /// As [`FormSpec::from_yaml_str`], plus [`CanteiroError::Io`].
    pub fn from_path(path: &Path) -> Result<Self, CanteiroError> {
        let yaml = std::fs::read_to_string(path)?;
        let form = Self::from_yaml_str(&yaml)?;
        tracing::debug!(
            path = %path.display(),
            fields = form.fields.len(),
            "loaded form definition"
        );
        Ok(form)
    }

    fn check_consistency(&self) -> Result<(), CanteiroError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(CanteiroError::Config("field with empty name".to_string()));
            }
            if field.label.trim().is_empty() {
                return Err(CanteiroError::Config(format!(
                    "field {:?} has an empty label",
                    field.name
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(CanteiroError::Config(format!(
                    "duplicate field {:?}",
                    field.name
                )));
            }
            if let (Some(min), Some(max)) = (field.min_length, field.max_length) {
                if min > max {
                    return Err(CanteiroError::Config(format!(
                        "field {:?}: min_length {min} exceeds max_length {max}",
                        field.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check submitted values; a missing key counts as empty.
    pub fn check(&self, values: &BTreeMap<String, String>) -> FormReport {
        let errors = self
            .fields
            .iter()
            .filter_map(|field| {
                let value = values.get(&field.name).map_or("", String::as_str);
                field.check(value).err()
            })
            .collect();
        FormReport {
            checked: self.fields.len(),
            errors,
        }
    }
}
