#![deny(missing_docs)]

//! # canteiro-core — Field Masking and Validation
//!
//! The input layer of the construction-site registry: every CPF, CNPJ,
//! CEP, phone, amount and date a user types into a registration screen
//! passes through this crate twice, once per keystroke for display and
//! once on blur/submit for validity.
//!
//! ## Design Principles
//!
//! 1. **Two pure engines.** [`mask`] formats and strips; [`validate`]
//!    decides. Neither holds state, performs I/O, logs, or fails. Junk
//!    input degrades to an empty or truncated mask, or to `false`.
//!
//! 2. **Single [`MaskKind`] enum.** One closed set of field kinds with
//!    exhaustive `match` in both engines, so adding a kind forces both to
//!    handle it.
//!
//! 3. **Validated newtypes at storage boundaries.** [`Cpf`], [`Cnpj`],
//!    [`Documento`], [`Cep`] and [`Telefone`] hold canonical digits and
//!    can only be built (or deserialized) from valid input.
//!
//! 4. **[`CanteiroError`] hierarchy.** Structured errors with `thiserror`
//!    for the places that can fail: newtype construction, key parsing and
//!    form configuration. No `.unwrap()` outside tests.
//!
//! ## Calling convention
//!
//! ```
//! use canteiro_core::{mask, message, validate, MaskKind};
//!
//! // On every keystroke.
//! let shown = mask::apply(MaskKind::Cpf, "1114447773");
//! assert_eq!(shown, "111.444.777-3");
//!
//! // On blur.
//! let digits = mask::unmask(&shown);
//! let outcome = validate::validate(MaskKind::Cpf, &digits);
//! let text = outcome
//!     .err()
//!     .map(|reason| message::error_message("CPF", reason))
//!     .unwrap_or_default();
//! assert_eq!(text, "CPF inválido. Verifique os dígitos.");
//! ```

pub mod document;
pub mod error;
pub mod field;
pub mod kind;
pub mod mask;
pub mod message;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use document::{Cep, Cnpj, Cpf, Documento, Telefone};
pub use error::{CanteiroError, ValidationError};
pub use field::{FieldError, FieldSpec, FormReport, FormSpec};
pub use kind::{FailureReason, MaskKind};
