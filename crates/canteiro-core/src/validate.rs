//! # Validator Engine
//!
//! One total predicate per field kind, plus [`validate`], which dispatches
//! on [`MaskKind`] and names the [`FailureReason`] on rejection.
//!
//! Document predicates (`cpf`, `cnpj`, `telefone`, `cep`) expect digits
//! already stripped by [`crate::mask::unmask`]; they reject anything else
//! rather than cleaning it. The generic predicates (string, date, amount,
//! e-mail) take the text as typed.
//!
//! ## Check digits
//!
//! CPF and CNPJ share one mod-11 rule: weight the leading digits, take the
//! sum modulo 11, and the check digit is `0` when the remainder is below 2,
//! `11 - remainder` otherwise. Sequences of one repeated digit satisfy the
//! arithmetic but are never issued, so they are rejected up front.

use chrono::NaiveDate;

use crate::kind::{FailureReason, MaskKind};
use crate::mask::parse_cents;

const CPF_WEIGHTS_1: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_WEIGHTS_2: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Decode `s` into exactly `len` digit values, or `None`.
fn digits_of(s: &str, len: usize) -> Option<Vec<u32>> {
    if s.len() != len {
        return None;
    }
    s.chars().map(|c| c.to_digit(10)).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// CPF: 11 digits, not all identical, both check digits correct.
pub fn is_valid_cpf(digits: &str) -> bool {
    let Some(d) = digits_of(digits, 11) else {
        return false;
    };
    !all_same(&d)
        && check_digit(&d[..9], &CPF_WEIGHTS_1) == d[9]
        && check_digit(&d[..10], &CPF_WEIGHTS_2) == d[10]
}

/// CNPJ: 14 digits, not all identical, both check digits correct.
pub fn is_valid_cnpj(digits: &str) -> bool {
    let Some(d) = digits_of(digits, 14) else {
        return false;
    };
    !all_same(&d)
        && check_digit(&d[..12], &CNPJ_WEIGHTS_1) == d[12]
        && check_digit(&d[..13], &CNPJ_WEIGHTS_2) == d[13]
}

/// Phone: 10 digits (landline), or 11 digits whose third digit is the
/// mobile prefix `9`. Area codes are not checked.
pub fn is_valid_telefone(digits: &str) -> bool {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match digits.len() {
        10 => true,
        11 => digits.as_bytes()[2] == b'9',
        _ => false,
    }
}

/// CEP: exactly 8 digits.
pub fn is_valid_cep(digits: &str) -> bool {
    digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Pragmatic e-mail check: one `@`, non-empty local part, a domain with at
/// least one dot and no empty labels, no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// True when `value` has something besides whitespace.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True when `value`, trimmed, has at least `min` characters.
pub fn has_min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// True when `value` names a real calendar date. See [`parse_date`].
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Parse a date typed as `dd/mm/yyyy`, unmasked as `ddmmyyyy`, or sent by
/// the backend as ISO `yyyy-mm-dd` (a trailing `T...` time is ignored).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let s = value.trim();

    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        return ymd(&s[4..], &s[2..4], &s[..2]);
    }

    if let Some((day, rest)) = s.split_once('/') {
        let (month, year) = rest.split_once('/')?;
        if day.len() != 2 || month.len() != 2 || year.len() != 4 {
            return None;
        }
        return ymd(year, month, day);
    }

    let date = s.split_once('T').map_or(s, |(date, _)| date);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !(numeric(year) && numeric(month) && numeric(day)) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// True when `value` parses as a monetary amount greater than zero.
/// Accepted forms are those of [`crate::mask::parse_cents`].
pub fn is_valid_amount(value: &str) -> bool {
    parse_cents(value).is_some_and(|cents| cents > 0)
}

/// The reason reported when a value of `kind` fails [`validate`].
/// `None` for kinds that accept anything.
pub fn reason_for_kind(kind: MaskKind) -> Option<FailureReason> {
    match kind {
        MaskKind::Cpf => Some(FailureReason::CpfInvalido),
        MaskKind::Cnpj => Some(FailureReason::CnpjInvalido),
        MaskKind::Documento => Some(FailureReason::DocumentoInvalido),
        MaskKind::Telefone => Some(FailureReason::TelefoneInvalido),
        MaskKind::Cep => Some(FailureReason::CepInvalido),
        MaskKind::Data => Some(FailureReason::DataInvalida),
        MaskKind::Moeda | MaskKind::Inteiro => Some(FailureReason::ValorInvalido),
        MaskKind::None => None,
    }
}

/// Validate unmasked `digits` for `kind`.
///
/// `documento` is checked as a CPF up to 11 digits and as a CNPJ beyond.
/// `data` expects the 8 digits `ddmmyyyy`; `moeda` expects the cents
/// buffer and requires it to be non-zero; `none` always passes.
///
/// ```
/// use canteiro_core::{mask, validate, FailureReason, MaskKind};
///
/// let digits = mask::unmask("111.444.777-35");
/// assert!(validate::validate(MaskKind::Cpf, &digits).is_ok());
/// assert_eq!(
///     validate::validate(MaskKind::Cep, "0131010"),
///     Err(FailureReason::CepInvalido)
/// );
/// ```
pub fn validate(kind: MaskKind, digits: &str) -> Result<(), FailureReason> {
    let valid = match kind {
        MaskKind::Cpf => is_valid_cpf(digits),
        MaskKind::Cnpj => is_valid_cnpj(digits),
        MaskKind::Documento if digits.len() <= 11 => is_valid_cpf(digits),
        MaskKind::Documento => is_valid_cnpj(digits),
        MaskKind::Telefone => is_valid_telefone(digits),
        MaskKind::Cep => is_valid_cep(digits),
        MaskKind::Data => is_valid_date(digits),
        MaskKind::Moeda => {
            !digits.is_empty()
                && digits.bytes().all(|b| b.is_ascii_digit())
                && digits.bytes().any(|b| b != b'0')
        }
        MaskKind::Inteiro => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        MaskKind::None => true,
    };
    if valid {
        return Ok(());
    }
    match reason_for_kind(kind) {
        Some(reason) => Err(reason),
        None => Ok(()),
    }
}
