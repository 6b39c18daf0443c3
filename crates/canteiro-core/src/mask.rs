//! # Mask Engine
//!
//! Turns whatever an input widget currently holds (raw keystrokes, a
//! half-masked value, a pasted string) into the canonical display mask for
//! a [`MaskKind`], and strips masks back to digits.
//!
//! ## Invariants
//!
//! - [`apply`] discards every non-digit before formatting, so feeding its
//!   own output back in is a no-op.
//! - For every positional kind, `unmask(apply(k, s))` is the digit
//!   subsequence of `s`, truncated to [`MaskKind::max_digits`].
//! - Separators are only emitted in front of a digit group that has at
//!   least one digit, so partial input never ends in dangling punctuation.
//! - Nothing here fails: overlong input is truncated and junk is dropped.
//!   Validity is [`crate::validate`]'s concern.

use crate::kind::MaskKind;

/// A mask template: each entry is the literal emitted before a digit group
/// and the width of that group.
type Template = &'static [(&'static str, usize)];

const CPF: Template = &[("", 3), (".", 3), (".", 3), ("-", 2)];
const CNPJ: Template = &[("", 2), (".", 3), (".", 3), ("/", 4), ("-", 2)];
const CEP: Template = &[("", 5), ("-", 3)];
const DATA: Template = &[("", 2), ("/", 2), ("/", 4)];
const TELEFONE_FIXO: Template = &[("(", 2), (") ", 4), ("-", 4)];
const TELEFONE_CELULAR: Template = &[("(", 2), (") ", 5), ("-", 4)];

/// Digit count at which `documento` switches from CPF to CNPJ formatting.
const CPF_DIGITS: usize = 11;

/// Format `input` for display under `kind`.
///
/// [`MaskKind::None`] returns the input untouched. Every other kind strips
/// non-digits, truncates to the kind's maximum, and re-inserts separators.
/// Empty input yields an empty string.
///
/// ```
/// use canteiro_core::{mask, MaskKind};
///
/// assert_eq!(mask::apply(MaskKind::Cpf, "11144477735"), "111.444.777-35");
/// assert_eq!(mask::apply(MaskKind::Cnpj, "11.222.333/000181"), "11.222.333/0001-81");
/// assert_eq!(mask::apply(MaskKind::Moeda, "123456"), "1.234,56");
/// ```
pub fn apply(kind: MaskKind, input: &str) -> String {
    if kind == MaskKind::None {
        return input.to_string();
    }

    let mut digits = unmask(input);
    if let Some(max) = kind.max_digits() {
        // ASCII only, so byte truncation is char truncation.
        digits.truncate(max);
    }

    match kind {
        MaskKind::Cpf => group(&digits, CPF),
        MaskKind::Cnpj => group(&digits, CNPJ),
        MaskKind::Documento => format_documento(&digits),
        MaskKind::Telefone => format_telefone(&digits),
        MaskKind::Cep => group(&digits, CEP),
        MaskKind::Moeda => format_moeda(&digits),
        MaskKind::Data => group(&digits, DATA),
        MaskKind::Inteiro | MaskKind::None => digits,
    }
}

/// Strip every character that is not an ASCII digit.
pub fn unmask(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Lay `digits` out according to `template`, stopping at the first empty group.
fn group(digits: &str, template: Template) -> String {
    let mut out = String::with_capacity(digits.len() + template.len() * 2);
    let mut rest = digits;
    for &(literal, width) in template {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(width.min(rest.len()));
        out.push_str(literal);
        out.push_str(head);
        rest = tail;
    }
    out
}

fn format_documento(digits: &str) -> String {
    if digits.len() <= CPF_DIGITS {
        group(digits, CPF)
    } else {
        group(digits, CNPJ)
    }
}

fn format_telefone(digits: &str) -> String {
    if digits.len() == 11 {
        group(digits, TELEFONE_CELULAR)
    } else {
        group(digits, TELEFONE_FIXO)
    }
}

/// Render a cents buffer as `1.234,56`. Leading zeros are absorbed; the
/// result always carries exactly two decimal places.
fn format_moeda(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }
    let significant = digits.trim_start_matches('0');
    let padded = format!("{significant:0>3}");
    let (reais, centavos) = padded.split_at(padded.len() - 2);
    format!("{},{}", group_thousands(reais), centavos)
}

fn group_thousands(int: &str) -> String {
    let mut out = String::with_capacity(int.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Render an amount in cents with the `moeda` mask.
pub fn format_cents(cents: u64) -> String {
    format_moeda(&cents.to_string())
}

/// Parse a non-negative monetary amount into cents.
///
/// Accepts the `moeda` display form (`1.234,56`, optionally prefixed with
/// `R$`), a comma decimal (`1234,5`), a dot decimal (`1234.56`), or a plain
/// integer. When a comma is present, dots are thousands separators; without
/// one, a single dot is the decimal point and repeated dots are thousands
/// separators. Returns `None` for anything else, including signs, more than
/// two decimal places, and values that overflow `u64` cents.
pub fn parse_cents(input: &str) -> Option<u64> {
    let s = input.trim();
    let s = s.strip_prefix("R$").map(str::trim_start).unwrap_or(s);
    if s.is_empty() {
        return None;
    }

    let (int_part, frac_part) = if let Some((int, frac)) = s.split_once(',') {
        (int.replace('.', ""), frac)
    } else if s.matches('.').count() == 1 {
        let (int, frac) = s.split_once('.')?;
        (int.to_string(), frac)
    } else {
        (s.replace('.', ""), "")
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
        || frac_part.len() > 2
    {
        return None;
    }

    let reais: u64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };
    let centavos: u64 = match frac_part.len() {
        0 => 0,
        1 => frac_part.parse::<u64>().ok()? * 10,
        _ => frac_part.parse().ok()?,
    };
    reais.checked_mul(100)?.checked_add(centavos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ---- unmask ----

    #[test]
    fn unmask_strips_punctuation() {
        assert_eq!(unmask("111.444.777-35"), "11144477735");
        assert_eq!(unmask("(11) 98765-4321"), "11987654321");
        assert_eq!(unmask("abc"), "");
        assert_eq!(unmask(""), "");
    }

    #[test]
    fn unmask_ignores_non_ascii_digits() {
        assert_eq!(unmask("١٢٣4"), "4");
    }

    // ---- cpf / cnpj / documento ----

    #[test]
    fn cpf_full() {
        assert_eq!(apply(MaskKind::Cpf, "11144477735"), "111.444.777-35");
    }

    #[test]
    fn cpf_truncates_overlong_input() {
        assert_eq!(apply(MaskKind::Cpf, "111444777351234"), "111.444.777-35");
    }

    #[test]
    fn cpf_partial_has_no_trailing_separator() {
        assert_eq!(apply(MaskKind::Cpf, "111"), "111");
        assert_eq!(apply(MaskKind::Cpf, "1114"), "111.4");
        assert_eq!(apply(MaskKind::Cpf, "111444777"), "111.444.777");
        assert_eq!(apply(MaskKind::Cpf, "1114447773"), "111.444.777-3");
    }

    #[test]
    fn cnpj_full_and_partial() {
        assert_eq!(apply(MaskKind::Cnpj, "11222333000181"), "11.222.333/0001-81");
        assert_eq!(apply(MaskKind::Cnpj, "112223330"), "11.222.333/0");
        assert_eq!(apply(MaskKind::Cnpj, "11"), "11");
    }

    #[test]
    fn documento_switches_on_digit_count() {
        assert_eq!(apply(MaskKind::Documento, "11144477735"), "111.444.777-35");
        assert_eq!(apply(MaskKind::Documento, "111444777351"), "11.144.477/7351");
        assert_eq!(
            apply(MaskKind::Documento, "11222333000181"),
            "11.222.333/0001-81"
        );
    }

    #[test]
    fn documento_reformats_masked_cpf_into_cnpj() {
        // The widget hands back the previous CPF-shaped value plus one keystroke.
        assert_eq!(
            apply(MaskKind::Documento, "112.223.330-001"),
            "11.222.333/0001"
        );
    }

    // ---- telefone ----

    #[test]
    fn telefone_landline_and_mobile() {
        assert_eq!(apply(MaskKind::Telefone, "1187654321"), "(11) 8765-4321");
        assert_eq!(apply(MaskKind::Telefone, "11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn telefone_partial() {
        assert_eq!(apply(MaskKind::Telefone, "1"), "(1");
        assert_eq!(apply(MaskKind::Telefone, "11"), "(11");
        assert_eq!(apply(MaskKind::Telefone, "119"), "(11) 9");
        assert_eq!(apply(MaskKind::Telefone, "1198765"), "(11) 9876-5");
    }

    #[test]
    fn telefone_truncates_to_eleven() {
        assert_eq!(apply(MaskKind::Telefone, "119876543210"), "(11) 98765-4321");
    }

    // ---- cep / data / inteiro ----

    #[test]
    fn cep_shape() {
        assert_eq!(apply(MaskKind::Cep, "01310100"), "01310-100");
        assert_eq!(apply(MaskKind::Cep, "01310"), "01310");
        assert_eq!(apply(MaskKind::Cep, "013101"), "01310-1");
    }

    #[test]
    fn data_shape_without_calendar_check() {
        assert_eq!(apply(MaskKind::Data, "31042024"), "31/04/2024");
        assert_eq!(apply(MaskKind::Data, "310"), "31/0");
        assert_eq!(apply(MaskKind::Data, "3104202499"), "31/04/2024");
    }

    #[test]
    fn inteiro_keeps_digits_only() {
        assert_eq!(apply(MaskKind::Inteiro, "1.200 un"), "1200");
        assert_eq!(apply(MaskKind::Inteiro, "007"), "007");
    }

    #[test]
    fn none_passes_through() {
        assert_eq!(apply(MaskKind::None, "Obra Centro - Bloco A"), "Obra Centro - Bloco A");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        for kind in MaskKind::all() {
            assert_eq!(apply(*kind, ""), "", "kind {kind}");
        }
    }

    #[test]
    fn letters_are_dropped() {
        assert_eq!(apply(MaskKind::Cep, "cep: abc"), "");
        assert_eq!(apply(MaskKind::Cpf, "1a1b1"), "111");
    }

    // ---- moeda ----

    #[test]
    fn moeda_cents_buffer() {
        assert_eq!(apply(MaskKind::Moeda, "5"), "0,05");
        assert_eq!(apply(MaskKind::Moeda, "100"), "1,00");
        assert_eq!(apply(MaskKind::Moeda, "1234"), "12,34");
        assert_eq!(apply(MaskKind::Moeda, "123456"), "1.234,56");
        assert_eq!(apply(MaskKind::Moeda, "123456789"), "1.234.567,89");
    }

    #[test]
    fn moeda_absorbs_leading_zeros() {
        assert_eq!(apply(MaskKind::Moeda, "0"), "0,00");
        assert_eq!(apply(MaskKind::Moeda, "0005"), "0,05");
        // Re-masking the displayed value must not drift.
        assert_eq!(apply(MaskKind::Moeda, "0,05"), "0,05");
        assert_eq!(apply(MaskKind::Moeda, "1.234,567"), "12.345,67");
    }

    #[test]
    fn moeda_empty_stays_empty() {
        assert_eq!(apply(MaskKind::Moeda, ""), "");
        assert_eq!(apply(MaskKind::Moeda, "R$ "), "");
    }

    #[test]
    fn format_cents_matches_mask() {
        assert_eq!(format_cents(0), "0,00");
        assert_eq!(format_cents(5), "0,05");
        assert_eq!(format_cents(123_456), "1.234,56");
        assert_eq!(format_cents(100_000_000), "1.000.000,00");
    }

    // ---- parse_cents ----

    #[test]
    fn parse_cents_display_form() {
        assert_eq!(parse_cents("1.234,56"), Some(123_456));
        assert_eq!(parse_cents("R$ 1.234,56"), Some(123_456));
        assert_eq!(parse_cents("0,05"), Some(5));
        assert_eq!(parse_cents("12,5"), Some(1_250));
    }

    #[test]
    fn parse_cents_plain_forms() {
        assert_eq!(parse_cents("1234.56"), Some(123_456));
        assert_eq!(parse_cents("1234"), Some(123_400));
        assert_eq!(parse_cents("1.234.567"), Some(123_456_700));
        assert_eq!(parse_cents(".5"), Some(50));
    }

    #[test]
    fn parse_cents_rejects_garbage() {
        assert_eq!(parse_cents(""), None);
        assert_eq!(parse_cents("abc"), None);
        assert_eq!(parse_cents("-5"), None);
        assert_eq!(parse_cents("1,234"), None);
        assert_eq!(parse_cents(","), None);
        assert_eq!(parse_cents("99999999999999999999"), None);
    }

    // ---- properties ----

    fn any_kind() -> impl Strategy<Value = MaskKind> {
        prop::sample::select(MaskKind::all().to_vec())
    }

    fn positional_kind() -> impl Strategy<Value = MaskKind> {
        prop::sample::select(vec![
            MaskKind::Cpf,
            MaskKind::Cnpj,
            MaskKind::Documento,
            MaskKind::Telefone,
            MaskKind::Cep,
            MaskKind::Data,
            MaskKind::Inteiro,
            MaskKind::None,
        ])
    }

    proptest! {
        /// Re-masking the stripped output changes nothing.
        #[test]
        fn apply_is_idempotent(kind in any_kind(), s in ".{0,40}") {
            let once = unmask(&apply(kind, &s));
            let twice = unmask(&apply(kind, &once));
            prop_assert_eq!(once, twice);
        }

        /// Masked output fed back through apply is a fixed point.
        #[test]
        fn masked_output_is_fixed_point(kind in any_kind(), s in "[0-9]{0,20}") {
            let masked = apply(kind, &s);
            prop_assert_eq!(apply(kind, &masked), masked);
        }

        /// Positional masks keep exactly the digit subsequence, truncated.
        #[test]
        fn digits_survive_round_trip(kind in positional_kind(), s in "[0-9a-z .()/-]{0,40}") {
            let mut expected = unmask(&s);
            if let Some(max) = kind.max_digits() {
                expected.truncate(max);
            }
            prop_assert_eq!(unmask(&apply(kind, &s)), expected);
        }

        /// The moeda mask and parse_cents agree on the amount.
        #[test]
        fn moeda_parses_back_to_cents(cents in 0u64..1_000_000_000_000) {
            let masked = apply(MaskKind::Moeda, &cents.to_string());
            prop_assert_eq!(parse_cents(&masked), Some(cents));
        }
    }
}
