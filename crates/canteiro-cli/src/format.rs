//! # Single-Value Subcommands
//!
//! `mask`, `unmask`, `validate` and `message`: thin wrappers over the
//! engines for one value at a time.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use canteiro_core::message::error_message;
use canteiro_core::{mask, validate, FailureReason, FieldSpec, MaskKind};

use crate::EXIT_INVALID;

/// Arguments for `canteiro mask`.
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Mask kind (cpf, cnpj, documento, telefone, cep, moeda, data, inteiro, none).
    #[arg(long, short)]
    pub kind: MaskKind,

    /// Upper-case the result.
    #[arg(long)]
    pub uppercase: bool,

    /// Truncate the result to this many characters.
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Text to format.
    #[arg(value_name = "INPUT")]
    pub input: String,
}

/// Arguments for `canteiro unmask`.
#[derive(Args, Debug)]
pub struct UnmaskArgs {
    /// Text to strip to digits.
    #[arg(value_name = "INPUT")]
    pub input: String,
}

/// Arguments for `canteiro validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Mask kind the value belongs to.
    #[arg(long, short)]
    pub kind: MaskKind,

    /// Field label used in the failure message.
    #[arg(long, default_value = "Campo")]
    pub label: String,

    /// Value to check, masked or not.
    #[arg(value_name = "VALUE")]
    pub value: String,
}

/// Arguments for `canteiro message`.
#[derive(Args, Debug)]
pub struct MessageArgs {
    /// Field label to interpolate.
    #[arg(long, default_value = "Campo")]
    pub label: String,

    /// Failure reason key (e.g. cpf_invalido, campo_obrigatorio).
    #[arg(value_name = "REASON")]
    pub reason: FailureReason,
}

/// Execute `canteiro mask`.
pub fn run_mask(args: &MaskArgs, out: &mut impl Write) -> Result<u8> {
    let mut field = FieldSpec::new("input", "Input", args.kind);
    field.uppercase = args.uppercase;
    field.max_length = args.max_length;
    writeln!(out, "{}", field.display(&args.input))?;
    Ok(0)
}

/// Execute `canteiro unmask`.
pub fn run_unmask(args: &UnmaskArgs, out: &mut impl Write) -> Result<u8> {
    writeln!(out, "{}", mask::unmask(&args.input))?;
    Ok(0)
}

/// Execute `canteiro validate`.
///
/// Prints `ok` or the failure message; exits 1 on failure.
pub fn run_validate(args: &ValidateArgs, out: &mut impl Write) -> Result<u8> {
    let raw = mask::unmask(&args.value);
    let digits = match args.kind {
        MaskKind::None => args.value.as_str(),
        _ => raw.as_str(),
    };
    // The mask would silently truncate; a stored value must not be overlong.
    let overlong = args.kind.max_digits().is_some_and(|max| raw.len() > max);

    let outcome = match validate::reason_for_kind(args.kind) {
        Some(reason) if overlong => Err(reason),
        _ => validate::validate(args.kind, digits),
    };

    match outcome {
        Ok(()) => {
            tracing::debug!(kind = %args.kind, "value accepted");
            writeln!(out, "ok")?;
            Ok(0)
        }
        Err(reason) => {
            tracing::debug!(kind = %args.kind, reason = %reason, "value rejected");
            writeln!(out, "{}", error_message(&args.label, reason))?;
            Ok(EXIT_INVALID)
        }
    }
}

/// Execute `canteiro message`.
pub fn run_message(args: &MessageArgs, out: &mut impl Write) -> Result<u8> {
    writeln!(out, "{}", error_message(&args.label, args.reason))?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<u8>) -> (u8, String) {
        let mut buf = Vec::new();
        let code = f(&mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn mask_with_wrapper_options() {
        let args = MaskArgs {
            kind: MaskKind::None,
            uppercase: true,
            max_length: Some(4),
            input: "obra norte".to_string(),
        };
        assert_eq!(output(|o| run_mask(&args, o)), (0, "OBRA\n".to_string()));
    }

    #[test]
    fn unmask_prints_digits() {
        let args = UnmaskArgs {
            input: "(11) 98765-4321".to_string(),
        };
        assert_eq!(output(|o| run_unmask(&args, o)).1, "11987654321\n");
    }

    #[test]
    fn validate_ok_and_invalid() {
        let good = ValidateArgs {
            kind: MaskKind::Cpf,
            label: "CPF".to_string(),
            value: "111.444.777-35".to_string(),
        };
        assert_eq!(output(|o| run_validate(&good, o)), (0, "ok\n".to_string()));

        let bad = ValidateArgs {
            value: "111.444.777-36".to_string(),
            ..good
        };
        let (code, text) = output(|o| run_validate(&bad, o));
        assert_eq!(code, EXIT_INVALID);
        assert_eq!(text, "CPF inválido. Verifique os dígitos.\n");
    }

    #[test]
    fn validate_rejects_overlong_input() {
        let args = ValidateArgs {
            kind: MaskKind::Cep,
            label: "CEP".to_string(),
            value: "013101009".to_string(),
        };
        assert_eq!(output(|o| run_validate(&args, o)).0, EXIT_INVALID);
    }

    #[test]
    fn message_prints_reason() {
        let args = MessageArgs {
            label: "Nome".to_string(),
            reason: FailureReason::CampoObrigatorio,
        };
        assert_eq!(output(|o| run_message(&args, o)).1, "Nome é obrigatório\n");
    }
}
