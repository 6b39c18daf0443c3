//! Portuguese messages for [`FailureReason`]s.

use crate::kind::FailureReason;

/// Message shown for a field labelled `label` that failed with `reason`.
///
/// Document reasons name the document itself and ignore the label; the
/// generic reasons interpolate it.
///
/// ```
/// use canteiro_core::{message::error_message, FailureReason};
///
/// assert_eq!(
///     error_message("Nome", FailureReason::CampoObrigatorio),
///     "Nome é obrigatório"
/// );
/// assert_eq!(
///     error_message("CPF do responsável", FailureReason::CpfInvalido),
///     "CPF inválido. Verifique os dígitos."
/// );
/// ```
pub fn error_message(label: &str, reason: FailureReason) -> String {
    match reason {
        FailureReason::CampoObrigatorio => format!("{label} é obrigatório"),
        FailureReason::CpfInvalido => "CPF inválido. Verifique os dígitos.".to_string(),
        FailureReason::CnpjInvalido => "CNPJ inválido. Verifique os dígitos.".to_string(),
        FailureReason::DocumentoInvalido => {
            "CPF/CNPJ inválido. Verifique os dígitos.".to_string()
        }
        FailureReason::TelefoneInvalido => {
            "Telefone inválido. Use (DD) XXXX-XXXX ou (DD) 9XXXX-XXXX.".to_string()
        }
        FailureReason::CepInvalido => "CEP inválido. Informe os 8 dígitos.".to_string(),
        FailureReason::EmailInvalido => "E-mail inválido".to_string(),
        FailureReason::DataInvalida => format!("{label} não é uma data válida"),
        FailureReason::ValorInvalido => format!("{label} deve ser maior que zero"),
        FailureReason::TamanhoMinimo => format!("{label} é muito curto"),
    }
}
