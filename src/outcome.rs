use value::ConstValue;

use crate::constants::{ERR_CODE_EXTENSION, EXIT_STATUS_FAILURE, EXIT_STATUS_SUCCESS};
use crate::ServerError;

/// Outcome of a single request or field resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    /// Label value recorded on the duration histograms.
    pub fn as_str(self) -> &'static str {
        match self {
            ExitStatus::Success => EXIT_STATUS_SUCCESS,
            ExitStatus::Failure => EXIT_STATUS_FAILURE,
        }
    }

    pub(crate) fn of<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ExitStatus::Success,
            Err(_) => ExitStatus::Failure,
        }
    }
}

/// Extracts the `error_code` extension from the first structured error in
/// `err`'s chain.
///
/// Returns the empty string when no [`ServerError`] is found or it carries no
/// such extension, so the histogram label degrades instead of failing. A
/// string extension value is used verbatim; anything else takes its display
/// form.
pub fn error_code(err: &anyhow::Error) -> String {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ServerError>())
        .and_then(|server_err| server_err.extensions.get(ERR_CODE_EXTENSION))
        .map(|code| match code {
            ConstValue::String(code) => code.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn exit_status_labels() {
        assert_eq!(ExitStatus::Success.as_str(), "success");
        assert_eq!(ExitStatus::Failure.as_str(), "failure");
    }

    #[test]
    fn plain_errors_have_no_code() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(error_code(&err), "");
    }

    #[test]
    fn missing_extension_yields_empty_code() {
        let err = anyhow::Error::new(ServerError::new("boom"));
        assert_eq!(error_code(&err), "");
    }

    #[test]
    fn string_code_is_used_verbatim() {
        let err = anyhow::Error::new(
            ServerError::new("hero not found").extension("error_code", "NOT_FOUND"),
        );
        assert_eq!(error_code(&err), "NOT_FOUND");
    }

    #[test]
    fn non_string_code_takes_display_form() {
        let err =
            anyhow::Error::new(ServerError::new("hero not found").extension("error_code", 404));
        assert_eq!(error_code(&err), "404");
    }

    #[test]
    fn wrapped_server_error_is_found() {
        let err = anyhow::Error::new(
            ServerError::new("permission denied").extension("error_code", "DENIED"),
        )
        .context("failed to resolve field");
        assert_eq!(error_code(&err), "DENIED");
    }
}
