pub const EXIT_STATUS_SUCCESS: &str = "success";
pub const EXIT_STATUS_FAILURE: &str = "failure";

/// Extension key read from structured errors to label the field histogram.
pub const ERR_CODE_EXTENSION: &str = "error_code";

pub const LABEL_ERR_CODE: &str = "err_code";
pub const LABEL_EXIT_STATUS: &str = "exit_status";
pub const LABEL_OBJECT: &str = "object";
pub const LABEL_FIELD: &str = "field";
