//! Validation for the `[api]` section.

use crate::schema::LawyerConfig;

use super::helpers::validate_range;

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &LawyerConfig) {
    let url = config.api.base_url.trim();
    if url.is_empty() {
        errors.push("api.base_url must not be empty".into());
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "api.base_url = {url} must start with http:// or https://"
        ));
    }

    validate_range(
        errors,
        "api.connect_timeout_secs",
        config.api.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "api.request_timeout_secs",
        config.api.request_timeout_secs,
        1,
        600,
    );
    validate_range(
        errors,
        "api.upload_timeout_secs",
        config.api.upload_timeout_secs,
        1,
        3600,
    );
}
