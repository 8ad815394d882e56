//! Validation for smaller config sections: chat, upload, notifications,
//! and colors.

use crate::colors::validate_color;
use crate::schema::LawyerConfig;

use super::helpers::validate_range;

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &LawyerConfig) {
    validate_range(
        errors,
        "chat.scroll_step",
        u32::from(config.chat.scroll_step),
        1,
        50,
    );
}

pub(crate) fn validate_upload(errors: &mut Vec<String>, config: &LawyerConfig) {
    validate_range(
        errors,
        "upload.max_file_size_mb",
        config.upload.max_file_size_mb,
        1,
        1024,
    );
}

pub(crate) fn validate_notifications(errors: &mut Vec<String>, config: &LawyerConfig) {
    validate_range(
        errors,
        "notifications.ttl_secs",
        config.notifications.ttl_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "notifications.capacity",
        config.notifications.capacity,
        1,
        64,
    );
}

pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &LawyerConfig) {
    let c = &config.colors;
    let entries = [
        ("colors.user", &c.user),
        ("colors.assistant", &c.assistant),
        ("colors.citation", &c.citation),
        ("colors.success", &c.success),
        ("colors.warning", &c.warning),
        ("colors.error", &c.error),
        ("colors.muted", &c.muted),
        ("colors.border", &c.border),
    ];
    for (name, value) in entries {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a #RRGGBB color"));
        }
    }
}
