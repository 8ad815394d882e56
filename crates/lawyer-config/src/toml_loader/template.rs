//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# AI Lawyer Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
base_url = "http://127.0.0.1:8000"   # AI_LAWYER_API_URL overrides this
# connect_timeout_secs = 10           # 1-120
# request_timeout_secs = 120          # 1-600
# upload_timeout_secs = 300           # 1-3600
# clear_session_on_reset = true

[chat]
# greeting = "Hello! I am your AI Legal Assistant. How can I help you today?"
# new_session_message = "New session started. Previous temporary files are cleared."
# scroll_step = 3                     # 1-50

[upload]
# default_kind = "temp"               # "temp" or "permanent"
# max_file_size_mb = 50               # 1-1024

[notifications]
# ttl_secs = 5                        # 1-60
# capacity = 8                        # 1-64

[colors]
# user = "#8cbedc"
# assistant = "#f0ece4"
# citation = "#cba6f7"
# success = "#00ff88"
# warning = "#ff6b00"
# error = "#ff4444"
# muted = "#888888"
# border = "#00d4ff"

[keybinds]
# send = "Enter"
# attach_file = "Ctrl+O"
# remove_file = "Ctrl+R"
# toggle_upload_kind = "Ctrl+T"
# upload = "Ctrl+U"
# new_session = "Ctrl+N"
# quit = "Ctrl+C"

[logging]
# level = "INFO"                      # DEBUG, INFO, WARNING, ERROR
# file_logging = true
"##
    .to_string()
}
