/// Check if color output should be disabled
/// Respects the NO_COLOR environment variable and the --no-color flag
pub fn should_disable_color(flag: bool) -> bool {
    flag || std::env::var_os("NO_COLOR").is_some()
}

/// Initialize colored crate from NO_COLOR and the --no-color flag
pub fn init_color(flag: bool) {
    if should_disable_color(flag) {
        colored::control::set_override(false);
    }
}
