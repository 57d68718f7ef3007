pub mod banner;
pub mod render;
pub mod tui;

/// Prints the welcome banner (unless disabled) and applies the theme for all inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui(show_banner: bool) {
    if show_banner {
        banner::print_welcome();
    }
    tui::apply_theme();
}
