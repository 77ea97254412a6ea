pub mod banner;
pub mod console;

use inquire::ui::{Color, RenderConfig, Styled};

pub use console::ConsoleFrontend;

/// Neon prompt prefix for every inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightMagenta));
    inquire::set_global_render_config(config);
}

/// Prints the welcome banner and applies the prompt theme.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui(frontend: &str) {
    banner::print_welcome(frontend);
    apply_theme();
}
