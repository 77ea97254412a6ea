//! Startup banner: "TG-SENTIMENT" in figlet's standard font, shaded left to right
//! from the negative colour through neutral to the positive one.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "TG-SENTIMENT";

/// Colour stops: NEGATIVE, NEUTRAL, POSITIVE.
const STOPS: [Color; 3] = [
    Color::Rgb { r: 0xe5, g: 0x48, b: 0x4d },
    Color::Rgb { r: 0xb0, g: 0xb0, b: 0xb0 },
    Color::Rgb { r: 0x46, g: 0xc8, b: 0x6e },
];

/// Colour for column `col` of a `width`-column line. Columns are split evenly
/// between the stops; no blending.
fn column_color(col: usize, width: usize) -> Color {
    if width == 0 {
        return STOPS[0];
    }
    let idx = (col * STOPS.len() / width).min(STOPS.len() - 1);
    STOPS[idx]
}

fn render_title() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|fig| fig.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

/// Prints the banner, the version, and which front-end is about to start.
/// Terminal write errors are ignored.
pub fn print_welcome(frontend: &str) {
    let art = render_title();
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = stdout().lock();
    for line in art.lines() {
        let mut current: Option<Color> = None;
        for (col, ch) in line.chars().enumerate() {
            let color = column_color(col, width);
            if current != Some(color) {
                let _ = queue!(out, SetForegroundColor(color));
                current = Some(color);
            }
            let _ = queue!(out, Print(ch));
        }
        let _ = queue!(out, ResetColor, Print("\r\n"));
    }

    let _ = queue!(
        out,
        SetForegroundColor(STOPS[1]),
        Print(format!(
            "v{} · {} front-end\r\n",
            env!("CARGO_PKG_VERSION"),
            frontend
        )),
        ResetColor
    );
    let _ = out.flush();
}
