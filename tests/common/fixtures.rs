//! Test fixtures and constants.

/// Color lists used across tests
pub mod colors {
    /// One hex and one decimal color
    pub const BLACK_AND_WHITE: &str = "#000000\nrgb(255,255,255)";

    /// Hex, decimal, hex with blank lines between
    pub const MIXED_WITH_BLANKS: &str = "#123\n\n   \n10, 20, 30\n\t\n#abcdef\n";
}

/// `n` distinct hex colors, one per line
pub fn hex_lines(n: usize) -> String {
    (0..n)
        .map(|i| format!("#{:06x}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Form fields for /result
pub fn form<'a>(direction: &'a str, colors: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("J_factor", "1.0"),
        ("M_factor", "1.0"),
        ("direction", direction),
        ("colors", colors),
    ]
}

/// JSON body for /api/translate
pub fn json_body(direction: &str, colors: &str) -> String {
    serde_json::json!({
        "j_factor": 1.0,
        "m_factor": 1.0,
        "direction": direction,
        "colors": colors,
    })
    .to_string()
}
