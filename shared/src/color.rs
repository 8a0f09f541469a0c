use std::fmt;

/// Accent used when the page does not define `--accent-primary`.
pub const DEFAULT_ACCENT: &str = "#d4af37";

/// A colour as handed to the canvas, rendered through [`fmt::Display`] into CSS syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// Any CSS colour string, used verbatim.
    Css(String),
    /// `rgba(r, g, b, a)`.
    Rgba(u8, u8, u8, f64),
    /// `hsl(h, s%, l%)`.
    Hsl(f64, f64, f64),
}

impl Color {
    /// Builds the accent [`Color`] from a computed custom property value, falling back to
    /// [`DEFAULT_ACCENT`] when the property is unset.
    pub fn accent(value: &str) -> Color {
        match value.trim() {
            "" => Color::Css(DEFAULT_ACCENT.to_string()),
            value => Color::Css(value.to_string()),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::accent("")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Css(value) => write!(f, "{value}"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Color::Hsl(h, s, l) => write!(f, "hsl({h}, {s}%, {l}%)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_falls_back_when_unset() {
        assert_eq!(Color::accent("  "), Color::Css("#d4af37".to_string()));
        assert_eq!(Color::accent(" #c0ffee "), Color::Css("#c0ffee".to_string()));
    }

    #[test]
    fn css_syntax() {
        assert_eq!(Color::Rgba(2, 88, 164, 0.3).to_string(), "rgba(2, 88, 164, 0.3)");
        assert_eq!(Color::Hsl(45.0, 100.0, 50.0).to_string(), "hsl(45, 100%, 50%)");
    }
}
