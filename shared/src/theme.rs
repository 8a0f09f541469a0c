/// The two deities whose circles switch the page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deity {
    /// Sué, the sun.
    Sue,
    /// Chía, the moon.
    Chia,
}

impl Deity {
    /// Reads the value of a `data-deity` attribute.
    pub fn from_data(value: &str) -> Option<Deity> {
        match value {
            "sue" => Some(Deity::Sue),
            "chia" => Some(Deity::Chia),
            _ => None,
        }
    }

    /// The whole class list the body takes on for this [`Deity`].
    pub fn body_class(&self) -> &'static str {
        match self {
            Deity::Sue => "gradient-dark-to-light",
            Deity::Chia => "gradient-light-to-dark chia-theme",
        }
    }
}

/// Rotation of the earth image, in degrees, for a scroll offset: one full turn every
/// `period_px` pixels.
pub fn earth_rotation(scroll_y: f64, period_px: f64) -> f64 {
    (scroll_y % period_px) / period_px * 360.0
}

/// Whether a box spanning `top..bottom` (viewport coordinates) is at least partly on screen.
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Whether pressing `key` closes the info popup: only Escape, and only while it is open.
pub fn dismisses_popup(key: &str, popup_open: bool) -> bool {
    popup_open && key == "Escape"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deity_classes() {
        assert_eq!(Deity::from_data("sue").map(|d| d.body_class()), Some("gradient-dark-to-light"));
        assert_eq!(
            Deity::from_data("chia").map(|d| d.body_class()),
            Some("gradient-light-to-dark chia-theme")
        );
        assert_eq!(Deity::from_data("bochica"), None);
    }

    #[test]
    fn rotation_wraps_every_period() {
        assert_eq!(earth_rotation(0.0, 3000.0), 0.0);
        assert_eq!(earth_rotation(750.0, 3000.0), 90.0);
        assert_eq!(earth_rotation(3750.0, 3000.0), 90.0);
    }

    #[test]
    fn viewport_intersection() {
        assert!(in_viewport(-100.0, 10.0, 800.0));
        assert!(!in_viewport(800.0, 1200.0, 800.0));
        assert!(!in_viewport(-300.0, 0.0, 800.0));
    }

    #[test]
    fn escape_closes_an_open_popup() {
        assert!(dismisses_popup("Escape", true));
        assert!(!dismisses_popup("Escape", false));
        assert!(!dismisses_popup("Enter", true));
        assert!(!dismisses_popup("Esc", true));
    }
}
