use crate::{Carousel, Flash, LightTrails, Point};

/// Result of clicking the orb.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbClick {
    /// Image now shown, as an index into [`crate::ORB_IMAGES`].
    pub image: usize,
    /// Present when the click completed the cycle and set off the burst.
    pub flash: Option<Flash>,
}

/// The clickable orb: cycles its images and sets off fireworks on the last one.
#[derive(Debug, Clone, Default)]
pub struct Orb {
    carousel: Carousel,
}

impl Orb {
    pub fn new(carousel: Carousel) -> Orb {
        Orb { carousel }
    }

    /// Shows the next image. Landing on the last image bursts from `center` into `trails`,
    /// when the page has a trail layer to burst into.
    pub fn click(
        &mut self,
        trails: Option<&mut LightTrails>,
        center: Point,
        now_ms: f64,
    ) -> OrbClick {
        let image = self.carousel.advance();

        let flash = match trails {
            Some(trails) if self.carousel.at_last() => Some(trails.burst(center, now_ms)),
            _ => None,
        };

        OrbClick { image, flash }
    }

    pub fn image(&self) -> usize {
        self.carousel.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bounds, Random, Settings};

    #[test]
    fn burst_only_on_last_image() {
        let mut trails = LightTrails::new(Bounds::default(), &Settings::default(), Random::seeded(1));
        let mut orb = Orb::default();

        for _ in 0..6 {
            assert!(orb.click(Some(&mut trails), Point(0.0, 0.0), 0.0).flash.is_none());
        }
        assert!(trails.fireworks().is_empty());

        let click = orb.click(Some(&mut trails), Point(0.0, 0.0), 500.0);
        assert_eq!(click.image, 7);
        assert!(click.flash.is_some());
        assert_eq!(trails.fireworks().len(), 8);
    }

    #[test]
    fn cycles_without_a_trail_layer() {
        let mut orb = Orb::default();

        for _ in 0..7 {
            assert!(orb.click(None, Point(0.0, 0.0), 0.0).flash.is_none());
        }

        assert_eq!(orb.image(), 7);
        assert_eq!(orb.click(None, Point(0.0, 0.0), 0.0).image, 0);
    }
}
