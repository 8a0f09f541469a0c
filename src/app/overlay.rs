use shared::{Flash, FlashPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::document;

struct Overlay {
    flash: Flash,
    element: HtmlElement,
    phase: FlashPhase,
}

/// Full-screen flash overlays currently on the page.
#[derive(Default)]
pub struct FlashOverlays {
    active: Vec<Overlay>,
}

impl FlashOverlays {
    /// Covers the page in white for `flash`.
    pub fn spawn(&mut self, flash: Flash) -> Result<(), JsValue> {
        let element = document()
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;

        let style = element.style();
        for (property, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("background", "rgba(255, 255, 255, 0.8)"),
            ("z-index", "10000"),
            ("pointer-events", "none"),
        ] {
            style.set_property(property, value)?;
        }

        document()
            .body()
            .ok_or("document has no body")?
            .append_child(&element)?;

        self.active.push(Overlay {
            flash,
            element,
            phase: FlashPhase::Hold,
        });

        Ok(())
    }

    /// Starts fades that are due and removes finished overlays.
    pub fn tick(&mut self, now_ms: f64) -> Result<(), JsValue> {
        for overlay in self.active.iter_mut() {
            match overlay.flash.phase(now_ms) {
                FlashPhase::Fading if overlay.phase == FlashPhase::Hold => {
                    let style = overlay.element.style();
                    style.set_property(
                        "transition",
                        &format!("opacity {}s ease-out", overlay.flash.fade_ms() / 1000.0),
                    )?;
                    style.set_property("opacity", "0")?;
                    overlay.phase = FlashPhase::Fading;
                }
                FlashPhase::Done => {
                    overlay.element.remove();
                    overlay.phase = FlashPhase::Done;
                }
                _ => (),
            }
        }

        self.active.retain(|overlay| overlay.phase != FlashPhase::Done);

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// The informational popup, shown while it lacks the `hidden` class.
pub struct Popup {
    element: Element,
}

impl Popup {
    pub fn find(id: &str) -> Option<Popup> {
        document()
            .get_element_by_id(id)
            .map(|element| Popup { element })
    }

    pub fn open(&self) -> Result<(), JsValue> {
        self.element.class_list().remove_1("hidden")
    }

    pub fn close(&self) -> Result<(), JsValue> {
        self.element.class_list().add_1("hidden")
    }

    pub fn is_open(&self) -> bool {
        !self.element.class_list().contains("hidden")
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}
