use std::{cell::RefCell, rc::Rc};

use shared::{
    dismisses_popup, earth_rotation, in_viewport, Color, Deity, Jukebox, LightTrails, Orb, Pacto,
    Point, Water, ORB_IMAGES,
};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Element, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent};

use crate::{
    app::{AudioSystem, FlashOverlays, Popup},
    document, now, window, IMAGE_BASE_URL,
};

/// Logs a failed handler; there is nothing else to do with it.
pub fn report(result: Result<(), JsValue>) {
    if let Err(error) = result {
        console_log!("handler error: {:?}", error);
    }
}

fn client_point(event: &MouseEvent) -> Point {
    Point(event.client_x() as f64, event.client_y() as f64)
}

/// The page's current `--accent-primary`.
pub fn accent_color() -> Color {
    let value = document()
        .document_element()
        .and_then(|root| window().get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value("--accent-primary").ok())
        .unwrap_or_default();

    Color::accent(&value)
}

pub fn on_trails_mouse_move(trails: &Rc<RefCell<LightTrails>>, event: MouseEvent) {
    trails
        .borrow_mut()
        .on_pointer_move(client_point(&event), &accent_color());
}

pub fn on_water_mouse_move(water: &Rc<RefCell<Water>>, event: MouseEvent) {
    water
        .borrow_mut()
        .on_pointer_move(client_point(&event), now());
}

pub fn on_pacto_mouse_move(pacto: &Rc<RefCell<Pacto>>, event: MouseEvent) {
    pacto.borrow_mut().on_pointer_move(client_point(&event));
}

pub fn on_orb_click(
    orb: &Rc<RefCell<Orb>>,
    image: &HtmlImageElement,
    trails: Option<&Rc<RefCell<LightTrails>>>,
    overlays: &Rc<RefCell<FlashOverlays>>,
) -> Result<(), JsValue> {
    let rect = image.get_bounding_client_rect();
    let center = Point(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    );

    let click = {
        let mut trails = trails.map(|trails| trails.borrow_mut());
        orb.borrow_mut()
            .click(trails.as_deref_mut(), center, now())
    };

    image.set_src(&format!("{IMAGE_BASE_URL}/{}", ORB_IMAGES[click.image]));

    if let Some(flash) = click.flash {
        overlays.borrow_mut().spawn(flash)?;
    }

    Ok(())
}

pub fn on_deity_click(circle: &HtmlElement) {
    let deity = circle
        .dataset()
        .get("deity")
        .and_then(|value| Deity::from_data(&value));

    if let (Some(deity), Some(body)) = (deity, document().body()) {
        body.set_class_name(deity.body_class());
    }
}

pub fn on_scroll(
    container: &Element,
    earth: &HtmlElement,
    period_px: f64,
) -> Result<(), JsValue> {
    let rect = container.get_bounding_client_rect();
    let viewport_height = window().inner_height()?.as_f64().unwrap_or_default();

    if in_viewport(rect.top(), rect.bottom(), viewport_height) {
        let degrees = earth_rotation(window().scroll_y()?, period_px);
        earth
            .style()
            .set_property("transform", &format!("rotateZ({degrees}deg)"))?;
    }

    Ok(())
}

pub fn on_key_down(popup: &Popup, event: KeyboardEvent) -> Result<(), JsValue> {
    if dismisses_popup(&event.key(), popup.is_open()) {
        popup.close()?;
    }

    Ok(())
}

pub fn on_music_toggle(
    button: &Element,
    jukebox: &Rc<RefCell<Jukebox>>,
    audio: &AudioSystem,
) -> Result<(), JsValue> {
    let commands = jukebox.borrow_mut().toggle_music();
    button.class_list().toggle("active")?;
    audio.apply(&commands);

    Ok(())
}

pub fn on_sound_toggle(
    button: &Element,
    jukebox: &Rc<RefCell<Jukebox>>,
    audio: &AudioSystem,
) -> Result<(), JsValue> {
    let commands = jukebox.borrow_mut().toggle_sound();
    button.class_list().toggle("active")?;
    audio.apply(&commands);

    Ok(())
}

pub fn on_first_click(jukebox: &Rc<RefCell<Jukebox>>, audio: &AudioSystem) {
    let commands = jukebox.borrow_mut().on_first_click(audio.any_played());
    audio.apply(&commands);
}

/// Waits out the gap after a track, then lets the [`Jukebox`] pick the next one.
pub fn on_track_ended(
    jukebox: &Rc<RefCell<Jukebox>>,
    audio: &Rc<AudioSystem>,
) -> Result<(), JsValue> {
    let Some(gap_ms) = jukebox.borrow().on_track_ended() else {
        return Ok(());
    };

    let callback = {
        let jukebox = jukebox.clone();
        let audio = audio.clone();

        Closure::once_into_js(move || {
            let commands = jukebox.borrow_mut().on_gap_elapsed();
            audio.apply(&commands);
        })
    };

    window().set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        gap_ms as i32,
    )?;

    Ok(())
}
