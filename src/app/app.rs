use std::{cell::RefCell, rc::Rc};

use shared::{Bounds, Cancellation, Jukebox, LightTrails, Orb, Pacto, Random, Settings, Water};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent};

use super::{AudioSystem, FlashOverlays, Layer, Popup};
use crate::{
    callbacks::{self, report},
    document,
    frames::spawn_loop,
    listen, now, window,
};

/// Every effect on the page, wired to the DOM.
///
/// Each effect looks for its own anchor elements and quietly stays off when the page lacks them.
pub struct App {
    settings: Settings,
    rng: Random,
    cancellation: Cancellation,
    trails: Option<Rc<RefCell<LightTrails>>>,
}

impl App {
    pub fn new(settings: Settings) -> App {
        let seed = settings
            .seed
            .unwrap_or_else(|| now().to_bits() ^ js_sys::Date::now().to_bits());

        App {
            settings,
            rng: Random::seeded(seed),
            cancellation: Cancellation::new(),
            trails: None,
        }
    }

    pub fn mount(mut self) -> Result<(), JsValue> {
        self.mount_trails()?;
        self.mount_orb()?;
        self.mount_water()?;
        self.mount_pacto()?;
        self.mount_audio()?;
        self.mount_popup()?;
        self.mount_themes()?;
        self.mount_earth()?;

        let cancellation = self.cancellation.clone();
        listen(&window(), "pagehide", move |_: Event| {
            cancellation.cancel();
        })?;

        Ok(())
    }

    fn mount_trails(&mut self) -> Result<(), JsValue> {
        let Some(layer) = Layer::find("cursorTrails")? else {
            console_debug!("no #cursorTrails canvas, skipping light trails");
            return Ok(());
        };

        let layer = Rc::new(layer);
        let trails = Rc::new(RefCell::new(LightTrails::new(
            layer.bounds(),
            &self.settings,
            self.rng.fork(),
        )));

        {
            let trails = trails.clone();
            listen(&document(), "mousemove", move |event: MouseEvent| {
                callbacks::on_trails_mouse_move(&trails, event);
            })?;
        }

        {
            let trails = trails.clone();
            watch_resize(layer.clone(), move |bounds| trails.borrow_mut().resize(bounds))?;
        }

        {
            let trails = trails.clone();
            spawn_loop(self.cancellation.clone(), move |_| {
                let mut trails = trails.borrow_mut();
                trails.step();
                report(trails.draw(&*layer));
            });
        }

        self.trails = Some(trails);

        Ok(())
    }

    fn mount_orb(&mut self) -> Result<(), JsValue> {
        let Some(image) = document().get_element_by_id("orbImage") else {
            console_debug!("no #orbImage, skipping orb");
            return Ok(());
        };

        let image = image.dyn_into::<HtmlImageElement>()?;
        let orb = Rc::new(RefCell::new(Orb::default()));
        let overlays = Rc::new(RefCell::new(FlashOverlays::default()));

        {
            let trails = self.trails.clone();
            let overlays = overlays.clone();

            listen(&image.clone(), "click", move |_: MouseEvent| {
                report(callbacks::on_orb_click(
                    &orb,
                    &image,
                    trails.as_ref(),
                    &overlays,
                ));
            })?;
        }

        spawn_loop(self.cancellation.clone(), move |_| {
            let mut overlays = overlays.borrow_mut();

            if !overlays.is_empty() {
                report(overlays.tick(now()));
            }
        });

        Ok(())
    }

    fn mount_water(&mut self) -> Result<(), JsValue> {
        let (Some(layer), Some(section)) = (
            Layer::find("waterCanvas")?,
            document().get_element_by_id("floodSection"),
        ) else {
            console_debug!("no #waterCanvas or #floodSection, skipping water");
            return Ok(());
        };

        let layer = Rc::new(layer);
        let water = Rc::new(RefCell::new(Water::new(
            layer.bounds(),
            &self.settings,
            self.rng.fork(),
        )));

        for (kind, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let water = water.clone();
            listen(&section, kind, move |_: MouseEvent| {
                water.borrow_mut().set_hovering(hovering);
            })?;
        }

        {
            let water = water.clone();
            listen(&document(), "mousemove", move |event: MouseEvent| {
                callbacks::on_water_mouse_move(&water, event);
            })?;
        }

        {
            let water = water.clone();
            watch_resize(layer.clone(), move |bounds| water.borrow_mut().resize(bounds))?;
        }

        spawn_loop(self.cancellation.clone(), move |timestamp| {
            let mut water = water.borrow_mut();
            water.step();
            report(water.draw(&*layer, timestamp));
        });

        Ok(())
    }

    fn mount_pacto(&mut self) -> Result<(), JsValue> {
        let (Some(layer), Some(section)) = (
            Layer::find("snakeCanvas")?,
            document().query_selector(".pacto-section")?,
        ) else {
            console_debug!("no #snakeCanvas or .pacto-section, skipping snakes");
            return Ok(());
        };

        let layer = Rc::new(layer);
        let pacto = Rc::new(RefCell::new(Pacto::new(layer.bounds(), &self.settings)));

        for (kind, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let pacto = pacto.clone();
            listen(&section, kind, move |_: MouseEvent| {
                pacto.borrow_mut().set_hovering(hovering);
            })?;
        }

        {
            let pacto = pacto.clone();
            listen(&document(), "mousemove", move |event: MouseEvent| {
                callbacks::on_pacto_mouse_move(&pacto, event);
            })?;
        }

        {
            let pacto = pacto.clone();
            watch_resize(layer.clone(), move |bounds| pacto.borrow_mut().resize(bounds))?;
        }

        spawn_loop(self.cancellation.clone(), move |_| {
            let mut pacto = pacto.borrow_mut();
            pacto.step();
            report(pacto.draw(&*layer, &callbacks::accent_color()));
        });

        Ok(())
    }

    fn mount_audio(&mut self) -> Result<(), JsValue> {
        let audio = Rc::new(AudioSystem::find(
            self.settings.ambient_volume,
            self.settings.video_volume,
        ));

        let jukebox = Rc::new(RefCell::new(Jukebox::new(
            audio.ambient().len(),
            self.settings.track_gap_ms,
            self.settings.video_volume,
            self.rng.fork(),
        )));

        if let Some(button) = document().get_element_by_id("musicToggle") {
            let jukebox = jukebox.clone();
            let audio = audio.clone();

            listen(&button.clone(), "click", move |_: MouseEvent| {
                report(callbacks::on_music_toggle(&button, &jukebox, &audio));
            })?;
        }

        if let Some(button) = document().get_element_by_id("soundToggle") {
            let jukebox = jukebox.clone();
            let audio = audio.clone();

            listen(&button.clone(), "click", move |_: MouseEvent| {
                report(callbacks::on_sound_toggle(&button, &jukebox, &audio));
            })?;
        }

        {
            let jukebox = jukebox.clone();
            let audio = audio.clone();

            listen(&document(), "click", move |_: MouseEvent| {
                callbacks::on_first_click(&jukebox, &audio);
            })?;
        }

        for track in audio.ambient() {
            let jukebox = jukebox.clone();
            let audio = audio.clone();

            listen(track, "ended", move |_: Event| {
                report(callbacks::on_track_ended(&jukebox, &audio));
            })?;
        }

        Ok(())
    }

    fn mount_popup(&self) -> Result<(), JsValue> {
        let Some(popup) = Popup::find("infoPopup") else {
            console_debug!("no #infoPopup, skipping popup");
            return Ok(());
        };

        let popup = Rc::new(popup);

        if let Some(button) = document().get_element_by_id("menuBtn") {
            let popup = popup.clone();
            listen(&button, "click", move |_: MouseEvent| report(popup.open()))?;
        }

        if let Some(button) = document().get_element_by_id("closePopup") {
            let popup = popup.clone();
            listen(&button, "click", move |_: MouseEvent| report(popup.close()))?;
        }

        {
            let popup = popup.clone();
            let backdrop: &EventTarget = popup.element();
            let backdrop = backdrop.clone();

            listen(&backdrop.clone(), "click", move |event: MouseEvent| {
                if event.target().as_ref() == Some(&backdrop) {
                    report(popup.close());
                }
            })?;
        }

        listen(&document(), "keydown", move |event: KeyboardEvent| {
            report(callbacks::on_key_down(&popup, event));
        })?;

        Ok(())
    }

    fn mount_themes(&self) -> Result<(), JsValue> {
        let circles = document().query_selector_all(".rotating-circle")?;

        for index in 0..circles.length() {
            let Some(circle) = circles.get(index) else {
                continue;
            };

            let circle = circle.dyn_into::<HtmlElement>()?;

            listen(&circle.clone(), "click", move |_: MouseEvent| {
                callbacks::on_deity_click(&circle);
            })?;
        }

        Ok(())
    }

    fn mount_earth(&self) -> Result<(), JsValue> {
        let (Some(container), Some(earth)) = (
            document().query_selector(".earth-container")?,
            document().get_element_by_id("earthImage"),
        ) else {
            console_debug!("no .earth-container or #earthImage, skipping earth");
            return Ok(());
        };

        let earth = earth.dyn_into::<HtmlElement>()?;
        let period = self.settings.rotation_period_px;

        listen(&window(), "scroll", move |_: Event| {
            report(callbacks::on_scroll(&container, &earth, period));
        })?;

        Ok(())
    }
}

/// Keeps `layer` sized to the window and tells `resize` about every new size.
fn watch_resize<F>(layer: Rc<Layer>, mut resize: F) -> Result<(), JsValue>
where
    F: FnMut(Bounds) + 'static,
{
    listen(&window(), "resize", move |_: Event| match layer.fit_window() {
        Ok(bounds) => resize(bounds),
        Err(error) => report(Err(error)),
    })
}
