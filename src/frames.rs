use std::{cell::RefCell, rc::Rc};

use futures::channel::mpsc::UnboundedReceiver;
use shared::{refreshes, run, Cancellation};
use wasm_bindgen::prelude::*;

use crate::request_animation_frame;

/// Timestamps of every display refresh, as a stream.
///
/// Rescheduling stops once `cancellation` fires or the receiver is dropped; the stream ends
/// at the first refresh after that.
pub fn animation_frames(cancellation: Cancellation) -> UnboundedReceiver<f64> {
    let (mut sender, receiver) = refreshes(cancellation);

    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if !sender.refresh(timestamp) {
            return;
        }

        if let Some(closure) = f.borrow().as_ref() {
            request_animation_frame(closure);
        }
    }));

    if let Some(closure) = g.borrow().as_ref() {
        request_animation_frame(closure);
    }

    receiver
}

/// Runs `step` once per display refresh until `cancellation` fires.
pub fn spawn_loop<F>(cancellation: Cancellation, step: F)
where
    F: FnMut(f64) + 'static,
{
    let refreshes = animation_frames(cancellation.clone());

    wasm_bindgen_futures::spawn_local(async move {
        let steps = run(refreshes, cancellation, step).await;
        console_debug!("animation loop stopped after {steps} frames");
    });
}
