use std::{cell::RefCell, convert::Infallible, rc::Rc};

use futures::{executor::block_on, stream};
use shared::{
    run, Bounds, Cancellation, Color, FlashPhase, LightTrails, Orb, Point, Random, Settings,
    Surface,
};

/// Counts filled circles, which is all a trail layer draws.
#[derive(Default)]
struct Counter {
    circles: RefCell<usize>,
}

impl Surface for Counter {
    type Error = Infallible;

    fn clear(&self, _: Bounds) {
        *self.circles.borrow_mut() = 0;
    }

    fn set_alpha(&self, _: f64) {}

    fn set_fill(&self, _: &Color) {}

    fn set_stroke(&self, _: &Color, _: f64) {}

    fn set_shadow(&self, _: f64, _: &Color) {}

    fn fill_circle(&self, _: Point, _: f64) -> Result<(), Infallible> {
        *self.circles.borrow_mut() += 1;
        Ok(())
    }

    fn stroke_circle(&self, _: Point, _: f64) -> Result<(), Infallible> {
        Ok(())
    }

    fn stroke_polyline<'a, I>(&self, _: I) -> Result<(), Infallible>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        Ok(())
    }
}

fn trails() -> LightTrails {
    LightTrails::new(Bounds::new(1280.0, 720.0), &Settings::default(), Random::seeded(99))
}

#[test]
fn pointer_moves_between_frames_grow_the_trail() {
    let mut trails = trails();
    let accent = Color::accent("#d4af37");

    for event in 0..10 {
        trails.on_pointer_move(Point(event as f64 * 10.0, 100.0), &accent);
        assert_eq!(trails.particles().len(), 3 * (event + 1));

        trails.step();
    }

    // the oldest batch has lived 10 of its 50 steps
    assert_eq!(trails.particles().len(), 30);
}

#[test]
fn expired_particles_leave_the_trail() {
    let mut trails = trails();
    let accent = Color::default();

    trails.on_pointer_move(Point(0.0, 0.0), &accent);
    for _ in 0..30 {
        trails.step();
    }
    trails.on_pointer_move(Point(0.0, 0.0), &accent);
    assert_eq!(trails.particles().len(), 6);

    for _ in 0..20 {
        trails.step();
    }
    assert_eq!(trails.particles().len(), 3);

    let counter = Counter::default();
    trails.draw(&counter).unwrap();
    assert_eq!(*counter.circles.borrow(), 3);
}

#[test]
fn seven_orb_clicks_burst_once() {
    let mut trails = trails();
    let mut orb = Orb::default();
    let mut flashes = Vec::new();

    for click in 0..7 {
        let outcome = orb.click(Some(&mut trails), Point(640.0, 360.0), click as f64 * 200.0);
        flashes.extend(outcome.flash);
    }

    assert_eq!(orb.image(), 7);
    assert_eq!(trails.fireworks().len(), 8);
    assert_eq!(
        trails
            .fireworks()
            .iter()
            .map(|firework| firework.sparks().len())
            .sum::<usize>(),
        400
    );

    assert_eq!(flashes.len(), 1);
    let flash = flashes[0];
    assert_eq!(flash.phase(1200.0), FlashPhase::Hold);
    assert_eq!(flash.phase(1300.0), FlashPhase::Fading);
    assert_eq!(flash.phase(1200.0 + 50.0 + 1500.0), FlashPhase::Done);
}

#[test]
fn fireworks_burn_out_under_the_loop() {
    let trails = Rc::new(RefCell::new(trails()));
    trails.borrow_mut().burst(Point(640.0, 360.0), 0.0);

    let cancellation = Cancellation::new();
    let steps = {
        let trails = trails.clone();
        let cancellation = cancellation.clone();

        block_on(run(
            stream::iter((0..).map(|frame| frame as f64 * 16.0)),
            cancellation.clone(),
            move |_| {
                let mut trails = trails.borrow_mut();
                trails.step();

                if trails.fireworks().is_empty() {
                    cancellation.cancel();
                }
            },
        ))
    };

    assert_eq!(steps, 94);
    assert!(cancellation.is_cancelled());
}
