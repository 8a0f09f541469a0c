use crate::{
    blobs, Bounds, Entity, FlowParticle, Point, Random, Ripple, Settings, Surface, Swarm, Tick,
};

/// The flood section's water: drifting specks, ambient blobs and pointer ripples.
pub struct Water {
    ripples: Swarm<Ripple>,
    flows: Vec<FlowParticle>,
    hovering: bool,
    last_ripple_ms: Option<f64>,
    ripple_interval_ms: f64,
    bounds: Bounds,
    rng: Random,
}

impl Water {
    pub fn new(bounds: Bounds, settings: &Settings, mut rng: Random) -> Water {
        let flows = (0..settings.flow_population)
            .map(|_| FlowParticle::scatter(bounds, &mut rng))
            .collect();

        Water {
            ripples: Swarm::with_capacity(settings.ripple_capacity),
            flows,
            hovering: false,
            last_ripple_ms: None,
            ripple_interval_ms: settings.ripple_interval_ms,
            bounds,
            rng,
        }
    }

    /// Pointer entered or left the flood section.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Drops a ripple at `location` if the pointer is over the section and the previous
    /// ripple is old enough. Returns whether one was made.
    pub fn on_pointer_move(&mut self, location: Point, now_ms: f64) -> bool {
        if !self.hovering {
            return false;
        }

        if let Some(last) = self.last_ripple_ms {
            if now_ms - last <= self.ripple_interval_ms {
                return false;
            }
        }

        self.ripples.emit(Ripple::new(location));
        self.last_ripple_ms = Some(now_ms);

        true
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn step(&mut self) {
        let mut tick = Tick::new(self.bounds, &mut self.rng);

        for flow in self.flows.iter_mut() {
            flow.tick(&mut tick);
        }

        self.ripples.step(&mut tick);
    }

    /// Background blobs move with the clock, so drawing needs `now_ms`.
    pub fn draw<S: Surface>(&self, surface: &S, now_ms: f64) -> Result<(), S::Error> {
        surface.clear(self.bounds);

        for blob in blobs(now_ms, self.bounds) {
            blob.draw(surface)?;
        }

        for flow in self.flows.iter() {
            flow.draw(surface)?;
        }

        self.ripples.draw(surface)
    }

    pub fn ripples(&self) -> &Swarm<Ripple> {
        &self.ripples
    }

    pub fn flows(&self) -> &[FlowParticle] {
        &self.flows
    }
}
