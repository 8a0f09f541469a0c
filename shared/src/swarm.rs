use crate::{Entity, Surface, Tick};

/// An ordered, bounded collection of [`Entity`] values.
///
/// Insertion order is kept through pruning, so later entities are always drawn over earlier
/// ones. Emitting past the capacity evicts the oldest entities first.
pub struct Swarm<E> {
    entities: Vec<E>,
    capacity: usize,
}

impl<E: Entity> Swarm<E> {
    pub fn with_capacity(capacity: usize) -> Swarm<E> {
        Swarm {
            entities: Vec::new(),
            capacity,
        }
    }

    pub fn emit(&mut self, entity: E) {
        self.entities.push(entity);

        if self.entities.len() > self.capacity {
            let excess = self.entities.len() - self.capacity;
            self.entities.drain(..excess);
        }
    }

    /// Advances every entity once, then drops the ones that died.
    pub fn step(&mut self, tick: &mut Tick) {
        for entity in self.entities.iter_mut() {
            entity.tick(tick);
        }

        self.entities.retain(Entity::is_alive);
    }

    pub fn draw<S: Surface>(&self, surface: &S) -> Result<(), S::Error> {
        for entity in self.entities.iter() {
            entity.draw(surface)?;
        }

        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<E: Entity> Extend<E> for Swarm<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for entity in iter {
            self.emit(entity);
        }
    }
}
