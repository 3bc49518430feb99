//! Owning entity pools
//!
//! `GameList` owns its elements outright and recycles storage across
//! frames: one update pass over every live element in insertion order,
//! then a single stable compaction that drops whatever became removable.
//! Growth doubles from an initial capacity of 4 so steady-state frames
//! never reallocate.

use crate::render::Surface;

use super::entity::Entity;

const INITIAL_CAPACITY: usize = 4;

/// Growable owning collection with update-then-compact semantics.
#[derive(Debug)]
pub struct GameList<T> {
    items: Vec<T>,
}

impl<T> GameList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Take ownership of `item`. Amortized O(1); capacity doubles when
    /// full, starting at 4.
    pub fn add(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            let grow = if self.items.capacity() == 0 {
                INITIAL_CAPACITY
            } else {
                self.items.capacity()
            };
            self.items.reserve_exact(grow);
        }
        self.items.push(item);
    }

    /// Destroy all owned elements; capacity is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// In-order traversal of live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: Entity> GameList<T> {
    /// Update every live element in insertion order, then run one stable
    /// in-place compaction pass: removable elements are destroyed and
    /// survivors shifted to the front, preserving relative order. Update
    /// always runs before the removability check for the same frame.
    pub fn update_all(&mut self, dt: f32, scroll_speed: f32) {
        for item in &mut self.items {
            item.update(dt, scroll_speed);
        }

        let mut write = 0;
        for read in 0..self.items.len() {
            if !self.items[read].is_removable() {
                if write != read {
                    self.items.swap(write, read);
                }
                write += 1;
            }
        }
        self.items.truncate(write);
    }

    /// Draw every live element in order; no structural mutation.
    pub fn draw_all(&self, target: &mut dyn Surface) {
        for item in &self.items {
            item.draw(target);
        }
    }
}

impl<T> Default for GameList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a GameList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GameList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::entity::Bounds;

    /// Minimal entity: becomes removable after a configured number of
    /// updates.
    #[derive(Debug)]
    struct Probe {
        tag: u32,
        updates_left: u32,
        updates_seen: u32,
    }

    impl Probe {
        fn new(tag: u32, updates_left: u32) -> Self {
            Self {
                tag,
                updates_left,
                updates_seen: 0,
            }
        }
    }

    impl Entity for Probe {
        fn update(&mut self, _dt: f32, _scroll_speed: f32) {
            self.updates_seen += 1;
            self.updates_left = self.updates_left.saturating_sub(1);
        }

        fn draw(&self, _target: &mut dyn Surface) {}

        fn bounds(&self) -> Bounds {
            Bounds::default()
        }

        fn position(&self) -> Vec2 {
            Vec2::ZERO
        }

        fn set_position(&mut self, _pos: Vec2) {}

        fn is_removable(&self) -> bool {
            self.updates_left == 0
        }
    }

    #[test]
    fn capacity_doubles_from_four() {
        let mut list = GameList::new();
        for i in 0..5 {
            list.add(Probe::new(i, 100));
        }
        assert_eq!(list.capacity(), 8);
        for i in 5..9 {
            list.add(Probe::new(i, 100));
        }
        assert_eq!(list.capacity(), 16);
    }

    #[test]
    fn first_add_allocates_four_slots() {
        let mut list = GameList::new();
        list.add(Probe::new(0, 100));
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn compaction_preserves_survivor_order() {
        let mut list = GameList::new();
        // tags 0..6; odd tags expire on the first update
        for tag in 0..6 {
            let life = if tag % 2 == 1 { 1 } else { 100 };
            list.add(Probe::new(tag, life));
        }

        list.update_all(1.0 / 60.0, 300.0);

        let tags: Vec<u32> = list.iter().map(|p| p.tag).collect();
        assert_eq!(tags, vec![0, 2, 4]);
        assert!(list.iter().all(|p| !p.is_removable()));
    }

    #[test]
    fn update_runs_before_removability_check() {
        let mut list = GameList::new();
        // removable only after its first update; must be gone the same frame
        list.add(Probe::new(0, 1));
        list.update_all(1.0 / 60.0, 300.0);
        assert!(list.is_empty());
    }

    #[test]
    fn every_element_updates_exactly_once_per_frame() {
        let mut list = GameList::new();
        for tag in 0..4 {
            list.add(Probe::new(tag, 100));
        }
        list.update_all(1.0 / 60.0, 300.0);
        assert!(list.iter().all(|p| p.updates_seen == 1));
    }

    #[test]
    fn clear_destroys_everything() {
        let mut list = GameList::new();
        for tag in 0..3 {
            list.add(Probe::new(tag, 100));
        }
        list.clear();
        assert!(list.is_empty());
    }
}
