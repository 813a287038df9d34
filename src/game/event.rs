//! Event System
//!
//! The controller reports what happened during a tick through typed event
//! queues instead of logging or printing from inside the simulation. The
//! frame loop drains them once per frame.
//!
//! Example flow:
//! 1. Pickup resolution removes a collectible → sends CollectedEvent
//! 2. The last pickup of a level triggers a level-up → sends LevelUpEvent
//! 3. The frame loop drains both and writes them to the log

use macroquad::math::Vec3;

/// A queue for events of a single type.
/// Events are collected during the tick and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all gameplay events.
#[derive(Debug, Default)]
pub struct Events {
    /// A collectible was picked up
    pub collected: EventQueue<CollectedEvent>,

    /// All collectibles of a level were picked up
    pub level_up: EventQueue<LevelUpEvent>,

    /// A move was rejected because it ran into a wall
    pub blocked: EventQueue<BlockedEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectedEvent {
    /// Where the collectible was
    pub position: Vec3,
    /// Score after the pickup
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelUpEvent {
    /// The level just entered
    pub level: u32,
    /// Player speed for the new level
    pub speed: f32,
    /// Collectibles (and walls) spawned for the new level
    pub spawned: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockedEvent {
    /// Position the player stayed at
    pub position: Vec3,
    /// The rejected movement
    pub movement: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();

        events.collected.send(CollectedEvent {
            position: Vec3::ZERO,
            score: 1,
        });
        events.blocked.send(BlockedEvent {
            position: Vec3::ZERO,
            movement: Vec3::new(0.1, 0.0, 0.0),
        });

        assert_eq!(events.collected.len(), 1);
        assert_eq!(events.blocked.len(), 1);
        assert!(events.level_up.is_empty());

        assert_eq!(events.blocked.drain().count(), 1);
        assert!(events.blocked.is_empty());
        assert_eq!(events.collected.len(), 1);
    }
}
