//! Input plumbing between the front end and the simulation.
//!
//! The front end publishes [`InputEvent`]s on an [`InputHub`]. Each consumer holds a
//! [`Subscription`] with its own queue; dropping the subscription detaches it, so a torn-down
//! session leaves no listener behind. [`route`] turns a raw event into the [`Intent`] a
//! session acts on.

use crate::coordinates::WorldPoint;
use crate::hit::EditEvent;
use crate::pick::{PickHit, PickTarget};
use crate::player::{MoveKey, MovementIntent};
use crate::voxel::VoxelId;
use log::trace;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub point: WorldPoint,
    pub normal: WorldPoint,
    /// Removal modifier (Alt) held during the click.
    pub modifier_held: bool,
    pub target: PickTarget,
}

impl ClickEvent {
    pub fn from_hit(hit: &PickHit, modifier_held: bool) -> Self {
        Self {
            point: hit.point,
            normal: hit.normal,
            modifier_held,
            target: hit.target,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Keyboard code string, e.g. `"KeyW"`.
    KeyDown(String),
    KeyUp(String),
    Click(ClickEvent),
    /// What the pointer is over now; `None` when it is over nothing.
    Hover(Option<PickTarget>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Move(MovementIntent),
    Edit(EditEvent),
    Hover(Option<VoxelId>),
    Ignored,
}

/// Key-downs that are not movement keys are ignored; any key-up releases movement.
pub fn route(event: &InputEvent) -> Intent {
    let intent = match event {
        InputEvent::KeyDown(code) if MoveKey::from_code(code).is_some() => {
            Intent::Move(MovementIntent::Press(code.clone()))
        }
        InputEvent::KeyDown(_) => Intent::Ignored,
        InputEvent::KeyUp(_) => Intent::Move(MovementIntent::Release),
        InputEvent::Click(click) => Intent::Edit(EditEvent {
            point: click.point,
            normal: click.normal,
            remove_mode: click.modifier_held,
        }),
        InputEvent::Hover(target) => Intent::Hover(target.and_then(PickTarget::voxel)),
    };
    trace!("routed {event:?} to {intent:?}");
    intent
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    queues: Vec<(u64, VecDeque<InputEvent>)>,
}

/// Single-threaded fan-out of input events to every live subscription.
#[derive(Debug, Clone, Default)]
pub struct InputHub {
    registry: Rc<RefCell<Registry>>,
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.queues.push((id, VecDeque::new()));
        trace!("input subscription {id} attached");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Queues `event` for every subscription and returns how many received it.
    pub fn publish(&self, event: InputEvent) -> usize {
        let mut registry = self.registry.borrow_mut();
        for (_, queue) in registry.queues.iter_mut() {
            queue.push_back(event.clone());
        }
        registry.queues.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().queues.len()
    }
}

/// Receiving end of an [`InputHub`]. Detaches from the hub when dropped.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Next pending event, oldest first. Always `None` once the hub is gone.
    pub fn poll(&self) -> Option<InputEvent> {
        let registry = self.registry.upgrade()?;
        let mut registry = registry.borrow_mut();
        registry
            .queues
            .iter_mut()
            .find(|(id, _)| *id == self.id)
            .and_then(|(_, queue)| queue.pop_front())
    }

    pub fn drain(&self) -> Vec<InputEvent> {
        std::iter::from_fn(|| self.poll()).collect()
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        registry.borrow_mut().queues.retain(|(id, _)| *id != self.id);
        trace!("input subscription {} detached", self.id);
    }
}
