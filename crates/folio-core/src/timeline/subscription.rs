//! Host scroll/resize event surface and listener subscriptions
//!
//! The host (terminal app, test harness) owns a [`HostSurface`] and emits
//! scroll, resize and layout events into it. Each controller holds a
//! [`Subscription`] for the lifetime of its view. Disposing the
//! subscription removes exactly the listener it registered, once.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

use super::progress::ScrollSample;

/// Event kinds a listener can register for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    Scroll,
    Resize,
    /// Page content moved without the viewport changing size
    Layout,
}

/// Event emitted by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Scroll(ScrollSample),
    Resize(ScrollSample),
    Layout(ScrollSample),
}

impl HostEvent {
    pub fn kind(&self) -> HostEventKind {
        match self {
            HostEvent::Scroll(_) => HostEventKind::Scroll,
            HostEvent::Resize(_) => HostEventKind::Resize,
            HostEvent::Layout(_) => HostEventKind::Layout,
        }
    }

    pub fn sample(&self) -> ScrollSample {
        match self {
            HostEvent::Scroll(sample) | HostEvent::Resize(sample) | HostEvent::Layout(sample) => {
                *sample
            }
        }
    }
}

struct Listener {
    id: u64,
    kinds: Vec<HostEventKind>,
    tx: mpsc::UnboundedSender<HostEvent>,
}

#[derive(Default)]
struct SurfaceInner {
    next_id: u64,
    listeners: Vec<Listener>,
    registered: u64,
    removed: u64,
}

/// Shared registry of host event listeners
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct HostSurface {
    inner: Arc<Mutex<SurfaceInner>>,
}

impl HostSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for the given event kinds
    pub fn subscribe(&self, kinds: &[HostEventKind]) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.registered += 1;
        inner.listeners.push(Listener {
            id,
            kinds: kinds.to_vec(),
            tx,
        });
        debug!(listener = id, ?kinds, "Host listener registered");

        Subscription {
            id,
            surface: self.clone(),
            rx,
            disposed: false,
        }
    }

    /// Deliver an event to every listener registered for its kind
    ///
    /// Returns the number of listeners that received it.
    pub fn emit(&self, event: HostEvent) -> usize {
        let kind = event.kind();
        let mut inner = self.inner.lock();
        let mut delivered = 0;
        let mut dead = 0;
        inner.listeners.retain(|listener| {
            if !listener.kinds.contains(&kind) {
                return true;
            }
            if listener.tx.send(event).is_ok() {
                delivered += 1;
                true
            } else {
                dead += 1;
                false
            }
        });
        inner.removed += dead;
        delivered
    }

    /// Listeners currently registered
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    /// Total registrations and removals since the surface was created
    pub fn lifetime_counts(&self) -> (u64, u64) {
        let inner = self.inner.lock();
        (inner.registered, inner.removed)
    }

    fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.listeners.len();
        inner.listeners.retain(|l| l.id != id);
        let removed = inner.listeners.len() != before;
        if removed {
            inner.removed += 1;
        }
        removed
    }
}

/// A registered listener owned by one view
pub struct Subscription {
    id: u64,
    surface: HostSurface,
    rx: mpsc::UnboundedReceiver<HostEvent>,
    disposed: bool,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Take every event delivered since the last drain
    pub fn drain(&mut self) -> Vec<HostEvent> {
        let mut events = Vec::new();
        if self.disposed {
            return events;
        }
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Remove the listener from the surface; later calls do nothing
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.rx.close();
        if self.surface.remove(self.id) {
            debug!(listener = self.id, "Host listener removed");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("disposed", &self.disposed)
            .finish()
    }
}
