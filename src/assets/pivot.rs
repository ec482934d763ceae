//! Orbit Pivot Gate
//!
//! The orbit rig can pivot around the root of an externally loaded model.
//! Loading happens elsewhere and finishes at some later frame; until then (or
//! if it never finishes) the pivot is the scene origin.
//!
//! ```rust,ignore
//! let (loader, gate) = PivotGate::pending();
//! std::thread::spawn(move || {
//!     let root = load_model("untitled.gltf");
//!     loader.resolve(root);
//! });
//! let mut app = App::new(params)?.with_pivot(gate);
//! ```

use glam::{Affine3A, Vec3};

use crate::errors::{MeadowError, Result};

/// Sending half held by the external model loader.
#[derive(Debug, Clone)]
pub struct PivotLoader {
    tx: flume::Sender<Affine3A>,
}

impl PivotLoader {
    /// Publishes the loaded model's root transform. Never blocks.
    ///
    /// The first published root wins. Returns `false` if a root is already
    /// waiting to be picked up, or the gate has resolved or been dropped.
    pub fn resolve(&self, root: Affine3A) -> bool {
        self.tx.try_send(root).is_ok()
    }
}

/// Non-blocking view of a pivot that may not be available yet.
#[derive(Debug)]
pub struct PivotGate {
    rx: Option<flume::Receiver<Affine3A>>,
    resolved: Option<Affine3A>,
}

impl PivotGate {
    /// A gate with no loader behind it; stays at the origin.
    #[must_use]
    pub fn unbound() -> Self {
        Self {
            rx: None,
            resolved: None,
        }
    }

    /// A gate that resolves once the returned loader publishes a root transform.
    #[must_use]
    pub fn pending() -> (PivotLoader, Self) {
        let (tx, rx) = flume::bounded(1);
        (
            PivotLoader { tx },
            Self {
                rx: Some(rx),
                resolved: None,
            },
        )
    }

    /// A gate that is already resolved.
    #[must_use]
    pub fn ready(root: Affine3A) -> Self {
        Self {
            rx: None,
            resolved: Some(root),
        }
    }

    /// Picks up a published root transform without blocking.
    ///
    /// Returns `true` on the call that resolves the gate. A loader that is
    /// dropped without resolving detaches the gate permanently.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.rx else {
            return false;
        };
        match rx.try_recv() {
            Ok(root) => {
                self.resolved = Some(root);
                self.rx = None;
                true
            }
            Err(flume::TryRecvError::Empty) => false,
            Err(flume::TryRecvError::Disconnected) => {
                self.rx = None;
                false
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Whether a loader may still resolve this gate.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    /// World position of the pivot.
    pub fn target(&self) -> Result<Vec3> {
        self.resolved
            .map(|root| Vec3::from(root.translation))
            .ok_or(MeadowError::MissingPivotReference)
    }

    /// World position of the pivot, or the origin while unavailable.
    #[must_use]
    pub fn target_or_origin(&self) -> Vec3 {
        self.target().unwrap_or(Vec3::ZERO)
    }
}

impl Default for PivotGate {
    fn default() -> Self {
        Self::unbound()
    }
}
