use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Opaque ownership handle of the media object behind a track.
///
/// The media object itself (capture source, remote stream, ...) belongs to the
/// media pipeline. Handles compare by identity: two handles are equal only if
/// they share the same underlying object.
#[derive(Clone)]
pub struct TrackHandle(Arc<dyn Any + Send + Sync>);

impl TrackHandle {
    pub fn new<T: Any + Send + Sync>(media: T) -> Self {
        Self(Arc::new(media))
    }

    pub fn from_arc<T: Any + Send + Sync>(media: Arc<T>) -> Self {
        Self(media)
    }

    /// Returns the media object if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).downcast_ref::<T>()
    }
}

impl PartialEq for TrackHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for TrackHandle {}

impl fmt::Debug for TrackHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrackHandle({:p})", Arc::as_ptr(&self.0))
    }
}

/// Cancelable handle of a local media acquisition in progress.
///
/// Canceling is done by whoever started the acquisition. The track state only
/// reacts to the `TrackCreateCanceled` event that follows.
#[derive(Default, Clone)]
pub struct PendingCreation {
    canceled: Arc<AtomicBool>,
}

impl PendingCreation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }
}

impl PartialEq for PendingCreation {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.canceled, &other.canceled)
    }
}

impl Eq for PendingCreation {}

impl fmt::Debug for PendingCreation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingCreation")
            .field("id", &Arc::as_ptr(&self.canceled))
            .field("canceled", &self.is_canceled())
            .finish()
    }
}
