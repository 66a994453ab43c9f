use crate::media_type::MediaType;
use crate::track::{ParticipantId, Track, TrackHandle, TrackPatch};
use std::sync::Arc;

/// Discrete event that drives track state transitions.
///
/// Events arrive one at a time from the dispatcher, already serialized from
/// their asynchronous sources (signaling, media acquisition, ...).
#[allow(clippy::enum_variant_names)]
#[derive(Debug, Clone, PartialEq)]
pub enum TrackEvent {
    /// A participant changed its identifier mid-session.
    ParticipantIdChanged {
        old_value: ParticipantId,
        new_value: ParticipantId,
    },

    /// Fields of the track owned by the patch handle changed.
    TrackUpdated(TrackPatch),

    /// A track is ready. A local track supersedes every other local track of
    /// its media type.
    TrackAdded(Arc<Track>),

    /// Local media acquisition started; carries the placeholder record.
    TrackBeingCreated(Arc<Track>),

    /// Local media acquisition of `media_type` was canceled.
    TrackCreateCanceled { media_type: MediaType },

    /// Local media acquisition of `media_type` failed.
    TrackCreateError {
        media_type: MediaType,
        permission_denied: bool,
    },

    /// The track owned by the handle went away.
    TrackRemoved(TrackHandle),
}
