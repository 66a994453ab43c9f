
pub mod handle;
pub mod patch;

pub use handle::{PendingCreation, TrackHandle};
pub use patch::TrackPatch;

use crate::media_type::{MediaType, VideoType};
use std::sync::Arc;

pub type ParticipantId = String;

/// Ordered collection of track records, in insertion order.
pub type Tracks = Arc<[Arc<Track>]>;

/// Returns a collection holding no tracks.
pub fn empty_tracks() -> Tracks {
    Arc::from(Vec::new())
}

/// State snapshot of one local or remote media track.
///
/// A record is never mutated once shared. Transitions build a new record
/// through the `with_*` methods or [`TrackPatch::apply_to`].
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Track {
    handle: Option<TrackHandle>,
    pending_creation: Option<PendingCreation>,
    local: bool,
    media_type: MediaType,
    mirror: bool,
    muted: bool,
    participant_id: Option<ParticipantId>,
    video_started: bool,
    video_type: Option<VideoType>,
}

impl Track {
    /// Creates a ready local track.
    pub fn local(media_type: MediaType, handle: TrackHandle) -> Self {
        Self {
            handle: Some(handle),
            local: true,
            media_type,
            ..Default::default()
        }
    }

    /// Creates a ready remote track owned by `participant_id`.
    pub fn remote(media_type: MediaType, handle: TrackHandle, participant_id: ParticipantId) -> Self {
        Self {
            handle: Some(handle),
            local: false,
            media_type,
            participant_id: Some(participant_id),
            ..Default::default()
        }
    }

    /// Creates a local placeholder for a track whose media is still being
    /// acquired.
    pub fn placeholder(media_type: MediaType, pending_creation: PendingCreation) -> Self {
        Self {
            pending_creation: Some(pending_creation),
            local: true,
            media_type,
            ..Default::default()
        }
    }

    pub fn handle(&self) -> Option<&TrackHandle> {
        self.handle.as_ref()
    }

    pub fn pending_creation(&self) -> Option<&PendingCreation> {
        self.pending_creation.as_ref()
    }

    /// Returns true while the media object has not been acquired yet.
    pub fn is_pending(&self) -> bool {
        self.handle.is_none()
    }

    pub fn is_local(&self) -> bool {
        self.local
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn mirror(&self) -> bool {
        self.mirror
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn participant_id(&self) -> Option<&ParticipantId> {
        self.participant_id.as_ref()
    }

    pub fn video_started(&self) -> bool {
        self.video_started
    }

    pub fn video_type(&self) -> Option<VideoType> {
        self.video_type
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn with_participant_id(mut self, participant_id: Option<ParticipantId>) -> Self {
        self.participant_id = participant_id;
        self
    }

    pub fn with_video_started(mut self, video_started: bool) -> Self {
        self.video_started = video_started;
        self
    }

    pub fn with_video_type(mut self, video_type: Option<VideoType>) -> Self {
        self.video_type = video_type;
        self
    }

    /// Returns true if `handle` owns this track.
    pub fn is_owned_by(&self, handle: &TrackHandle) -> bool {
        self.handle.as_ref() == Some(handle)
    }

    /// Returns true for a local track of `media_type`, resolved or pending.
    pub fn is_local_of(&self, media_type: MediaType) -> bool {
        self.local && self.media_type == media_type
    }
}
