use super::{ParticipantId, Track, TrackHandle};
use crate::media_type::{MediaType, VideoType};

/// Partial track record keyed by ownership handle.
///
/// Only fields set on the patch take part in comparison and merge. Optional
/// record fields take `Some(None)` to clear them.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPatch {
    handle: TrackHandle,
    local: Option<bool>,
    media_type: Option<MediaType>,
    mirror: Option<bool>,
    muted: Option<bool>,
    participant_id: Option<Option<ParticipantId>>,
    video_started: Option<bool>,
    video_type: Option<Option<VideoType>>,
}

impl TrackPatch {
    pub fn new(handle: TrackHandle) -> Self {
        Self {
            handle,
            local: None,
            media_type: None,
            mirror: None,
            muted: None,
            participant_id: None,
            video_started: None,
            video_type: None,
        }
    }

    pub fn handle(&self) -> &TrackHandle {
        &self.handle
    }

    pub fn with_local(mut self, local: bool) -> Self {
        self.local = Some(local);
        self
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = Some(mirror);
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = Some(muted);
        self
    }

    pub fn with_participant_id(mut self, participant_id: Option<ParticipantId>) -> Self {
        self.participant_id = Some(participant_id);
        self
    }

    pub fn with_video_started(mut self, video_started: bool) -> Self {
        self.video_started = Some(video_started);
        self
    }

    pub fn with_video_type(mut self, video_type: Option<VideoType>) -> Self {
        self.video_type = Some(video_type);
        self
    }

    /// Returns true if the patch is keyed by the handle that owns `track`.
    pub fn targets(&self, track: &Track) -> bool {
        track.is_owned_by(&self.handle)
    }

    /// Returns true if any field set on the patch differs from `track`.
    pub fn differs_from(&self, track: &Track) -> bool {
        fn differs<T: PartialEq>(patched: &Option<T>, current: &T) -> bool {
            patched.as_ref().is_some_and(|v| v != current)
        }

        differs(&self.local, &track.local)
            || differs(&self.media_type, &track.media_type)
            || differs(&self.mirror, &track.mirror)
            || differs(&self.muted, &track.muted)
            || differs(&self.participant_id, &track.participant_id)
            || differs(&self.video_started, &track.video_started)
            || differs(&self.video_type, &track.video_type)
    }

    /// Builds a new record with the patch merged over `track`.
    ///
    /// The merge is shallow. Fields not set on the patch keep their value.
    pub fn apply_to(&self, track: &Track) -> Track {
        Track {
            handle: Some(self.handle.clone()),
            pending_creation: track.pending_creation.clone(),
            local: self.local.unwrap_or(track.local),
            media_type: self.media_type.unwrap_or(track.media_type),
            mirror: self.mirror.unwrap_or(track.mirror),
            muted: self.muted.unwrap_or(track.muted),
            participant_id: self
                .participant_id
                .clone()
                .unwrap_or_else(|| track.participant_id.clone()),
            video_started: self.video_started.unwrap_or(track.video_started),
            video_type: self.video_type.unwrap_or(track.video_type),
        }
    }
}
