//! Read-only queries over a track collection snapshot.

#[cfg(test)]
mod selector_test;

use crate::media_type::MediaType;
use crate::track::{Track, TrackHandle};
use std::sync::Arc;

/// Returns the local track of `media_type`.
///
/// Placeholders of tracks still being created are skipped unless
/// `include_pending` is set.
pub fn local_track(
    tracks: &[Arc<Track>],
    media_type: MediaType,
    include_pending: bool,
) -> Option<&Arc<Track>> {
    local_tracks(tracks, include_pending).find(|track| track.media_type() == media_type)
}

pub fn local_tracks(
    tracks: &[Arc<Track>],
    include_pending: bool,
) -> impl Iterator<Item = &Arc<Track>> {
    tracks
        .iter()
        .filter(move |track| track.is_local() && (include_pending || !track.is_pending()))
}

pub fn remote_tracks(tracks: &[Arc<Track>]) -> impl Iterator<Item = &Arc<Track>> {
    tracks.iter().filter(|track| !track.is_local())
}

/// Returns local placeholders whose media is still being acquired.
pub fn pending_tracks(tracks: &[Arc<Track>]) -> impl Iterator<Item = &Arc<Track>> {
    tracks
        .iter()
        .filter(|track| track.is_local() && track.is_pending())
}

pub fn participant_tracks<'a>(
    tracks: &'a [Arc<Track>],
    participant_id: &'a str,
) -> impl Iterator<Item = &'a Arc<Track>> {
    tracks
        .iter()
        .filter(move |track| track.participant_id().map(String::as_str) == Some(participant_id))
}

pub fn participant_track<'a>(
    tracks: &'a [Arc<Track>],
    participant_id: &'a str,
    media_type: MediaType,
) -> Option<&'a Arc<Track>> {
    participant_tracks(tracks, participant_id).find(|track| track.media_type() == media_type)
}

pub fn track_by_handle<'a>(
    tracks: &'a [Arc<Track>],
    handle: &TrackHandle,
) -> Option<&'a Arc<Track>> {
    tracks.iter().find(|track| track.is_owned_by(handle))
}

/// Returns true when there is no ready local track of `media_type` or when it
/// is muted.
pub fn is_local_track_muted(tracks: &[Arc<Track>], media_type: MediaType) -> bool {
    local_track(tracks, media_type, false).is_none_or(|track| track.is_muted())
}
