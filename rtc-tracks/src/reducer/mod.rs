//! Pure transitions of track records and track collections.
//!
//! Both functions are deterministic and never fail. A transition that does
//! not affect its input returns a clone of the very same [`Arc`], so callers
//! detect "no change" with [`Arc::ptr_eq`].


use crate::event::TrackEvent;
use crate::track::{Track, Tracks};
use log::trace;
use std::iter;
use std::sync::Arc;

/// Transitions a single track record.
///
/// Handles participant rebinding and field-merge updates; every other event
/// leaves the record untouched.
///
/// - `ParticipantIdChanged` rebinds the record when its participant id equals
///   the old value, even if the new value is the same.
/// - `TrackUpdated` merges the patch only when the patch handle owns the record
///   and at least one patched field differs.
pub fn reduce_track(track: &Arc<Track>, event: &TrackEvent) -> Arc<Track> {
    match event {
        TrackEvent::ParticipantIdChanged {
            old_value,
            new_value,
        } => {
            if track.participant_id() == Some(old_value) {
                return Arc::new(
                    Track::clone(track).with_participant_id(Some(new_value.clone())),
                );
            }
        }
        TrackEvent::TrackUpdated(patch) => {
            if patch.targets(track) && patch.differs_from(track) {
                return Arc::new(patch.apply_to(track));
            }
        }
        _ => {}
    }

    Arc::clone(track)
}

/// Transitions the whole track collection.
///
/// This is the entry point for every [`TrackEvent`]. Surviving records keep
/// their relative order and new records are appended at the end.
pub fn reduce_tracks(tracks: &Tracks, event: &TrackEvent) -> Tracks {
    match event {
        TrackEvent::ParticipantIdChanged { .. } | TrackEvent::TrackUpdated(_) => {
            map_tracks(tracks, event)
        }
        TrackEvent::TrackAdded(track) => {
            let survivors = if track.is_local() {
                let media_type = track.media_type();
                retain_tracks(tracks, |t| !t.is_local_of(media_type))
            } else {
                Arc::clone(tracks)
            };
            append_track(&survivors, track)
        }
        TrackEvent::TrackBeingCreated(track) => append_track(tracks, track),
        TrackEvent::TrackCreateCanceled { media_type }
        | TrackEvent::TrackCreateError { media_type, .. } => {
            retain_tracks(tracks, |t| !t.is_local_of(*media_type))
        }
        TrackEvent::TrackRemoved(handle) => retain_tracks(tracks, |t| !t.is_owned_by(handle)),
    }
}

fn map_tracks(tracks: &Tracks, event: &TrackEvent) -> Tracks {
    let mut changed = 0;
    let mapped: Vec<Arc<Track>> = tracks
        .iter()
        .map(|track| {
            let next = reduce_track(track, event);
            if !Arc::ptr_eq(&next, track) {
                changed += 1;
            }
            next
        })
        .collect();

    if changed == 0 {
        Arc::clone(tracks)
    } else {
        trace!("{changed} of {} tracks changed", tracks.len());
        Tracks::from(mapped)
    }
}

fn retain_tracks<F>(tracks: &Tracks, keep: F) -> Tracks
where
    F: Fn(&Track) -> bool,
{
    let retained: Vec<Arc<Track>> = tracks
        .iter()
        .filter(|track| keep(track))
        .cloned()
        .collect();

    if retained.len() == tracks.len() {
        Arc::clone(tracks)
    } else {
        trace!("dropped {} of {} tracks", tracks.len() - retained.len(), tracks.len());
        Tracks::from(retained)
    }
}

fn append_track(tracks: &Tracks, track: &Arc<Track>) -> Tracks {
    tracks
        .iter()
        .cloned()
        .chain(iter::once(Arc::clone(track)))
        .collect()
}
