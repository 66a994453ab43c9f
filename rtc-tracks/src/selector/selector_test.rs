use super::*;
use crate::track::PendingCreation;

struct Fixture {
    tracks: Vec<Arc<Track>>,
    mic: TrackHandle,
    remote_cam: TrackHandle,
}

fn fixture() -> Fixture {
    let mic = TrackHandle::new("mic");
    let remote_cam = TrackHandle::new("p1-cam");
    let tracks = vec![
        Arc::new(Track::local(MediaType::Audio, mic.clone()).with_participant_id(Some("me".to_owned()))),
        Arc::new(Track::placeholder(MediaType::Video, PendingCreation::new())),
        Arc::new(Track::remote(MediaType::Audio, TrackHandle::new("p1-mic"), "p1".to_owned())),
        Arc::new(
            Track::remote(MediaType::Video, remote_cam.clone(), "p1".to_owned()).with_muted(true),
        ),
        Arc::new(Track::remote(MediaType::Audio, TrackHandle::new("p2-mic"), "p2".to_owned())),
    ];

    Fixture {
        tracks,
        mic,
        remote_cam,
    }
}

#[test]
fn test_local_track() {
    let f = fixture();

    let audio = local_track(&f.tracks, MediaType::Audio, false);
    assert_eq!(audio.and_then(|t| t.handle()), Some(&f.mic));

    assert!(local_track(&f.tracks, MediaType::Video, false).is_none());
    let pending = local_track(&f.tracks, MediaType::Video, true);
    assert!(pending.is_some_and(|t| t.is_pending()));
}

#[test]
fn test_local_and_remote_tracks() {
    let f = fixture();

    assert_eq!(local_tracks(&f.tracks, false).count(), 1);
    assert_eq!(local_tracks(&f.tracks, true).count(), 2);
    assert_eq!(remote_tracks(&f.tracks).count(), 3);
    assert_eq!(pending_tracks(&f.tracks).count(), 1);
}

#[test]
fn test_participant_tracks() {
    let f = fixture();

    assert_eq!(participant_tracks(&f.tracks, "p1").count(), 2);
    assert_eq!(participant_tracks(&f.tracks, "p2").count(), 1);
    assert_eq!(participant_tracks(&f.tracks, "p3").count(), 0);

    let video = participant_track(&f.tracks, "p1", MediaType::Video);
    assert_eq!(video.and_then(|t| t.handle()), Some(&f.remote_cam));
    assert!(participant_track(&f.tracks, "p2", MediaType::Video).is_none());
}

#[test]
fn test_track_by_handle() {
    let f = fixture();

    let track = track_by_handle(&f.tracks, &f.remote_cam);
    assert!(track.is_some_and(|t| t.is_muted()));
    assert!(track_by_handle(&f.tracks, &TrackHandle::new("p1-cam")).is_none());
}

#[test]
fn test_is_local_track_muted() {
    let f = fixture();

    assert!(!is_local_track_muted(&f.tracks, MediaType::Audio));
    // only a placeholder exists for video
    assert!(is_local_track_muted(&f.tracks, MediaType::Video));

    let muted = vec![Arc::new(
        Track::local(MediaType::Audio, f.mic.clone()).with_muted(true),
    )];
    assert!(is_local_track_muted(&muted, MediaType::Audio));
}
