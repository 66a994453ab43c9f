
use crate::error::{Error, Result};
use crate::event::TrackEvent;
use crate::media_type::MediaType;
use crate::reducer::reduce_tracks;
use crate::track::{Track, Tracks, empty_tracks};
use log::{debug, trace, warn};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::Instant;

const DEFAULT_EVENT_BUFFER_SIZE: usize = 64;

/// Notification emitted by [`TrackStore`] after a transition.
#[derive(Debug, Clone)]
pub enum TrackStoreEvent {
    /// The collection changed; carries the new snapshot.
    TracksChanged(Tracks),
}

struct TrackStoreSettings {
    event_buffer_size: usize,
    initial_tracks: Vec<Arc<Track>>,
}

impl Default for TrackStoreSettings {
    fn default() -> Self {
        TrackStoreSettings {
            event_buffer_size: DEFAULT_EVENT_BUFFER_SIZE,
            initial_tracks: vec![],
        }
    }
}

#[derive(Default)]
pub struct TrackStoreBuilder {
    settings: TrackStoreSettings,
}

impl TrackStoreBuilder {
    pub fn new() -> Self {
        TrackStoreBuilder {
            settings: TrackStoreSettings::default(),
        }
    }

    /// with_event_buffer_size sets how many change notifications are kept
    /// until polled. The oldest one is dropped when the buffer is full.
    pub fn with_event_buffer_size(mut self, event_buffer_size: usize) -> Self {
        self.settings.event_buffer_size = event_buffer_size;
        self
    }

    /// with_initial_tracks seeds the store, e.g. with tracks restored by the
    /// dispatcher when it takes over an existing session.
    pub fn with_initial_tracks(mut self, tracks: Vec<Arc<Track>>) -> Self {
        self.settings.initial_tracks = tracks;
        self
    }

    pub fn build(self) -> Result<TrackStore> {
        if self.settings.event_buffer_size == 0 {
            return Err(Error::ErrZeroEventBufferSize);
        }

        let mut local_media_types = HashSet::new();
        for track in self.settings.initial_tracks.iter().filter(|t| t.is_local()) {
            if !local_media_types.insert(track.media_type()) {
                return Err(Error::ErrDuplicateLocalTrack(track.media_type()));
            }
        }

        Ok(TrackStore::new(self.settings))
    }
}

/// TrackStore owns the current track collection of a session.
///
/// It is the state container a dispatcher feeds with serialized
/// [`TrackEvent`]s through `handle_event`. Each event that changes the
/// collection queues one [`TrackStoreEvent::TracksChanged`] to be collected
/// with `poll_event`. Concurrent access is invalid.
pub struct TrackStore {
    tracks: Tracks,
    events: VecDeque<TrackStoreEvent>,
    event_buffer_size: usize,
    closed: bool,
}

impl TrackStore {
    fn new(settings: TrackStoreSettings) -> Self {
        let tracks = if settings.initial_tracks.is_empty() {
            empty_tracks()
        } else {
            Tracks::from(settings.initial_tracks)
        };

        Self {
            tracks,
            events: VecDeque::new(),
            event_buffer_size: settings.event_buffer_size,
            closed: false,
        }
    }

    /// Returns the current snapshot.
    pub fn tracks(&self) -> Tracks {
        Arc::clone(&self.tracks)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn log_event(event: &TrackEvent) {
        match event {
            TrackEvent::TrackCreateError {
                media_type,
                permission_denied,
            } => {
                warn!("local {media_type} track creation failed, permission denied: {permission_denied}");
            }
            TrackEvent::TrackCreateCanceled { media_type } => {
                debug!("local {media_type} track creation canceled");
            }
            _ => trace!("track event {event:?}"),
        }
    }

    fn push_event(&mut self, event: TrackStoreEvent) {
        if self.events.len() >= self.event_buffer_size {
            warn!(
                "track store event buffer is full ({}), dropping oldest notification",
                self.event_buffer_size
            );
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn local_media_types(&self) -> Vec<MediaType> {
        self.tracks
            .iter()
            .filter(|t| t.is_local())
            .map(|t| t.media_type())
            .collect()
    }
}

impl sansio::Protocol<(), (), TrackEvent> for TrackStore {
    type Rout = ();
    type Wout = ();
    type Eout = TrackStoreEvent;
    type Error = Error;
    type Time = Instant;

    fn handle_read(&mut self, _msg: ()) -> Result<()> {
        Ok(())
    }

    fn poll_read(&mut self) -> Option<Self::Rout> {
        None
    }

    fn handle_write(&mut self, _msg: ()) -> Result<()> {
        Ok(())
    }

    fn poll_write(&mut self) -> Option<Self::Wout> {
        None
    }

    fn handle_event(&mut self, evt: TrackEvent) -> Result<()> {
        if self.closed {
            return Err(Error::ErrStoreClosed);
        }

        Self::log_event(&evt);

        let tracks = reduce_tracks(&self.tracks, &evt);
        if Arc::ptr_eq(&tracks, &self.tracks) {
            trace!("track event left {} tracks unchanged", tracks.len());
            return Ok(());
        }

        self.tracks = tracks;
        debug!(
            "tracks changed: {} tracks, local {:?}",
            self.tracks.len(),
            self.local_media_types()
        );
        self.push_event(TrackStoreEvent::TracksChanged(Arc::clone(&self.tracks)));

        Ok(())
    }

    fn poll_event(&mut self) -> Option<Self::Eout> {
        self.events.pop_front()
    }

    fn handle_timeout(&mut self, _now: Instant) -> Result<()> {
        Ok(())
    }

    fn poll_timeout(&mut self) -> Option<Instant> {
        None
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(Error::ErrStoreClosed);
        }
        self.closed = true;
        self.events.clear();
        debug!("track store closed with {} tracks", self.tracks.len());

        Ok(())
    }
}
