//! # RTC Tracks - Sans-I/O Media Track State
//!
//! The authoritative in-memory collection of media track records for a
//! real-time communication client: local and remote audio/video tracks, the
//! participants they belong to, and their lifecycle from creation request
//! through ready, mute/unmute, update and removal.
//!
//! State changes are pure transitions of `(previous state, event) -> new state`:
//!
//! - [`reducer::reduce_track`] transitions a single [`Track`] record.
//! - [`reducer::reduce_tracks`] transitions the whole [`Tracks`] collection and
//!   is the entry point for every [`TrackEvent`].
//!
//! Records and collections are shared behind [`Arc`](std::sync::Arc). A
//! transition that changes nothing hands back the very same `Arc`, so
//! consumers detect change with `Arc::ptr_eq` instead of deep comparison.
//!
//! [`TrackStore`] is the state container a dispatcher owns. It implements
//! [`sansio::Protocol`]: events go in through `handle_event`, change
//! notifications come out through `poll_event`.
//!
//! ```
//! use std::sync::Arc;
//! use rtc_tracks::{MediaType, PendingCreation, Track, TrackEvent, TrackHandle};
//! use rtc_tracks::reducer::reduce_tracks;
//! use rtc_tracks::track::empty_tracks;
//!
//! let placeholder = Arc::new(Track::placeholder(MediaType::Audio, PendingCreation::new()));
//! let tracks = reduce_tracks(&empty_tracks(), &TrackEvent::TrackBeingCreated(placeholder));
//! assert_eq!(tracks.len(), 1);
//!
//! let handle = TrackHandle::new("microphone");
//! let audio = Arc::new(Track::local(MediaType::Audio, handle.clone()));
//! let tracks = reduce_tracks(&tracks, &TrackEvent::TrackAdded(Arc::clone(&audio)));
//! assert_eq!(tracks.len(), 1);
//! assert!(Arc::ptr_eq(&tracks[0], &audio));
//!
//! let tracks = reduce_tracks(&tracks, &TrackEvent::TrackRemoved(handle));
//! assert!(tracks.is_empty());
//! ```

#![warn(rust_2018_idioms)]

pub mod error;
pub mod event;
pub mod media_type;
pub mod reducer;
pub mod selector;
pub mod store;
pub mod track;

pub use event::TrackEvent;
pub use media_type::{MediaType, VideoType};
pub use store::{TrackStore, TrackStoreBuilder, TrackStoreEvent};
pub use track::{ParticipantId, PendingCreation, Track, TrackHandle, TrackPatch, Tracks};
