//! Media kinds of a track.

#[cfg(test)]
mod media_type_test;

use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const UNSPECIFIED_STR: &str = "Unspecified";

/// Classification of a track by the kind of media it carries.
///
/// At most one local track per media type may exist in a track collection
/// once creation has resolved.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Media type is not specified (internal use only).
    #[default]
    Unspecified,

    /// Microphone or other audio source.
    Audio,

    /// Camera or screen capture.
    Video,
}

const MEDIA_TYPE_AUDIO_STR: &str = "audio";
const MEDIA_TYPE_VIDEO_STR: &str = "video";

impl From<&str> for MediaType {
    fn from(raw: &str) -> Self {
        match raw {
            MEDIA_TYPE_AUDIO_STR => MediaType::Audio,
            MEDIA_TYPE_VIDEO_STR => MediaType::Video,
            _ => MediaType::Unspecified,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            MediaType::Audio => MEDIA_TYPE_AUDIO_STR,
            MediaType::Video => MEDIA_TYPE_VIDEO_STR,
            MediaType::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}

/// Source of a video track.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    #[default]
    Unspecified,

    /// Video captured from a camera.
    Camera,

    /// Video captured from a screen or window share.
    Desktop,
}

const VIDEO_TYPE_CAMERA_STR: &str = "camera";
const VIDEO_TYPE_DESKTOP_STR: &str = "desktop";

impl From<&str> for VideoType {
    fn from(raw: &str) -> Self {
        match raw {
            VIDEO_TYPE_CAMERA_STR => VideoType::Camera,
            VIDEO_TYPE_DESKTOP_STR => VideoType::Desktop,
            _ => VideoType::Unspecified,
        }
    }
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            VideoType::Camera => VIDEO_TYPE_CAMERA_STR,
            VideoType::Desktop => VIDEO_TYPE_DESKTOP_STR,
            VideoType::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}
