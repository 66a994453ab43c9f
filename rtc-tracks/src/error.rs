use thiserror::Error;

use crate::media_type::MediaType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("track store: closed")]
    ErrStoreClosed,
    #[error("track store: event buffer size must be greater than zero")]
    ErrZeroEventBufferSize,
    #[error("track store: more than one local {0} track")]
    ErrDuplicateLocalTrack(MediaType),
}
