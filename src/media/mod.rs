//! Media subsystem for podverse
//!
//! Derives playable embed references from a record's `media_url`. The query
//! engine never calls into this module; the playback flow does.

mod embed;
mod errors;

pub use embed::{Embed, EmbedResolver};
pub use errors::{MediaError, MediaResult};
