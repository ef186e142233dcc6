//! Query subsystem for podverse
//!
//! Defines the `Query` value handed to the executor and the lenient wire
//! form it is built from.
//!
//! # Design Principles
//!
//! - A query is a value: builders and toggles return a new query
//! - Every field defaults to "no restriction"
//! - Resolving a request never fails; unknown labels degrade
//!
//! # Fallbacks
//!
//! | Field     | Unknown value becomes          |
//! |-----------|--------------------------------|
//! | duration  | Any                            |
//! | sort      | Recent (catalog order)         |
//! | subtitles | Unset                          |
//! | topics    | rejected entry, matches nothing |
//! | languages | rejected entry, matches nothing |

mod ast;
mod request;

pub use ast::{DurationBucket, Query, Selection, SortKey, SubtitlesFilter};
pub use request::{Degradation, QueryRequest, ResolvedQuery};
