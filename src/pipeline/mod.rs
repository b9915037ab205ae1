//! Keyword pipeline: extract, filter, rank, and bulk aggregation.
//!
//! The provider's response schema varies, so raw items are normalized
//! by probing several nested field locations in priority order, then
//! filtered against the difficulty ceiling and ordered by volume with
//! difficulty as the tiebreaker.

pub mod bulk;
pub mod extract;
pub mod rank;
pub mod search;
