//! Entity records - immutable snapshots of resolved entities
//!
//! Records stay usable after the live object they were resolved from has
//! gone stale; re-resolution means building a new record.

mod channel;
mod member;

pub use channel::ChannelRecord;
pub use member::MemberRecord;
