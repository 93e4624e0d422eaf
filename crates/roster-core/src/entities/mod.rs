//! Live entity shapes - provider-backed objects consumed read-only

mod channel;
mod guild;
mod member;

pub use channel::{ChannelKind, LiveChannel};
pub use guild::Guild;
pub use member::LiveMember;
