//! Outbound communication channel (Slack incoming webhook).
//!
//! One destination, one wire shape: the forwarder hands a message to the
//! channel and gets the raw HTTP outcome back for its delivery report.

mod outbound;
mod slack;

pub use outbound::OutboundMessage;
pub use slack::{ChannelError, Delivery, SlackChannel};
