//! Click event queue backends.

mod channel_queue;

pub use channel_queue::ChannelClickQueue;
