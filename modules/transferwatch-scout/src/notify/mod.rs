pub mod backend;
pub mod channel;
pub mod noop;

pub use backend::Notifier;
pub use channel::ChannelNotifier;
pub use noop::NoopNotifier;
