//! Console implementations of the user-facing ports.

mod link_opener;
mod notification;

pub use link_opener::ConsoleLinkOpener;
pub use notification::ConsoleNotifier;
