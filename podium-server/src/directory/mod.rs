mod peer_directory;
mod peer_handler;

pub use peer_directory::*;
pub use peer_handler::*;
