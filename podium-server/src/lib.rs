mod config;
mod directory;
mod registry;
mod relay;

pub use config::*;
pub use directory::*;
pub use registry::*;
pub use relay::*;

/// Shared handles passed to every connection handler. Constructed once in
/// `main`; nothing in the service reaches for ambient state.
#[derive(Clone)]
pub struct AppState {
    pub relay: RelayService,
    pub directory: PeerDirectory,
}
