
pub use fake_conn::*;
pub use fake_peer::*;
