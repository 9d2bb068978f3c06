pub mod car;
pub mod chat;
pub mod preferences;

pub use car::*;
pub use chat::*;
pub use preferences::*;
