pub mod config;
pub mod error;
pub mod login;
pub mod navigation;
pub mod panic;

pub use config::*;
pub use error::*;
pub use login::*;
pub use navigation::*;
pub use panic::*;
