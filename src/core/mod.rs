pub mod config;
pub mod constants;
pub mod error;
pub mod labels;
pub mod layout;
pub mod pointer;
pub mod sphere;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use labels::*;
pub use layout::*;
pub use pointer::*;
pub use sphere::*;
