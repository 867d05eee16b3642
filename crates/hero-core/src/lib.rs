pub mod constants;
pub mod content;
pub mod error;
pub mod parallax;
pub mod pointer;
pub mod scene;
pub mod spring;
pub mod stage;

pub use error::HeroError;
pub use parallax::*;
pub use pointer::*;
pub use scene::*;
pub use spring::*;
pub use stage::*;
