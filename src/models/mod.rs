pub mod item;
pub mod outfit;
pub mod wire;

pub use item::*;
pub use outfit::*;
pub use wire::*;
