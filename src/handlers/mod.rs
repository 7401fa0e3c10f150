pub mod about;
pub mod health;
pub mod index;
pub(crate) mod render;

pub use about::about_handler;
pub use health::health_handler;
pub use index::index_handler;
