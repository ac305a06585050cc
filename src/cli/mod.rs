pub mod args;

mod compile;
mod models;
#[cfg(feature = "http-server")]
mod serve;

pub use compile::handle_compile_command;
pub use models::handle_models_command;
#[cfg(feature = "http-server")]
pub use serve::handle_serve_command;
