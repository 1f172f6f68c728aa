// Server module entry
// Provides listener creation, the accept loop, and per-connection serving

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the file name cannot be the module name
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used types
pub use listener::create_reusable_listener;
pub use server_loop::run_accept_loop;
