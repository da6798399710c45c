// Every variant states *where* things went wrong.
// Only startup and presenting a frame can fail; scene updates are total.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String),   // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the framebuffer to the window failed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String), // A command-line option is out of range
}
