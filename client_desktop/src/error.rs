use std::fmt;

/// Fatal host errors: anything that stops the window or surface from working
#[derive(Debug)]
pub enum ClientError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(pixels::Error),
    Resize(pixels::TextureError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::EventLoop(e) => write!(f, "Failed to run event loop: {}", e),
            ClientError::Window(e) => write!(f, "Failed to create window: {}", e),
            ClientError::Surface(e) => write!(f, "Failed to render to surface: {}", e),
            ClientError::Resize(e) => write!(f, "Failed to resize surface: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::EventLoop(e) => Some(e),
            ClientError::Window(e) => Some(e),
            ClientError::Surface(e) => Some(e),
            ClientError::Resize(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for ClientError {
    fn from(e: winit::error::EventLoopError) -> Self {
        ClientError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for ClientError {
    fn from(e: winit::error::OsError) -> Self {
        ClientError::Window(e)
    }
}

impl From<pixels::Error> for ClientError {
    fn from(e: pixels::Error) -> Self {
        ClientError::Surface(e)
    }
}

impl From<pixels::TextureError> for ClientError {
    fn from(e: pixels::TextureError) -> Self {
        ClientError::Resize(e)
    }
}
