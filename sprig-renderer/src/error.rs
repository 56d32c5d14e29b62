use thiserror::Error;

/// Failure while materializing a tree. Rendering stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Element creation was attempted with a missing or invalid node name.
    #[error("invalid node name {name:?}")]
    InvalidNode { name: String },
    /// Any other failure reported by the host document.
    #[error("host operation `{op}` failed: {message}")]
    HostOperation { op: &'static str, message: String },
}

impl RenderError {
    pub fn invalid_node(name: impl Into<String>) -> Self {
        RenderError::InvalidNode { name: name.into() }
    }

    pub fn host(op: &'static str, message: impl Into<String>) -> Self {
        RenderError::HostOperation {
            op,
            message: message.into(),
        }
    }
}
