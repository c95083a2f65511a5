//! Logo size limits

use serde::Deserialize;

/// Upper bounds for logo images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LogoLimits {
    /// Maximum width and maximum height, in pixels
    #[serde(default = "default_max_edge")]
    pub max_edge: u32,
    /// Maximum file size, in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

impl Default for LogoLimits {
    fn default() -> Self {
        Self {
            max_edge: default_max_edge(),
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_max_edge() -> u32 {
    512
}
fn default_max_bytes() -> u64 {
    100 * 1024
}
