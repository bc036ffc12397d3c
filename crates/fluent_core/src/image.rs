//! Named image assets

use std::fmt;

/// Reference to an image in the host's asset catalog
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageAsset {
    pub name: String,
    /// Render as a template tinted by the foreground color
    pub template: bool,
}

impl ImageAsset {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: false,
        }
    }

    pub fn template(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: true,
        }
    }
}

impl fmt::Display for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.template {
            write!(f, "{} (template)", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}
