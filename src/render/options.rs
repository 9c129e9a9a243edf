//! Rendering options and configuration.

use std::path::PathBuf;

/// Options for rendering a manual to LaTeX.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory that relative asset paths are checked against
    pub asset_root: Option<PathBuf>,

    /// Prefix for image paths in output (e.g., "../img/")
    pub image_path_prefix: String,

    /// Figure width as a fraction of `\textwidth`
    pub image_width: f32,

    /// Wrap sections in a complete document (preamble and `\end{document}`)
    pub standalone: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory asset paths are resolved against.
    pub fn with_asset_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(dir.into());
        self
    }

    /// Set the image path prefix.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_path_prefix = prefix.into();
        self
    }

    /// Set the figure width (fraction of text width, clamped to 0.1..=1.0).
    pub fn with_image_width(mut self, width: f32) -> Self {
        self.image_width = if width.is_finite() {
            width.clamp(0.1, 1.0)
        } else {
            DEFAULT_IMAGE_WIDTH
        };
        self
    }

    /// Enable or disable the document preamble.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Emit sections only, for `\input` into a host document.
    pub fn body_only(self) -> Self {
        self.with_standalone(false)
    }
}

const DEFAULT_IMAGE_WIDTH: f32 = 0.8;

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            asset_root: None,
            image_path_prefix: String::new(),
            image_width: DEFAULT_IMAGE_WIDTH,
            standalone: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_asset_root("build/img/stool")
            .with_image_prefix("../img/stool/")
            .with_image_width(0.6)
            .body_only();

        assert_eq!(options.asset_root, Some(PathBuf::from("build/img/stool")));
        assert_eq!(options.image_path_prefix, "../img/stool/");
        assert_eq!(options.image_width, 0.6);
        assert!(!options.standalone);
    }

    #[test]
    fn test_image_width_clamped() {
        assert_eq!(RenderOptions::new().with_image_width(3.0).image_width, 1.0);
        assert_eq!(RenderOptions::new().with_image_width(0.0).image_width, 0.1);
        assert_eq!(
            RenderOptions::new().with_image_width(f32::NAN).image_width,
            DEFAULT_IMAGE_WIDTH
        );
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.standalone);
        assert!(options.asset_root.is_none());
        assert!(options.image_path_prefix.is_empty());
    }
}
