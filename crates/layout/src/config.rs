use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Spacing given to stacks created through [`crate::Artboard::stack`].
    ///
    /// Defaults to `0.0`.
    pub default_spacing: f32,
    /// Re-check the one-parent invariant over the whole tree after every
    /// pipeline run and fail the run if it is broken.
    ///
    /// Defaults to `true` in debug builds and `false` in release builds.
    pub verify_tree: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_spacing: 0.0,
            verify_tree: cfg!(debug_assertions),
        }
    }
}
