/// Default for [`ParseOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest element nesting accepted before failing with
    /// [`crate::ParseError::NestingTooDeep`].
    ///
    /// The tree builder recurses once per open element, so this bounds its
    /// stack usage on hostile input.
    pub max_depth: usize,
}

impl ParseOptions {
    /// Set the maximum element nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
