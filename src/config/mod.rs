use thiserror::Error;

/// Invalid splitter parameters, rejected at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_size must be greater than zero")]
    ZeroMaxSize,
    #[error("overlap ({overlap}) must be smaller than max_size ({max_size})")]
    OverlapTooLarge { overlap: usize, max_size: usize },
}

/// Splitter window parameters, all counted in characters
///
/// Validated once at construction so the split loop never has to detect a
/// stuck cursor: an overlap of at least `max_size` would keep the cursor
/// from advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    max_size: usize,
    overlap: usize,
    boundary_window: usize,
}

impl SplitConfig {
    /// Characters per segment, sized for the generation model's input budget
    pub const DEFAULT_MAX_SIZE: usize = 6000;
    /// Shared context between consecutive segments
    pub const DEFAULT_OVERLAP: usize = 500;
    /// Trailing region of each window scanned for a sentence boundary
    pub const DEFAULT_BOUNDARY_WINDOW: usize = 200;

    pub fn new(max_size: usize, overlap: usize, boundary_window: usize) -> Result<Self, ConfigError> {
        if max_size == 0 {
            return Err(ConfigError::ZeroMaxSize);
        }
        if overlap >= max_size {
            return Err(ConfigError::OverlapTooLarge { overlap, max_size });
        }
        Ok(Self {
            max_size,
            overlap,
            boundary_window,
        })
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    pub fn boundary_window(&self) -> usize {
        self.boundary_window
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_size: Self::DEFAULT_MAX_SIZE,
            overlap: Self::DEFAULT_OVERLAP,
            boundary_window: Self::DEFAULT_BOUNDARY_WINDOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SplitConfig};

    #[test]
    fn accepts_default_parameters() {
        let config = SplitConfig::new(6000, 500, 200).unwrap();
        assert_eq!(config.max_size(), 6000);
        assert_eq!(config.overlap(), 500);
        assert_eq!(config.boundary_window(), 200);
    }

    #[test]
    fn rejects_overlap_equal_to_max_size() {
        let err = SplitConfig::new(500, 500, 200).unwrap_err();
        assert_eq!(
            err,
            ConfigError::OverlapTooLarge {
                overlap: 500,
                max_size: 500
            }
        );
    }

    #[test]
    fn rejects_overlap_greater_than_max_size() {
        assert!(SplitConfig::new(500, 600, 200).is_err());
    }

    #[test]
    fn rejects_zero_max_size() {
        assert_eq!(SplitConfig::new(0, 0, 200).unwrap_err(), ConfigError::ZeroMaxSize);
    }

    #[test]
    fn default_matches_documented_constants() {
        let config = SplitConfig::default();
        assert_eq!(config.max_size(), SplitConfig::DEFAULT_MAX_SIZE);
        assert_eq!(config.overlap(), SplitConfig::DEFAULT_OVERLAP);
        assert_eq!(config.boundary_window(), SplitConfig::DEFAULT_BOUNDARY_WINDOW);
    }
}
