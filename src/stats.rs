//! Size statistics for an optimization.

/// Fractional size reduction, `(original - compressed) / original`.
///
/// Negative when the output grew; `0.0` for an empty original.
pub fn compression_ratio(original_size: usize, compressed_size: usize) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (original_size as f64 - compressed_size as f64) / original_size as f64
}

/// Byte sizes before and after optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeStats {
    pub original_size: usize,
    pub compressed_size: usize,
}

impl SizeStats {
    pub fn measure(original: &str, compressed: &str) -> Self {
        Self {
            original_size: original.len(),
            compressed_size: compressed.len(),
        }
    }

    pub fn ratio(&self) -> f64 {
        compression_ratio(self.original_size, self.compressed_size)
    }

    /// Bytes saved, zero if the output grew.
    pub fn saved(&self) -> usize {
        self.original_size.saturating_sub(self.compressed_size)
    }
}

impl std::fmt::Display for SizeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} bytes ({:.1}% smaller)",
            self.original_size,
            self.compressed_size,
            self.ratio() * 100.0
        )
    }
}
