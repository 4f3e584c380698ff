//! Configuration options for isosurface extraction.

use serde::{Deserialize, Serialize};

use crate::error::{IsogridError, Result};

/// Isovalue used when none is configured.
pub const DEFAULT_ISOVALUE: f32 = 3.2;

/// Per-axis cell bound of the legacy fixed-size sweep.
pub const LEGACY_CELL_LIMIT: [usize; 3] = [49, 49, 49];

/// Options controlling one extraction sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Scalar threshold defining the surface.
    pub isovalue: f32,

    /// Upper bound on the number of cells swept along each axis.
    ///
    /// `None` sweeps every cell. Limits larger than the grid are clamped.
    pub cell_limit: Option<[usize; 3]>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            isovalue: DEFAULT_ISOVALUE,
            cell_limit: None,
        }
    }
}

impl ExtractOptions {
    /// Creates options for the given isovalue with no cell limit.
    #[must_use]
    pub fn new(isovalue: f32) -> Self {
        Self {
            isovalue,
            ..Self::default()
        }
    }

    /// Options matching the legacy 49x49x49 sweep at the default isovalue.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            isovalue: DEFAULT_ISOVALUE,
            cell_limit: Some(LEGACY_CELL_LIMIT),
        }
    }

    /// Sets the isovalue.
    #[must_use]
    pub fn with_isovalue(mut self, isovalue: f32) -> Self {
        self.isovalue = isovalue;
        self
    }

    /// Sets the per-axis cell limit.
    #[must_use]
    pub fn with_cell_limit(mut self, limit: [usize; 3]) -> Self {
        self.cell_limit = Some(limit);
        self
    }

    /// Checks the options before a sweep.
    pub fn validate(&self) -> Result<()> {
        if !self.isovalue.is_finite() {
            return Err(IsogridError::InvalidOption(format!(
                "isovalue must be finite, got {}",
                self.isovalue
            )));
        }
        if let Some(limit) = self.cell_limit {
            if limit.contains(&0) {
                return Err(IsogridError::InvalidOption(format!(
                    "cell limit {limit:?} has an empty axis"
                )));
            }
        }
        Ok(())
    }
}
