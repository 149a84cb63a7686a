//! Annotating many independent columns blocks.
//!
//! Blocks share nothing, so with the `parallel` feature they are processed on the
//! rayon thread pool. Output order always matches input order.

use crate::arrangement::Arrangements;
use crate::emitter::annotate_columns;

/// One columns block: its arrangements and the current `style` attribute of each
/// column, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnsBlock {
    pub arrangements: Arrangements,
    pub column_styles: Vec<String>,
}

impl ColumnsBlock {
    #[inline]
    pub fn new(arrangements: Arrangements, column_styles: Vec<String>) -> Self {
        Self {
            arrangements,
            column_styles,
        }
    }

    /// Revised `style` attribute values for this block's columns.
    #[inline]
    pub fn annotate(&self) -> Vec<String> {
        annotate_columns(&self.column_styles, &self.arrangements)
    }
}

/// Annotate every block; element `i` of the result belongs to `blocks[i]`.
pub fn annotate_blocks(blocks: &[ColumnsBlock]) -> Vec<Vec<String>> {
    log::debug!("annotating {} columns blocks", blocks.len());
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        blocks.par_iter().map(ColumnsBlock::annotate).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        blocks.iter().map(ColumnsBlock::annotate).collect()
    }
}
