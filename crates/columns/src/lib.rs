//! Responsive flex sizing for columns blocks.
//!
//! A columns block is configured with one arrangement per breakpoint: an ordered list
//! of size tokens (`1/3`, `75%`, `auto`, `fill`, `full`, `42px`, ...) that repeats
//! across the rendered columns. This crate resolves the token of every column at
//! every breakpoint, reduces it to a fraction where possible and derives the
//! `--columns-<bp>` weight and `--flex-<bp>` shorthand the block stylesheet consumes.
//!
//! ```
//! use columns::{Arrangements, annotate_columns};
//!
//! let arrangements = Arrangements::default().with("xl", ["1/4", "3/4"]);
//! let styles = annotate_columns(&["", "color:red"], &arrangements);
//! assert!(styles[0].starts_with("--columns-xl:1/4;--columns-lg:1/4;"));
//! assert!(styles[1].starts_with("color:red;--columns-xl:3/4;"));
//! ```

#![forbid(unsafe_code)]

pub mod arrangement;
pub mod attributes;
pub mod blocks;
pub mod breakpoint;
pub mod emitter;
pub mod flex;
pub mod size;

pub use arrangement::{Arrangements, ResolvedToken, resolve_column, token_at};
pub use attributes::BlockAttributes;
pub use blocks::{ColumnsBlock, annotate_blocks};
pub use breakpoint::{Breakpoint, Breakpoints, DEFAULT_BREAKPOINTS};
pub use emitter::{ColumnStyle, ResolvedColumn, annotate_columns, emit};
pub use flex::{columns_weight, flex_basis_for, flex_for};
pub use size::{ColumnSize, SizeKeyword, classify};
