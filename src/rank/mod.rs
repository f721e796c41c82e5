mod color;
mod presenter;

pub use color::{assign_rank_colors, Rgba};
pub use presenter::{select_top_n, RankError, RankedSubset};
