//! Built-in themes

mod tinct;

pub use tinct::TinctTheme;
