pub mod candle;
pub mod day_index;
pub mod sample;
pub mod view;

pub use candle::*;
pub use day_index::*;
pub use sample::*;
pub use view::*;
