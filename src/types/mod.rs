pub mod ids;
pub mod payload;
pub mod watermark;

pub use ids::*;
pub use payload::*;
pub use watermark::*;
