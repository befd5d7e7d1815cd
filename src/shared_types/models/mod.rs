mod graph;
mod pixel;
mod webhook;

pub use graph::*;
pub use pixel::*;
pub use webhook::*;
