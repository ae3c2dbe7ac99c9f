pub use {clap::Parser, util::*};

pub mod util;

solutions![d1, d2, d3, d4, d5];
