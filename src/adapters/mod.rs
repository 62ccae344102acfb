// Adapters layer: currency display and CSV batch I/O around the pure core.

pub mod batch;
pub mod currency;
