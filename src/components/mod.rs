mod swatch;

pub use swatch::ColorSwatch;
