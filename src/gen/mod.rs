pub mod waveform;

pub use self::waveform::*;
