//! Periodic tone generation: waveform functions, PCM quantization, and a
//! blocking audio sink backed by CPAL.

pub mod gen;
pub mod pcm;
pub mod render;

// Platform abstraction layer
pub mod platform;
