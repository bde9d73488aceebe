/// Platform abstraction for audio output.
/// The renderer needs exactly three things from a device: open (each
/// implementation's constructor), a blocking byte write, and close.

/// Trait for platform-specific audio sinks.
pub trait AudioSink {
    /// Write one rendered PCM buffer. Blocks until the device has consumed
    /// the whole buffer; there is no partial-write recovery.
    fn write(&mut self, bytes: &[u8]) -> Result<(), anyhow::Error>;

    /// Flush anything still queued and release the device. Idempotent.
    fn close(&mut self) -> Result<(), anyhow::Error>;
}

// Platform-specific implementations
#[cfg(feature = "native")]
pub mod cpal_output;

#[cfg(feature = "native")]
pub use self::cpal_output::CpalSink;
