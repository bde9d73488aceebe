use crate::gen::waveform::Waveform;
use crate::pcm::PcmFormat;
use crate::platform::AudioSink;

/// Immutable parameters shared by every render on one output stream.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub sample_rate: u32,
    pub format: PcmFormat,
}

impl RenderConfig {
    pub fn new(sample_rate: u32, format: PcmFormat) -> Self {
        Self {
            sample_rate,
            format,
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.sample_rate == 0 {
            return Err(anyhow::anyhow!("Sample rate must be positive"));
        }
        self.format.validate()
    }
}

/// Drives one playback request end-to-end: evaluates the waveform over the
/// sample grid, clamps, quantizes, encodes, and hands the whole buffer to
/// the sink in a single blocking write.
pub struct Renderer<S: AudioSink> {
    config: RenderConfig,
    sink: S,
}

impl<S: AudioSink> Renderer<S> {
    /// An invalid configuration is a programming error and fails here,
    /// before any audio is produced.
    pub fn new(config: RenderConfig, sink: S) -> Result<Self, anyhow::Error> {
        config.validate()?;
        Ok(Self { config, sink })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Compute the quantized byte buffer for one tone without touching the
    /// sink. Amplitude outside [0, 1] is clamped, not rejected.
    pub fn render_buffer(
        &self,
        waveform: Waveform,
        frequency_hz: f32,
        duration_secs: f32,
        amplitude: f32,
    ) -> Result<Vec<u8>, anyhow::Error> {
        if !(duration_secs > 0.0) {
            return Err(anyhow::anyhow!(
                "Duration must be positive, got {}",
                duration_secs
            ));
        }
        let amplitude = amplitude.clamp(0.0, 1.0);
        let format = self.config.format;
        let floor = format.clamp_floor(amplitude);

        // Truncating conversion, not rounding.
        let sample_count = (self.config.sample_rate as f64 * duration_secs as f64) as usize;
        let mut bytes = Vec::with_capacity(sample_count * format.byte_width as usize);
        for i in 0..sample_count {
            let t = i as f32 / self.config.sample_rate as f32;
            let raw = waveform.eval(t, frequency_hz);
            // Clamp strictly before scaling; quantize only ever sees
            // [floor, amplitude].
            let clamped = raw.clamp(floor, amplitude);
            format.encode_into(format.quantize(clamped), &mut bytes);
        }
        Ok(bytes)
    }

    /// Render one tone and write it to the sink. Blocks until the sink has
    /// consumed the buffer; sink failures propagate unchanged, no retry.
    pub fn render(
        &mut self,
        waveform: Waveform,
        frequency_hz: f32,
        duration_secs: f32,
        amplitude: f32,
    ) -> Result<(), anyhow::Error> {
        let bytes = self.render_buffer(waveform, frequency_hz, duration_secs, amplitude)?;
        self.sink.write(&bytes)
    }

    /// Close the underlying sink. Consumes the renderer: the stream is
    /// opened once and closed once.
    pub fn close(mut self) -> Result<(), anyhow::Error> {
        self.sink.close()
    }
}
