#[cfg(feature = "native")]
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Device, FromSample, Sample, SizedSample, Stream, StreamConfig,
};

use super::AudioSink;
use crate::pcm::PcmFormat;
use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// Byte queue shared with the audio callback, plus the condvar `write`
/// waits on until the callback has drained it.
#[cfg(feature = "native")]
struct SinkQueue {
    bytes: Mutex<VecDeque<u8>>,
    drained: Condvar,
}

/// Audio sink backed by the default CPAL output device.
///
/// The device callback pulls mono samples by decoding `byte_width` groups
/// from the shared queue; `write` pushes a whole rendered buffer and blocks
/// until the queue is empty, which gives the renderer the single blocking
/// write it expects.
#[cfg(feature = "native")]
pub struct CpalSink {
    stream: Option<Stream>,
    queue: Arc<SinkQueue>,
    format: PcmFormat,
    sample_rate: u32,
}

#[cfg(feature = "native")]
impl CpalSink {
    /// Open the default output device as a mono stream at `sample_rate`,
    /// expecting buffers encoded with `format`.
    pub fn open(format: PcmFormat, sample_rate: u32) -> Result<Self, anyhow::Error> {
        format.validate()?;
        if sample_rate == 0 {
            return Err(anyhow::anyhow!("Sample rate must be positive"));
        }

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow::anyhow!("Default output device is not available"))?;
        println!("Output device: {}", device.name()?);

        let supported_config = device.default_output_config()?;
        let config = StreamConfig {
            channels: 1,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let queue = Arc::new(SinkQueue {
            bytes: Mutex::new(VecDeque::new()),
            drained: Condvar::new(),
        });

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::I8 => Self::make_stream::<i8>(&device, &config, format, queue.clone())?,
            cpal::SampleFormat::I16 => Self::make_stream::<i16>(&device, &config, format, queue.clone())?,
            cpal::SampleFormat::I32 => Self::make_stream::<i32>(&device, &config, format, queue.clone())?,
            cpal::SampleFormat::I64 => Self::make_stream::<i64>(&device, &config, format, queue.clone())?,
            cpal::SampleFormat::U8 => Self::make_stream::<u8>(&device, &config, format, queue.clone())?,
            cpal::SampleFormat::U16 => Self::make_stream::<u16>(&device, &config, format, queue.clone())?,
            cpal::SampleFormat::U32 => Self::make_stream::<u32>(&device, &config, format, queue.clone())?,
            cpal::SampleFormat::U64 => Self::make_stream::<u64>(&device, &config, format, queue.clone())?,
            cpal::SampleFormat::F32 => Self::make_stream::<f32>(&device, &config, format, queue.clone())?,
            cpal::SampleFormat::F64 => Self::make_stream::<f64>(&device, &config, format, queue.clone())?,
            sample_format => {
                return Err(anyhow::anyhow!("Unsupported sample format '{}'", sample_format))
            }
        };

        stream.play()?;
        println!("Audio stream started at sample rate: {}", sample_rate);

        Ok(Self {
            stream: Some(stream),
            queue,
            format,
            sample_rate,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn format(&self) -> PcmFormat {
        self.format
    }

    /// Create a typed stream for the device's sample format.
    fn make_stream<T>(
        device: &Device,
        config: &StreamConfig,
        format: PcmFormat,
        queue: Arc<SinkQueue>,
    ) -> Result<Stream, anyhow::Error>
    where
        T: SizedSample + FromSample<f32>,
    {
        let width = format.byte_width as usize;
        let err_fn = |err| eprintln!("Error building output sound stream: {}", err);

        let stream = device.build_output_stream(
            config,
            move |output: &mut [T], _: &cpal::OutputCallbackInfo| {
                let mut bytes = queue.bytes.lock().unwrap();
                for sample in output.iter_mut() {
                    *sample = if bytes.len() >= width {
                        let mut group = [0u8; 8];
                        for byte in group.iter_mut().take(width) {
                            *byte = bytes.pop_front().unwrap_or(0);
                        }
                        T::from_sample(format.decode(&group[..width]))
                    } else {
                        T::EQUILIBRIUM
                    };
                }
                if bytes.is_empty() {
                    queue.drained.notify_all();
                }
            },
            err_fn,
            None,
        )?;

        Ok(stream)
    }

    /// Block until the callback has consumed everything queued so far.
    fn wait_for_drain(&self) {
        let mut queued = self.queue.bytes.lock().unwrap();
        while !queued.is_empty() {
            let (guard, _timeout) = self
                .queue
                .drained
                .wait_timeout(queued, Duration::from_millis(100))
                .unwrap();
            queued = guard;
        }
    }
}

#[cfg(feature = "native")]
impl AudioSink for CpalSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), anyhow::Error> {
        if self.stream.is_none() {
            return Err(anyhow::anyhow!("Audio stream already closed"));
        }
        {
            let mut queued = self.queue.bytes.lock().unwrap();
            queued.extend(bytes.iter().copied());
        }
        self.wait_for_drain();
        Ok(())
    }

    fn close(&mut self) -> Result<(), anyhow::Error> {
        if let Some(stream) = self.stream.take() {
            self.wait_for_drain();
            stream.pause()?;
            println!("Audio stream stopped");
        }
        Ok(())
    }
}
