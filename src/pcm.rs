/// Integer encoding convention for quantized samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signedness {
    /// Two's-complement samples centered on zero.
    Signed,
    /// Offset-binary samples; a zero amplitude sits at the midpoint.
    Unsigned,
}

/// Lower bound applied when clamping a waveform value, before any scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmplitudeFloor {
    /// Clamp to [0, amplitude]; the negative half of the waveform is dropped.
    Zero,
    /// Clamp to [-amplitude, amplitude].
    NegAmplitude,
}

/// How one sample becomes bytes: width, signedness, and the clamp floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub byte_width: u32,
    pub signedness: Signedness,
    pub amplitude_floor: AmplitudeFloor,
}

impl PcmFormat {
    /// Signed 16-bit little-endian with the full bipolar clamp range.
    pub fn signed16() -> Self {
        Self {
            byte_width: 2,
            signedness: Signedness::Signed,
            amplitude_floor: AmplitudeFloor::NegAmplitude,
        }
    }

    /// Unsigned 8-bit with the clamp floor at zero.
    pub fn unsigned8() -> Self {
        Self {
            byte_width: 1,
            signedness: Signedness::Unsigned,
            amplitude_floor: AmplitudeFloor::Zero,
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !(1..=4).contains(&self.byte_width) {
            return Err(anyhow::anyhow!(
                "Unsupported byte width {} (expected 1..=4)",
                self.byte_width
            ));
        }
        Ok(())
    }

    pub fn bits(&self) -> u32 {
        self.byte_width * 8
    }

    /// Largest integer magnitude a quantized sample may take.
    pub fn max_magnitude(&self) -> i64 {
        match self.signedness {
            Signedness::Signed => (1i64 << (self.bits() - 1)) - 1,
            Signedness::Unsigned => (1i64 << self.bits()) - 1,
        }
    }

    /// Clamp floor for a given amplitude ceiling.
    pub fn clamp_floor(&self, amplitude: f32) -> f32 {
        match self.amplitude_floor {
            AmplitudeFloor::Zero => 0.0,
            AmplitudeFloor::NegAmplitude => -amplitude,
        }
    }

    /// Quantize an already-clamped value in [-1, 1], truncating toward zero.
    ///
    /// Signed output is centered on 0; unsigned output is offset-binary over
    /// [0, max_magnitude], so 0.0 lands on the (truncated) midpoint.
    pub fn quantize(&self, clamped: f32) -> i64 {
        let max = self.max_magnitude() as f64;
        let value = clamped as f64;
        match self.signedness {
            Signedness::Signed => (value * max) as i64,
            Signedness::Unsigned => ((value + 1.0) * 0.5 * max) as i64,
        }
    }

    /// Quantized value that represents silence.
    pub fn zero_level(&self) -> i64 {
        self.quantize(0.0)
    }

    /// Append one quantized sample as `byte_width` little-endian bytes.
    pub fn encode_into(&self, quantized: i64, out: &mut Vec<u8>) {
        let bytes = quantized.to_le_bytes();
        out.extend_from_slice(&bytes[..self.byte_width as usize]);
    }

    /// Read one little-endian sample back to the normalized [-1, 1] range.
    pub fn decode(&self, bytes: &[u8]) -> f32 {
        let mut raw = [0u8; 8];
        raw[..self.byte_width as usize].copy_from_slice(&bytes[..self.byte_width as usize]);
        let word = u64::from_le_bytes(raw);
        let max = self.max_magnitude() as f64;
        let value = match self.signedness {
            Signedness::Signed => {
                let shift = 64 - self.bits();
                ((word << shift) as i64 >> shift) as f64 / max
            }
            Signedness::Unsigned => (word as f64 / max) * 2.0 - 1.0,
        };
        value as f32
    }
}
