/* Plays a short demo sequence through the default output device.
Good starting point for integrating the renderer into your application.
*/

#[cfg(feature = "native")]
use tonegen::gen::waveform::Waveform;
#[cfg(feature = "native")]
use tonegen::pcm::PcmFormat;
#[cfg(feature = "native")]
use tonegen::platform::CpalSink;
#[cfg(feature = "native")]
use tonegen::render::{RenderConfig, Renderer};

#[cfg(feature = "native")]
const SAMPLE_RATE: u32 = 48_000;

#[cfg(feature = "native")]
fn main() -> anyhow::Result<()> {
    let format = PcmFormat::signed16();
    let sink = CpalSink::open(format, SAMPLE_RATE)?;
    let mut renderer = Renderer::new(RenderConfig::new(SAMPLE_RATE, format), sink)?;

    // (waveform, frequency Hz, duration s, amplitude), played in order.
    let tones = [
        (Waveform::Sine, 100.0, 1.0, 1.0),
        (Waveform::Triangle, 100.0, 1.0, 1.0),
        (Waveform::Sawtooth, 100.0, 1.0, 1.0),
        (Waveform::Square, 100.0, 1.0, 1.0),
    ];

    for (waveform, frequency_hz, duration_secs, amplitude) in tones {
        println!("Playing {:?} at {} Hz for {}s", waveform, frequency_hz, duration_secs);
        renderer.render(waveform, frequency_hz, duration_secs, amplitude)?;
    }

    renderer.close()
}

#[cfg(not(feature = "native"))]
fn main() {
    println!("This binary is only available with the 'native' feature enabled.");
}
