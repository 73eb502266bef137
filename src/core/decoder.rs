// src/core/decoder.rs
//
// Audio decoding module. Uses Symphonia for format-agnostic decoding and
// hands the analysis core a flat mono signal.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use std::fs::File;
use std::path::Path;

use super::dsp::Signal;

/// File extensions accepted when scanning directories
pub const AUDIO_EXTENSIONS: [&str; 8] = ["flac", "wav", "mp3", "ogg", "m4a", "aac", "aiff", "aif"];

/// Container for decoded audio data and metadata
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Interleaved samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of audio channels
    pub channels: usize,
    /// Duration in seconds
    pub duration_secs: f64,
    /// Original codec name
    pub codec_name: String,
}

/// Which channel(s) become the analysed signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelSelect {
    /// Average of all channels
    #[default]
    Mixdown,
    /// A single zero-based channel
    Index(usize),
}

impl AudioData {
    /// Frames per channel
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1)
    }

    /// Build the analysis signal from the selected channel(s)
    pub fn to_signal(&self, select: ChannelSelect) -> Result<Signal> {
        let samples = match select {
            ChannelSelect::Mixdown => extract_mono(self),
            ChannelSelect::Index(channel) => {
                if channel >= self.channels {
                    bail!(
                        "Channel {} requested but file has {} channel(s)",
                        channel,
                        self.channels
                    );
                }
                extract_channel(self, channel)
            }
        };

        Ok(Signal::new(samples, self.sample_rate))
    }
}

/// Decode audio file to floating-point samples
pub fn decode_audio(path: &Path) -> Result<AudioData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(ext.to_str().unwrap_or(""));
    }

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .context("Failed to probe file format - may be corrupted or unsupported")?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("No supported audio track found in file")?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .context("File does not specify sample rate")?;

    let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(2);

    if channels == 0 {
        bail!("File reports 0 audio channels");
    }

    let codec_name = format!("{:?}", track.codec_params.codec);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .context("Failed to create decoder for audio codec")?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    let mut skipped_packets = 0usize;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break
            }
            Err(symphonia::core::errors::Error::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(symphonia::core::errors::Error::DecodeError(_)) => {
                skipped_packets += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            let duration = decoded.capacity() as u64;
            sample_buf = Some(SampleBuffer::new(duration, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if skipped_packets > 0 {
        log::warn!(
            "{}: skipped {} undecodable packet(s)",
            path.display(),
            skipped_packets
        );
    }

    if samples.is_empty() {
        bail!("No audio samples decoded from file");
    }

    let duration_secs = samples.len() as f64 / (sample_rate as f64 * channels as f64);

    log::debug!(
        "Decoded {}: {} Hz, {} channel(s), {:.2}s, codec {}",
        path.display(),
        sample_rate,
        channels,
        duration_secs,
        codec_name
    );

    Ok(AudioData {
        samples,
        sample_rate,
        channels,
        duration_secs,
        codec_name,
    })
}

/// Whether `path` carries one of [`AUDIO_EXTENSIONS`]
pub fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Average all channels into one f64 sequence
pub fn extract_mono(audio: &AudioData) -> Vec<f64> {
    if audio.channels == 1 {
        return audio.samples.iter().map(|&s| s as f64).collect();
    }

    audio
        .samples
        .chunks_exact(audio.channels)
        .map(|frame| frame.iter().map(|&s| s as f64).sum::<f64>() / audio.channels as f64)
        .collect()
}

/// Pull one channel out of the interleaved samples
pub fn extract_channel(audio: &AudioData, channel: usize) -> Vec<f64> {
    audio
        .samples
        .iter()
        .skip(channel)
        .step_by(audio.channels)
        .take(audio.frames())
        .map(|&s| s as f64)
        .collect()
}
