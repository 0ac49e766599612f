//! Background music: a looping `rodio` track behind a small play/stop trait,
//! and the toggle state that drives it.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::assets;
use crate::error::AudioError;

pub trait Playback {
    /// Starts the track from the beginning.
    fn play(&mut self) -> Result<(), AudioError>;
    fn stop(&mut self);
}

/// A music file played on repeat through the default output device.
pub struct LoopingTrack {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    path: PathBuf,
    volume: f32,
    sink: Option<Sink>,
}

impl LoopingTrack {
    /// Opens the output device and checks that `path` decodes. Nothing plays yet.
    pub fn open(path: &Path, volume: f32) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        decode_looped(path)?;
        Ok(Self {
            _stream: stream,
            handle,
            path: path.to_path_buf(),
            volume,
            sink: None,
        })
    }
}

impl Playback for LoopingTrack {
    fn play(&mut self) -> Result<(), AudioError> {
        self.stop();
        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(self.volume);
        sink.append(decode_looped(&self.path)?);
        sink.play();
        self.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

fn decode_looped(path: &Path) -> Result<rodio::decoder::LoopedDecoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Decoder::new_looped(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Music on/off state plus the button icon that reflects it.
/// Without a track every toggle is a no-op.
pub struct MusicToggle {
    player: Option<Box<dyn Playback>>,
    playing: bool,
    icon: &'static str,
}

impl MusicToggle {
    /// Starts playback right away when a track is available.
    pub fn new(player: Option<Box<dyn Playback>>) -> Self {
        let mut toggle = Self {
            player,
            playing: true,
            icon: assets::AUDIO_ON,
        };
        if let Some(player) = toggle.player.as_mut() {
            if let Err(err) = player.play() {
                log::warn!("music: {err}");
            }
        }
        toggle
    }

    /// Loads the configured track, logging and degrading to a silent toggle on failure.
    pub fn load(path: &Path, volume: f32) -> Self {
        match LoopingTrack::open(path, volume) {
            Ok(track) => Self::new(Some(Box::new(track))),
            Err(err) => {
                log::warn!("music unavailable: {err}");
                Self::new(None)
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.player.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Asset name for the music button.
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn toggle(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        if self.playing {
            player.stop();
            self.icon = assets::AUDIO_OFF;
            self.playing = false;
        } else {
            if let Err(err) = player.play() {
                log::warn!("music: {err}");
            }
            self.icon = assets::AUDIO_ON;
            self.playing = true;
        }
        log::info!("music {}", if self.playing { "on" } else { "off" });
    }
}
