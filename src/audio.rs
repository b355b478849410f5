//! Audio dispatch
//!
//! The simulation emits `GameEvent`s; `AudioManager` turns them into
//! fire-and-forget calls on an `AudioSink`. Playback itself (and any failure
//! to find an asset) stays inside the sink.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player jumped
    Jump,
    /// Enemy stomped
    Point,
    /// Run ended
    GameOver,
}

/// Playback backend. Calls must not block.
pub trait AudioSink {
    fn play_sound(&mut self, effect: SoundEffect, volume: f32);
    fn play_background_music(&mut self, volume: f32);
    fn stop_music(&mut self);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {:?} at {:.2}", effect, volume);
    }

    fn play_background_music(&mut self, volume: f32) {
        log::debug!("music on at {:.2}", volume);
    }

    fn stop_music(&mut self) {
        log::debug!("music off");
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    /// Menu music toggle; also gates sound effects
    music_enabled: bool,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    game_over_volume: f32,
    /// Game over sound already played for this run
    game_over_played: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        Self {
            sink,
            music_enabled: settings.music_enabled,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            game_over_volume: settings.game_over_volume.clamp(0.0, 1.0),
            game_over_played: false,
        }
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    #[cfg(test)]
    fn sink(&self) -> &S {
        &self.sink
    }

    /// Effective effect volume
    fn effective_volume(&self) -> f32 {
        self.master_volume * self.sfx_volume
    }

    /// React to one simulation event
    pub fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RunStarted => {
                self.game_over_played = false;
                if self.music_enabled {
                    self.sink
                        .play_background_music(self.master_volume * self.music_volume);
                }
            }
            GameEvent::Jumped => self.play(SoundEffect::Jump, self.effective_volume()),
            GameEvent::EnemyStomped { .. } => {
                self.play(SoundEffect::Point, self.effective_volume())
            }
            GameEvent::GameOver { .. } => {
                if self.music_enabled && !self.game_over_played {
                    self.play(
                        SoundEffect::GameOver,
                        self.effective_volume() * self.game_over_volume,
                    );
                    self.game_over_played = true;
                }
            }
            GameEvent::MusicToggled => {
                self.music_enabled = !self.music_enabled;
                if self.music_enabled {
                    self.sink
                        .play_background_music(self.master_volume * self.music_volume);
                } else {
                    self.sink.stop_music();
                }
                log::info!("Music {}", if self.music_enabled { "on" } else { "off" });
            }
            GameEvent::ReturnedToMenu | GameEvent::QuitRequested => {}
        }
    }

    fn play(&mut self, effect: SoundEffect, volume: f32) {
        if !self.music_enabled || volume <= 0.0 {
            return;
        }
        self.sink.play_sound(effect, volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Sound(SoundEffect, f32),
        Music(f32),
        Stop,
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl AudioSink for Recorder {
        fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push(Call::Sound(effect, volume));
        }
        fn play_background_music(&mut self, volume: f32) {
            self.0.push(Call::Music(volume));
        }
        fn stop_music(&mut self) {
            self.0.push(Call::Stop);
        }
    }

    fn manager() -> AudioManager<Recorder> {
        AudioManager::new(Recorder::default(), &Settings::default())
    }

    #[test]
    fn test_effects_play_when_enabled() {
        let mut audio = manager();
        audio.handle(&GameEvent::Jumped);
        audio.handle(&GameEvent::EnemyStomped { score: 1 });
        assert_eq!(
            audio.sink().0,
            vec![
                Call::Sound(SoundEffect::Jump, 1.0),
                Call::Sound(SoundEffect::Point, 1.0)
            ]
        );
    }

    #[test]
    fn test_game_over_sound_once_per_run() {
        let mut audio = manager();
        audio.handle(&GameEvent::GameOver { score: 3 });
        audio.handle(&GameEvent::GameOver { score: 3 });
        assert_eq!(
            audio.sink().0,
            vec![Call::Sound(SoundEffect::GameOver, 0.5)]
        );

        audio.handle(&GameEvent::RunStarted);
        audio.handle(&GameEvent::GameOver { score: 0 });
        assert_eq!(audio.sink().0.len(), 3);
    }

    #[test]
    fn test_toggle_gates_everything() {
        let mut audio = manager();
        audio.handle(&GameEvent::MusicToggled);
        assert!(!audio.music_enabled());
        audio.handle(&GameEvent::Jumped);
        audio.handle(&GameEvent::RunStarted);
        audio.handle(&GameEvent::GameOver { score: 0 });
        assert_eq!(audio.sink().0, vec![Call::Stop]);

        audio.handle(&GameEvent::MusicToggled);
        assert_eq!(audio.sink().0, vec![Call::Stop, Call::Music(1.0)]);
    }

    #[test]
    fn test_volumes_from_settings() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Settings::default()
        };
        let mut audio = AudioManager::new(Recorder::default(), &settings);
        audio.handle(&GameEvent::Jumped);
        assert_eq!(audio.sink().0, vec![Call::Sound(SoundEffect::Jump, 0.25)]);
    }
}
