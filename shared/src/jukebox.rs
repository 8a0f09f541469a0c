use crate::Random;

/// Something the page should do to its audio elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    /// Pause every ambient track.
    PauseAmbient,
    /// Play ambient track `n` from wherever it is.
    Play(usize),
    /// Rewind ambient track `n` to the start and play it.
    Restart(usize),
    PauseVideo,
    SetVideoVolume(f64),
}

/// Decides which ambient track plays, and when.
///
/// The [`Jukebox`] owns no audio itself: every transition returns the [`AudioCommand`]s the
/// page should carry out.
#[derive(Debug, Clone)]
pub struct Jukebox {
    tracks: usize,
    current: usize,
    music: bool,
    sound: bool,
    primed: bool,
    track_gap_ms: f64,
    video_volume: f64,
    rng: Random,
}

impl Jukebox {
    /// Whether ambient tracks loop. They must not: a looping track never ends, and the
    /// cross-fade to the next one starts from its `ended` event.
    pub const LOOPS_TRACKS: bool = false;

    pub fn new(tracks: usize, track_gap_ms: f64, video_volume: f64, rng: Random) -> Jukebox {
        Jukebox {
            tracks,
            current: 0,
            music: true,
            sound: true,
            primed: false,
            track_gap_ms,
            video_volume,
            rng,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn music_enabled(&self) -> bool {
        self.music
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound
    }

    /// Flips music. Turning it off silences everything at once; turning it back on waits for
    /// the next track change before anything plays again.
    pub fn toggle_music(&mut self) -> Vec<AudioCommand> {
        self.music = !self.music;

        if self.music {
            Vec::new()
        } else {
            vec![AudioCommand::PauseAmbient, AudioCommand::PauseVideo]
        }
    }

    /// Flips the video track between its volume and silence.
    pub fn toggle_sound(&mut self) -> Vec<AudioCommand> {
        self.sound = !self.sound;

        let volume = if self.sound { self.video_volume } else { 0.0 };
        vec![AudioCommand::SetVideoVolume(volume)]
    }

    /// First click anywhere on the page. Starts the current track if nothing has played yet;
    /// later calls do nothing.
    pub fn on_first_click(&mut self, any_played: bool) -> Vec<AudioCommand> {
        if self.primed {
            return Vec::new();
        }

        self.primed = true;

        if self.music && self.tracks > 0 && !any_played {
            vec![AudioCommand::Play(self.current)]
        } else {
            Vec::new()
        }
    }

    /// A track finished. Returns how long to wait before calling [`Jukebox::on_gap_elapsed`],
    /// or `None` when music is off.
    pub fn on_track_ended(&self) -> Option<f64> {
        self.music.then_some(self.track_gap_ms)
    }

    /// The silence after a track is over: stop everything and, if music is still on, start a
    /// random track from the top.
    pub fn on_gap_elapsed(&mut self) -> Vec<AudioCommand> {
        let mut commands = vec![AudioCommand::PauseAmbient];

        let Some(current) = self.rng.index(self.tracks) else {
            return commands;
        };

        self.current = current;

        if self.music {
            commands.push(AudioCommand::Restart(self.current));
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jukebox() -> Jukebox {
        Jukebox::new(3, 2000.0, 0.5, Random::seeded(5))
    }

    #[test]
    fn first_click_plays_current_once() {
        let mut jukebox = jukebox();

        assert_eq!(jukebox.on_first_click(false), vec![AudioCommand::Play(0)]);
        assert!(jukebox.on_first_click(false).is_empty());
    }

    #[test]
    fn first_click_does_nothing_if_something_played() {
        let mut jukebox = jukebox();

        assert!(jukebox.on_first_click(true).is_empty());
    }

    #[test]
    fn first_click_does_nothing_without_tracks() {
        let mut jukebox = Jukebox::new(0, 2000.0, 0.5, Random::seeded(5));

        assert!(jukebox.on_first_click(false).is_empty());
    }

    #[test]
    fn turning_music_off_pauses_and_on_does_not_resume() {
        let mut jukebox = jukebox();

        assert_eq!(
            jukebox.toggle_music(),
            vec![AudioCommand::PauseAmbient, AudioCommand::PauseVideo]
        );
        assert!(!jukebox.music_enabled());
        assert_eq!(jukebox.on_track_ended(), None);

        assert!(jukebox.toggle_music().is_empty());
        assert_eq!(jukebox.on_track_ended(), Some(2000.0));
    }

    #[test]
    fn gap_restarts_a_random_track() {
        let mut jukebox = jukebox();

        for _ in 0..20 {
            let commands = jukebox.on_gap_elapsed();

            assert_eq!(commands[0], AudioCommand::PauseAmbient);
            assert_eq!(commands[1], AudioCommand::Restart(jukebox.current()));
            assert!(jukebox.current() < 3);
        }
    }

    #[test]
    fn gap_only_pauses_when_music_turned_off_meanwhile() {
        let mut jukebox = jukebox();
        jukebox.toggle_music();

        assert_eq!(jukebox.on_gap_elapsed(), vec![AudioCommand::PauseAmbient]);
    }

    #[test]
    fn gap_without_tracks_only_pauses() {
        let mut jukebox = Jukebox::new(0, 2000.0, 0.5, Random::seeded(5));

        assert_eq!(jukebox.on_gap_elapsed(), vec![AudioCommand::PauseAmbient]);
        assert_eq!(jukebox.current(), 0);
    }

    #[test]
    fn tracks_end_so_the_next_one_can_start() {
        let mut jukebox = jukebox();
        assert!(!Jukebox::LOOPS_TRACKS);

        jukebox.on_first_click(false);
        let gap = jukebox.on_track_ended().unwrap();
        assert_eq!(gap, 2000.0);

        let commands = jukebox.on_gap_elapsed();
        assert_eq!(
            commands,
            vec![AudioCommand::PauseAmbient, AudioCommand::Restart(jukebox.current())]
        );
    }

    #[test]
    fn sound_toggles_video_volume() {
        let mut jukebox = jukebox();

        assert_eq!(jukebox.toggle_sound(), vec![AudioCommand::SetVideoVolume(0.0)]);
        assert_eq!(jukebox.toggle_sound(), vec![AudioCommand::SetVideoVolume(0.5)]);
    }
}
