use shared::{AudioCommand, Jukebox};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

use crate::document;

pub const AMBIENT_IDS: [&str; 3] = ["ambientAudio1", "ambientAudio2", "ambientAudio3"];
pub const VIDEO_ID: &str = "videoAudio";

/// The page's audio elements: looping ambient tracks and the track that goes with the video.
#[derive(Clone, Debug)]
pub struct AudioSystem {
    ambient: Vec<HtmlAudioElement>,
    video: Option<HtmlAudioElement>,
}

impl AudioSystem {
    /// Collects whichever tracks the page has and sets their volumes.
    pub fn find(ambient_volume: f64, video_volume: f64) -> AudioSystem {
        let ambient: Vec<HtmlAudioElement> =
            AMBIENT_IDS.iter().filter_map(|id| find_audio(id)).collect();

        for audio in ambient.iter() {
            audio.set_loop(Jukebox::LOOPS_TRACKS);
            audio.set_volume(ambient_volume);
        }

        let video = find_audio(VIDEO_ID);

        if let Some(video) = &video {
            video.set_volume(video_volume);
        }

        AudioSystem { ambient, video }
    }

    pub fn ambient(&self) -> &[HtmlAudioElement] {
        &self.ambient
    }

    pub fn any_played(&self) -> bool {
        self.ambient.iter().any(|audio| audio.played().length() > 0)
    }

    pub fn apply(&self, commands: &[AudioCommand]) {
        for command in commands {
            match command {
                AudioCommand::PauseAmbient => {
                    for audio in self.ambient.iter() {
                        let _ = audio.pause();
                    }
                }
                AudioCommand::Play(index) => {
                    if let Some(audio) = self.ambient.get(*index) {
                        play(audio);
                    }
                }
                AudioCommand::Restart(index) => {
                    if let Some(audio) = self.ambient.get(*index) {
                        audio.set_current_time(0.0);
                        play(audio);
                    }
                }
                AudioCommand::PauseVideo => {
                    if let Some(video) = &self.video {
                        let _ = video.pause();
                    }
                }
                AudioCommand::SetVideoVolume(volume) => {
                    if let Some(video) = &self.video {
                        video.set_volume(*volume);
                    }
                }
            }
        }
    }
}

fn find_audio(id: &str) -> Option<HtmlAudioElement> {
    document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

/// Starts playback. A rejection (autoplay policy, missing source) is logged and otherwise
/// ignored.
fn play(audio: &HtmlAudioElement) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(error) = JsFuture::from(promise).await {
                console_log!("audio error: {:?}", error);
            }
        }),
        Err(error) => console_log!("audio error: {:?}", error),
    }
}
