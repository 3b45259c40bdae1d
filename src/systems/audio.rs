//! Audio bridge systems and the background audio thread.
//!
//! - [`audio_thread`] runs on its own OS thread, owns the audio device and
//!   processes [`AudioCmd`] messages, answering with [`AudioMessage`]s.
//! - [`forward_audio_cmds`] hands the frame's commands to that thread.
//! - [`poll_audio_messages`] drains replies into the ECS message queue.
//!
//! Gameplay code never talks to the device: it writes [`AudioCmd`] messages
//! (usually through the [`SideEffects`](crate::behaviors::gateway::SideEffects)
//! gateway) and the channel delivers them. Sending never blocks.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};

/// Drain any pending replies from the audio thread into the ECS
/// [`Messages<AudioMessage>`] mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Opens the raylib audio device when the `raylib` feature is enabled. If no
/// device is available (or the feature is off) commands are acknowledged and
/// logged without producing sound. Returns after [`AudioCmd::Shutdown`] or
/// when the command channel is closed.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    #[cfg(feature = "raylib")]
    {
        match raylib::core::audio::RaylibAudio::init_audio_device() {
            Ok(audio) => {
                raylib_audio_loop(&audio, &rx_cmd, &tx_msg);
                info!("[audio] thread exiting");
                return;
            }
            Err(e) => log::error!("[audio] no audio device, sounds disabled: {}", e),
        }
    }

    silent_audio_loop(&rx_cmd, &tx_msg);
    info!("[audio] thread exiting");
}

#[cfg(feature = "raylib")]
fn raylib_audio_loop(
    audio: &raylib::core::audio::RaylibAudio,
    rx_cmd: &Receiver<AudioCmd>,
    tx_msg: &Sender<AudioMessage>,
) {
    use raylib::core::audio::Sound;
    use rustc_hash::FxHashMap;

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                Ok(sound) => {
                    debug!("[audio] fx loaded id='{}' path='{}'", id, path);
                    sounds.insert(id.clone(), sound);
                    let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                }
                Err(e) => {
                    log::warn!(
                        "[audio] fx load failed id='{}' path='{}' error='{}'",
                        id,
                        path,
                        e
                    );
                    let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            },
            AudioCmd::PlayFx { id } => {
                if let Some(sound) = sounds.get(&id) {
                    debug!("[audio] fx play id='{}'", id);
                    sound.play();
                } else {
                    debug!("[audio] fx play failed id='{}' reason='not loaded'", id);
                    let _ = tx_msg.send(AudioMessage::FxPlayFailed { id });
                }
            }
            AudioCmd::UnloadFx { id } => {
                if sounds.remove(&id).is_some() {
                    let _ = tx_msg.send(AudioMessage::FxUnloaded { id });
                }
            }
            AudioCmd::UnloadAllFx => {
                sounds.clear();
                let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
            }
            AudioCmd::Shutdown => break,
        }
    }
    // sounds drop here, before the device
}

fn silent_audio_loop(rx_cmd: &Receiver<AudioCmd>, tx_msg: &Sender<AudioMessage>) {
    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadFx { id, path } => {
                debug!("[audio] (silent) fx registered id='{}' path='{}'", id, path);
                let _ = tx_msg.send(AudioMessage::FxLoaded { id });
            }
            AudioCmd::PlayFx { id } => debug!("[audio] (silent) fx play id='{}'", id),
            AudioCmd::UnloadFx { id } => {
                let _ = tx_msg.send(AudioMessage::FxUnloaded { id });
            }
            AudioCmd::UnloadAllFx => {
                let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
            }
            AudioCmd::Shutdown => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_silent_loop_acknowledges_and_stops_on_shutdown() {
        let (tx_cmd, rx_cmd) = unbounded();
        let (tx_msg, rx_msg) = unbounded();
        tx_cmd
            .send(AudioCmd::LoadFx {
                id: "hammer_smash".into(),
                path: "assets/hammer.wav".into(),
            })
            .unwrap();
        tx_cmd
            .send(AudioCmd::PlayFx {
                id: "hammer_smash".into(),
            })
            .unwrap();
        tx_cmd.send(AudioCmd::Shutdown).unwrap();
        tx_cmd.send(AudioCmd::UnloadAllFx).unwrap();

        silent_audio_loop(&rx_cmd, &tx_msg);

        let replies: Vec<AudioMessage> = rx_msg.try_iter().collect();
        assert_eq!(
            replies,
            vec![AudioMessage::FxLoaded {
                id: "hammer_smash".into()
            }]
        );
    }
}
