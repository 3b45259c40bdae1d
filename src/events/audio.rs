use bevy_ecs::message::Message;

/// Sound effects gameplay code may request.
///
/// Behaviors refer to sounds only through these identifiers; the mapping to
/// loaded effect ids lives in [`SoundId::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    HammerSmash,
}

impl SoundId {
    pub const ALL: [SoundId; 1] = [SoundId::HammerSmash];

    /// Key under which the effect is loaded on the audio thread.
    pub fn key(self) -> &'static str {
        match self {
            SoundId::HammerSmash => "hammer_smash",
        }
    }
}

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    UnloadFx { id: String },
    UnloadAllFx,
    Shutdown,
}

/// Events sent *back* from the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxUnloaded { id: String },
    FxUnloadedAll,
    FxLoadFailed { id: String, error: String },
    FxPlayFailed { id: String },
}
