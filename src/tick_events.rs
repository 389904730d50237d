//! Maps [`GameEvent`]s to status-bar messages and the terminal bell.
//!
//! This is a binary-only module (not part of `lib.rs`): it plays the role of
//! the audio/HUD collaborator the simulation core reports to.

use lane_runner::runner::GameEvent;
use std::collections::VecDeque;

/// How long a message stays on the status bar.
const MESSAGE_LIFETIME_MS: u64 = 1_500;

/// Messages kept at once; older ones are dropped.
const MAX_MESSAGES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Good,
    Bad,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudMessage {
    pub text: String,
    pub tone: MessageTone,
    pub remaining_ms: u64,
}

/// Short-lived feedback shown under the play field.
#[derive(Debug, Default)]
pub struct Hud {
    messages: VecDeque<HudMessage>,
}

impl Hud {
    pub fn push(&mut self, text: String, tone: MessageTone) {
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(HudMessage {
            text,
            tone,
            remaining_ms: MESSAGE_LIFETIME_MS,
        });
    }

    /// Age messages by `dt_ms` and drop expired ones.
    pub fn update(&mut self, dt_ms: u64) {
        for message in &mut self.messages {
            message.remaining_ms = message.remaining_ms.saturating_sub(dt_ms);
        }
        self.messages.retain(|m| m.remaining_ms > 0);
    }

    /// The newest live message.
    pub fn latest(&self) -> Option<&HudMessage> {
        self.messages.back()
    }

    /// Drop score and crash messages from the previous run.
    pub fn clear_run_messages(&mut self) {
        self.messages.retain(|m| m.tone == MessageTone::Info);
    }
}

/// Apply drained events to the HUD. Returns true if the bell should ring.
pub fn apply_game_events(hud: &mut Hud, events: &[GameEvent], sound_on: bool) -> bool {
    let mut ring = false;
    for event in events {
        match event {
            GameEvent::CoinCollected { score } => {
                hud.push(format!("+1 coin ({})", score), MessageTone::Good);
                ring |= sound_on;
            }
            GameEvent::ObstacleCleared { score } => {
                hud.push(format!("Dodged! ({})", score), MessageTone::Good);
            }
            GameEvent::GameOver {
                score,
                new_record,
                ..
            } => {
                let text = if *new_record {
                    format!("Crashed! New best: {}", score)
                } else {
                    format!("Crashed with {}", score)
                };
                hud.push(text, MessageTone::Bad);
                ring |= sound_on;
            }
            GameEvent::MusicToggled { on } => {
                let text = if *on { "Music on" } else { "Music off" };
                hud.push(text.to_string(), MessageTone::Info);
            }
            GameEvent::Restarted => {
                hud.clear_run_messages();
                hud.push("Go!".to_string(), MessageTone::Info);
            }
        }
    }
    ring
}
