use std::collections::BTreeMap;

use egui::{Event, LayerId, PointerButton, Pos2, Rect, TouchPhase};
use serde::{Deserialize, Serialize};

mod detector;
mod gestures;

pub use detector::{DetectorFrame, DragPhase, GestureDetector, TransformDelta};
pub use gestures::{GestureConfig, GestureInterpreter, GestureOutcome, PointerChange};

/// Contact id used for the mouse, which never collides with touch ids
/// handed out by the platform in practice.
pub const MOUSE_CONTACT_ID: u64 = u64::MAX;

/// Which of the two input pipelines drives the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Raw touch/pointer events, disambiguated by [`GestureInterpreter`]
    #[default]
    Pointer,
    /// egui's drag and pinch callbacks, applied by [`GestureDetector`]
    Detector,
}

impl InputMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pointer => "Pointer events",
            Self::Detector => "Gesture detector",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Contact {
    position: Pos2,
    pressed: bool,
}

/// Tracks touch contacts across frames and turns egui's raw events into
/// [`PointerChange`] frames.
///
/// Positions are reported relative to the canvas rectangle. Touches that
/// start outside the canvas are ignored. Mouse input is treated as one more
/// contact but is dropped while touches are active, since egui synthesizes
/// mouse events from the first touch.
#[derive(Debug, Default)]
pub struct PointerTracker {
    contacts: BTreeMap<u64, Contact>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts currently held down
    pub fn active_contacts(&self) -> usize {
        self.contacts.values().filter(|contact| contact.pressed).count()
    }

    /// Read this frame's raw events from egui.
    ///
    /// New contacts only start where the canvas `layer` is the topmost layer,
    /// so popups drawn over the canvas keep their input.
    pub fn collect(
        &mut self,
        ctx: &egui::Context,
        rect: Rect,
        layer: LayerId,
    ) -> Vec<PointerChange> {
        let events = ctx.input(|input| input.raw.events.clone());
        self.process_events_where(&events, rect, |pos| {
            ctx.layer_id_at(pos).is_none_or(|top| top == layer)
        })
    }

    /// Apply a batch of events and return the resulting frame, which is empty
    /// when nothing on the canvas changed.
    pub fn process_events(&mut self, events: &[Event], rect: Rect) -> Vec<PointerChange> {
        self.process_events_where(events, rect, |_| true)
    }

    /// Like [`Self::process_events`], but a contact only starts where
    /// `accepts_start` allows it
    pub fn process_events_where(
        &mut self,
        events: &[Event],
        rect: Rect,
        accepts_start: impl Fn(Pos2) -> bool,
    ) -> Vec<PointerChange> {
        let previous: BTreeMap<u64, Pos2> = self
            .contacts
            .iter()
            .map(|(id, contact)| (*id, contact.position))
            .collect();

        let saw_touch = events.iter().any(|event| matches!(event, Event::Touch { .. }));
        let mut changed = false;

        for event in events {
            match event {
                Event::Touch { id, phase, pos, .. } => {
                    changed |= self.apply_touch(id.0, *phase, *pos, rect, &accepts_start);
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } if !saw_touch && !self.has_touches() => {
                    let phase = if *pressed {
                        TouchPhase::Start
                    } else {
                        TouchPhase::End
                    };
                    changed |= self.apply_touch(MOUSE_CONTACT_ID, phase, *pos, rect, &accepts_start);
                }
                Event::PointerMoved(pos) if !saw_touch && !self.has_touches() => {
                    changed |= self.apply_touch(
                        MOUSE_CONTACT_ID,
                        TouchPhase::Move,
                        *pos,
                        rect,
                        &accepts_start,
                    );
                }
                Event::PointerGone if !saw_touch => {
                    if let Some(contact) = self.contacts.get_mut(&MOUSE_CONTACT_ID) {
                        contact.pressed = false;
                        changed = true;
                    }
                }
                _ => {}
            }
        }

        if !changed {
            return Vec::new();
        }

        let frame = self
            .contacts
            .iter()
            .map(|(id, contact)| PointerChange {
                id: *id,
                position: contact.position,
                previous_position: previous.get(id).copied().unwrap_or(contact.position),
                pressed: contact.pressed,
            })
            .collect();

        self.contacts.retain(|_, contact| contact.pressed);
        frame
    }

    fn has_touches(&self) -> bool {
        self.contacts.keys().any(|id| *id != MOUSE_CONTACT_ID)
    }

    fn apply_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        pos: Pos2,
        rect: Rect,
        accepts_start: &impl Fn(Pos2) -> bool,
    ) -> bool {
        let local = (pos - rect.min).to_pos2();
        match phase {
            TouchPhase::Start => {
                if !rect.contains(pos) || !accepts_start(pos) {
                    return false;
                }
                self.contacts.insert(
                    id,
                    Contact {
                        position: local,
                        pressed: true,
                    },
                );
                true
            }
            TouchPhase::Move => match self.contacts.get_mut(&id) {
                Some(contact) if contact.pressed && contact.position != local => {
                    contact.position = local;
                    true
                }
                _ => false,
            },
            TouchPhase::End | TouchPhase::Cancel => match self.contacts.get_mut(&id) {
                Some(contact) => {
                    contact.position = local;
                    contact.pressed = false;
                    true
                }
                None => false,
            },
        }
    }
}
