use serde::{Deserialize, Serialize};

use crate::stroke::Stroke;

/// What happens to undone strokes when a new stroke is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RedoPolicy {
    /// Undone strokes stay available for redo
    #[default]
    Keep,
    /// Committing a stroke forgets everything that was undone
    Discard,
}

/// Committed strokes in draw order, plus the strokes taken off by undo
#[derive(Debug, Clone, Default)]
pub struct Document {
    strokes: Vec<Stroke>,
    redo_stack: Vec<Stroke>,
    redo_policy: RedoPolicy,
}

impl Document {
    pub fn new(redo_policy: RedoPolicy) -> Self {
        Self {
            strokes: Vec::new(),
            redo_stack: Vec::new(),
            redo_policy,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo_stack
    }

    pub fn commit(&mut self, stroke: Stroke) {
        if self.redo_policy == RedoPolicy::Discard {
            self.redo_stack.clear();
        }
        self.strokes.push(stroke);
    }

    /// Move the topmost stroke onto the redo stack
    pub fn undo(&mut self) -> bool {
        match self.strokes.pop() {
            Some(stroke) => {
                self.redo_stack.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone stroke back on top
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(stroke) => {
                self.strokes.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Drop all committed strokes. The redo stack is left as is.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
