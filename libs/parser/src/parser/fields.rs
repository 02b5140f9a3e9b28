//! Field updates applied to the open topic.

use crate::lexer::{Field, FieldKind};
use crate::model::Topic;

impl Topic {
    /// Store a field line's value.
    ///
    /// The core field is split on the first `sentence_end`: the text before
    /// it is the label, the text after it the description. Without the mark
    /// (or with nothing after it) both get the same text until continuation
    /// lines diverge them.
    pub fn apply_field(&mut self, field: Field<'_>, sentence_end: char) {
        let value = field.value.to_string();
        match field.kind {
            FieldKind::Scenario => self.scenario = value,
            FieldKind::Core => self.set_core(field.value, sentence_end),
            FieldKind::CheckYes => self.check_yes = value,
            FieldKind::CheckNo => self.check_no = value,
            FieldKind::Tip => self.tip = value,
        }
    }

    fn set_core(&mut self, content: &str, sentence_end: char) {
        match content.split_once(sentence_end) {
            Some((label, desc)) => {
                self.core = label.trim().to_string();
                let desc = desc.trim();
                self.core_desc = if desc.is_empty() {
                    self.core.clone()
                } else {
                    desc.to_string()
                };
            }
            None => {
                self.core = content.to_string();
                self.core_desc = content.to_string();
            }
        }
    }

    /// Fold an unrecognized line into the core description.
    ///
    /// Best effort only: applies while `core` is set and `check_yes` is not.
    /// A description still equal to `core` has not diverged and is replaced;
    /// otherwise the line is appended without a separator. Returns whether
    /// the line was used.
    pub fn absorb_continuation(&mut self, text: &str) -> bool {
        if self.core.is_empty() || !self.check_yes.is_empty() {
            return false;
        }
        if self.core_desc == self.core {
            self.core_desc = text.to_string();
        } else {
            self.core_desc.push_str(text);
        }
        true
    }
}
