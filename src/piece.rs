//! Admissibility predicate over candidate vocabulary pieces.

use crate::config::TrainerConfig;
use crate::script::{classify, ScriptCategory};

/// Compatibility class a non-marker codepoint contributes to the
/// script-purity check. Han, Hiragana and Katakana intermix freely within
/// one word and fold into a single class; every other category stands
/// alone, so digits and symbols never blend into alphabetic pieces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CompatClass {
    Common,
    Latin,
    Cjk,
    Hangul,
    Thai,
    Other,
}

/// Stateless admissibility predicate over candidate pieces.
///
/// The validator copies the configuration fields it needs at construction
/// and holds no further state: calls are pure and allocation-free, and any
/// number of candidate-evaluation workers may share one validator without
/// synchronisation.
#[derive(Debug, Clone)]
pub struct PieceValidator {
    split_by_whitespace: bool,
    split_by_unicode_script: bool,
    max_piece_length: usize,
}

impl PieceValidator {
    /// Creates a validator for the supplied configuration.
    #[must_use]
    pub fn new(cfg: &TrainerConfig) -> Self {
        Self {
            split_by_whitespace: cfg.split_by_whitespace,
            split_by_unicode_script: cfg.split_by_unicode_script,
            max_piece_length: cfg.max_piece_length,
        }
    }

    /// Returns `true` when `piece` is an admissible vocabulary unit.
    ///
    /// Checks short-circuit in order: non-empty, codepoint count within
    /// `max_piece_length`, no boundary codepoints, marker position, script
    /// purity. Rejection is the routine outcome for most enumerated
    /// candidates and carries no further diagnostics.
    #[must_use]
    pub fn is_valid(&self, piece: &str) -> bool {
        if piece.is_empty() {
            return false;
        }
        let mut chars = piece.chars().peekable();
        let mut seen_class: Option<CompatClass> = None;
        let mut pos = 0usize;
        while let Some(c) = chars.next() {
            if pos == self.max_piece_length {
                return false;
            }
            let class = match classify(c) {
                ScriptCategory::Boundary => return false,
                ScriptCategory::Marker => {
                    // A piece may begin a word but never end one: a trailing
                    // marker is invalid unless the piece is the marker itself.
                    if pos > 0 && chars.peek().is_none() {
                        return false;
                    }
                    // Whole-word training tolerates a single leading marker.
                    if pos > 0 && self.split_by_whitespace {
                        return false;
                    }
                    None
                }
                ScriptCategory::Common => Some(CompatClass::Common),
                ScriptCategory::Latin => Some(CompatClass::Latin),
                ScriptCategory::Han | ScriptCategory::Hiragana | ScriptCategory::Katakana => {
                    Some(CompatClass::Cjk)
                }
                ScriptCategory::Hangul => Some(CompatClass::Hangul),
                ScriptCategory::Thai => Some(CompatClass::Thai),
                ScriptCategory::Other => Some(CompatClass::Other),
            };
            if self.split_by_unicode_script {
                if let Some(class) = class {
                    match seen_class {
                        Some(previous) if previous != class => return false,
                        _ => seen_class = Some(class),
                    }
                }
            }
            pos += 1;
        }
        true
    }
}
