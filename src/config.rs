//! Configuration consumed by the trainer core.

use crate::error::{Result, SubvocError};
use serde::{Deserialize, Serialize};

/// Configuration for subword-vocabulary training.
///
/// The value is constructed once before training and held read-only for the
/// whole run; the core never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainerConfig {
    /// Treats the word-boundary marker as a hard split: pieces may carry at
    /// most a single leading marker.
    pub split_by_whitespace: bool,
    /// Rejects pieces mixing incompatible Unicode scripts.
    pub split_by_unicode_script: bool,
    /// Maximum piece length in codepoints.
    pub max_piece_length: usize,
    /// Reserved id of the unknown token; `-1` means unset. Unlike the other
    /// three, leaving it unset is a fatal configuration error.
    pub unk_id: i32,
    /// Reserved id of the sentence-begin token; `-1` means unset.
    pub bos_id: i32,
    /// Reserved id of the sentence-end token; `-1` means unset.
    pub eos_id: i32,
    /// Reserved id of the padding token; `-1` means unset.
    pub pad_id: i32,
    /// Control symbols appended to the reserved prefix in declaration order.
    pub control_symbols: Vec<String>,
    /// User-defined symbols appended after the control symbols, in
    /// declaration order.
    pub user_defined_symbols: Vec<String>,
}

impl TrainerConfig {
    /// Returns a builder initialised with [`TrainerConfig::default`].
    #[must_use]
    pub fn builder() -> TrainerConfigBuilder {
        TrainerConfigBuilder::default()
    }

    /// Validates the field-local invariants required for training.
    ///
    /// The reserved-id layout invariants (unk defined, ids contiguous) are
    /// enforced by the special-token registry, which owns them.
    pub fn validate(&self) -> Result<()> {
        if self.max_piece_length == 0 {
            return Err(SubvocError::InvalidConfig(
                "max_piece_length must be greater than zero".into(),
            ));
        }
        for (name, id) in [
            ("unk_id", self.unk_id),
            ("bos_id", self.bos_id),
            ("eos_id", self.eos_id),
            ("pad_id", self.pad_id),
        ] {
            if id < -1 {
                return Err(SubvocError::InvalidConfig(format!(
                    "{name} ({id}) must be a vocabulary id or -1 for unset"
                )));
            }
        }
        Ok(())
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            split_by_whitespace: true,
            split_by_unicode_script: true,
            max_piece_length: 16,
            unk_id: 0,
            bos_id: 1,
            eos_id: 2,
            pad_id: -1,
            control_symbols: Vec::new(),
            user_defined_symbols: Vec::new(),
        }
    }
}

/// Builder for [`TrainerConfig`].
#[derive(Debug, Default, Clone)]
pub struct TrainerConfigBuilder {
    cfg: TrainerConfig,
}

impl TrainerConfigBuilder {
    /// Creates a builder with [`TrainerConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables whole-word piece training.
    #[must_use]
    pub fn split_by_whitespace(mut self, enabled: bool) -> Self {
        self.cfg.split_by_whitespace = enabled;
        self
    }

    /// Enables or disables the script-purity check.
    #[must_use]
    pub fn split_by_unicode_script(mut self, enabled: bool) -> Self {
        self.cfg.split_by_unicode_script = enabled;
        self
    }

    /// Sets the maximum piece length in codepoints.
    #[must_use]
    pub fn max_piece_length(mut self, value: usize) -> Self {
        self.cfg.max_piece_length = value;
        self
    }

    /// Sets the reserved id of the unknown token (`-1` = unset).
    #[must_use]
    pub fn unk_id(mut self, id: i32) -> Self {
        self.cfg.unk_id = id;
        self
    }

    /// Sets the reserved id of the sentence-begin token (`-1` = unset).
    #[must_use]
    pub fn bos_id(mut self, id: i32) -> Self {
        self.cfg.bos_id = id;
        self
    }

    /// Sets the reserved id of the sentence-end token (`-1` = unset).
    #[must_use]
    pub fn eos_id(mut self, id: i32) -> Self {
        self.cfg.eos_id = id;
        self
    }

    /// Sets the reserved id of the padding token (`-1` = unset).
    #[must_use]
    pub fn pad_id(mut self, id: i32) -> Self {
        self.cfg.pad_id = id;
        self
    }

    /// Overrides the control symbols reserved after the core tokens.
    #[must_use]
    pub fn control_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.control_symbols = symbols.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Overrides the user-defined symbols reserved after the control symbols.
    #[must_use]
    pub fn user_defined_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.user_defined_symbols = symbols.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Finalises the builder, returning a validated [`TrainerConfig`].
    pub fn build(self) -> Result<TrainerConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
