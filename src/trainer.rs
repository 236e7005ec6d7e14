//! Bootstrap facade tying configuration, validation and reserved pieces
//! together for a training run.

use log::info;

use crate::config::{TrainerConfig, TrainerConfigBuilder};
use crate::error::Result;
use crate::piece::PieceValidator;
use crate::special_tokens::{self, MetaPiece, TokenId};

/// Capability surface a learning algorithm needs from the bootstrap stage.
///
/// Learners stay generic over this trait instead of holding a concrete
/// [`TrainerCore`], which keeps candidate-scoring code testable with
/// hand-rolled contexts. Implementations guarantee the inventory length
/// fits in [`TokenId`].
pub trait TrainerContext {
    /// Returns whether `piece` may enter the learned vocabulary.
    fn is_valid_piece(&self, piece: &str) -> bool;

    /// Returns the reserved pieces occupying the low end of the id space.
    fn meta_pieces(&self) -> &[MetaPiece];

    /// Returns the first id available to learned pieces.
    fn first_learned_id(&self) -> TokenId {
        self.meta_pieces().len() as TokenId
    }
}

/// High-level facade over the trainer bootstrap.
///
/// Construction runs every fatal check up front: configuration validation
/// and reserved-piece assembly both happen in [`TrainerCore::new`], so a
/// successfully built core can hand out its validator and inventory without
/// further fallible paths.
#[derive(Debug, Clone)]
pub struct TrainerCore {
    cfg: TrainerConfig,
    validator: PieceValidator,
    meta_pieces: Vec<MetaPiece>,
}

impl TrainerCore {
    /// Validates `cfg`, builds the reserved-piece inventory and returns a
    /// ready core.
    pub fn new(cfg: TrainerConfig) -> Result<Self> {
        cfg.validate()?;
        let meta_pieces = special_tokens::build(&cfg)?;
        let validator = PieceValidator::new(&cfg);
        info!(
            "bootstrap complete: {} reserved pieces ({} control, {} user-defined), max piece length {}",
            meta_pieces.len(),
            cfg.control_symbols.len(),
            cfg.user_defined_symbols.len(),
            cfg.max_piece_length
        );
        Ok(Self {
            cfg,
            validator,
            meta_pieces,
        })
    }

    /// Returns a [`TrainerConfigBuilder`] with default settings.
    #[must_use]
    pub fn builder() -> TrainerConfigBuilder {
        TrainerConfig::builder()
    }

    /// Returns an immutable reference to the underlying configuration.
    #[must_use]
    pub fn config(&self) -> &TrainerConfig {
        &self.cfg
    }

    /// Returns the piece validator derived from the configuration.
    #[must_use]
    pub fn validator(&self) -> &PieceValidator {
        &self.validator
    }

    /// Returns whether `piece` may enter the learned vocabulary.
    #[must_use]
    pub fn is_valid_piece(&self, piece: &str) -> bool {
        self.validator.is_valid(piece)
    }

    /// Returns the reserved pieces occupying the low end of the id space.
    #[must_use]
    pub fn meta_pieces(&self) -> &[MetaPiece] {
        &self.meta_pieces
    }

    /// Returns the first id available to learned pieces.
    #[must_use]
    pub fn first_learned_id(&self) -> TokenId {
        self.meta_pieces.len() as TokenId
    }
}

impl TrainerContext for TrainerCore {
    fn is_valid_piece(&self, piece: &str) -> bool {
        self.validator.is_valid(piece)
    }

    fn meta_pieces(&self) -> &[MetaPiece] {
        &self.meta_pieces
    }
}
