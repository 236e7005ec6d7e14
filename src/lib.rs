//! Subword vocabulary trainer bootstrap library.
//!
//! The crate covers the stage of subword training that runs before any
//! learning: deciding which candidate pieces are admissible vocabulary
//! units and laying out the reserved meta pieces (`<unk>`, `<s>`, `</s>`,
//! `<pad>`, control and user-defined symbols) at the low end of the id
//! space.  Typical usage builds a [`TrainerConfig`], constructs a
//! [`TrainerCore`], and then drives a learner against the
//! [`TrainerContext`] capability surface.
//!
//! ```
//! use subvoc::{TrainerConfig, TrainerCore};
//!
//! # fn main() -> subvoc::Result<()> {
//! let cfg = TrainerConfig::builder()
//!     .max_piece_length(8)
//!     .user_defined_symbols(["<url>"])
//!     .build()?;
//! let core = TrainerCore::new(cfg)?;
//! assert!(core.is_valid_piece("\u{2581}hello"));
//! assert!(!core.is_valid_piece("hello world"));
//! assert_eq!(core.first_learned_id(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! Candidate scoring is typically fanned out across worker threads; the
//! validator and the built inventory are immutable after construction, so
//! a shared reference to the core is all a worker pool needs.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    clippy::all,
    rust_2018_idioms,
    future_incompatible,
    unused_lifetimes,
    unreachable_pub
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

pub mod config;
pub mod error;
pub mod piece;
pub mod script;
pub mod special_tokens;
pub mod trainer;

pub use config::{TrainerConfig, TrainerConfigBuilder};
pub use error::{Result, SubvocError};
pub use piece::PieceValidator;
pub use script::{classify, ScriptCategory, WORD_BOUNDARY_MARKER};
pub use special_tokens::{MetaKind, MetaPiece, TokenId};
pub use trainer::{TrainerContext, TrainerCore};
