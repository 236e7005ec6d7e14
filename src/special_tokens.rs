//! Bootstrap inventory of meta pieces placed ahead of the learned vocabulary.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::TrainerConfig;
use crate::error::{Result, SubvocError};

/// Identifier assigned to a vocabulary entry.
pub type TokenId = u32;

/// Surface form reserved for the unknown piece.
pub const UNK_SYMBOL: &str = "<unk>";
/// Surface form reserved for beginning of sentence.
pub const BOS_SYMBOL: &str = "<s>";
/// Surface form reserved for end of sentence.
pub const EOS_SYMBOL: &str = "</s>";
/// Surface form reserved for padding.
pub const PAD_SYMBOL: &str = "<pad>";

/// Categorical role of a bootstrap inventory entry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MetaKind {
    /// Fallback for input the learned vocabulary cannot cover.
    Unk,
    /// Beginning-of-sentence marker.
    Bos,
    /// End-of-sentence marker.
    Eos,
    /// Padding filler for fixed-width batches.
    Pad,
    /// Caller-supplied symbol that never surfaces in decoded text.
    Control,
    /// Caller-supplied symbol always segmented as one piece.
    UserDefined,
}

/// A reserved symbol and its role. Position in the bootstrap inventory is
/// the id the emitted vocabulary assigns to it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MetaPiece {
    /// Surface form of the symbol.
    pub symbol: String,
    /// Role the symbol plays in the emitted vocabulary.
    pub kind: MetaKind,
}

impl MetaPiece {
    fn new(symbol: impl Into<String>, kind: MetaKind) -> Self {
        Self {
            symbol: symbol.into(),
            kind,
        }
    }
}

/// Builds the bootstrap inventory for `cfg`.
///
/// Enabled core symbols come first, ordered by their configured ids,
/// followed by control symbols and then user-defined symbols in declaration
/// order. Fails when the unknown piece is disabled, when the enabled core
/// ids do not occupy a contiguous block starting at zero, or when any
/// symbol appears twice.
pub fn build(cfg: &TrainerConfig) -> Result<Vec<MetaPiece>> {
    if cfg.unk_id < 0 {
        return Err(SubvocError::InvalidConfig(
            "unk id must be defined; only bos, eos and pad may be disabled".to_string(),
        ));
    }

    let mut core: Vec<(i32, &str, MetaKind)> = Vec::with_capacity(4);
    for (id, symbol, kind) in [
        (cfg.unk_id, UNK_SYMBOL, MetaKind::Unk),
        (cfg.bos_id, BOS_SYMBOL, MetaKind::Bos),
        (cfg.eos_id, EOS_SYMBOL, MetaKind::Eos),
        (cfg.pad_id, PAD_SYMBOL, MetaKind::Pad),
    ] {
        if id >= 0 {
            core.push((id, symbol, kind));
        }
    }
    core.sort_by_key(|&(id, _, _)| id);

    // Core ids may be permuted freely but must fill [0, n) with no gaps or
    // collisions, so that inventory position and configured id agree.
    let contiguous = core
        .iter()
        .enumerate()
        .all(|(slot, &(id, _, _))| id == slot as i32);
    if !contiguous {
        let ids: Vec<i32> = core.iter().map(|&(id, _, _)| id).collect();
        return Err(SubvocError::InvalidConfig(format!(
            "reserved ids must form a contiguous block starting at zero, found {ids:?}"
        )));
    }

    let mut pieces: Vec<MetaPiece> = core
        .into_iter()
        .map(|(_, symbol, kind)| MetaPiece::new(symbol, kind))
        .collect();
    pieces.extend(
        cfg.control_symbols
            .iter()
            .map(|symbol| MetaPiece::new(symbol.clone(), MetaKind::Control)),
    );
    pieces.extend(
        cfg.user_defined_symbols
            .iter()
            .map(|symbol| MetaPiece::new(symbol.clone(), MetaKind::UserDefined)),
    );

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for piece in &pieces {
        if !seen.insert(piece.symbol.as_str()) {
            return Err(SubvocError::InvalidConfig(format!(
                "symbol {:?} is already defined",
                piece.symbol
            )));
        }
    }

    if TokenId::try_from(pieces.len()).is_err() {
        return Err(SubvocError::Internal(format!(
            "bootstrap inventory of {} entries overflows the id space",
            pieces.len()
        )));
    }

    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(pieces: &[MetaPiece]) -> Vec<&str> {
        pieces.iter().map(|p| p.symbol.as_str()).collect()
    }

    #[test]
    fn default_inventory_is_unk_bos_eos() {
        let pieces = build(&TrainerConfig::default()).expect("defaults should build");
        assert_eq!(symbols(&pieces), ["<unk>", "<s>", "</s>"]);
        assert_eq!(pieces[0].kind, MetaKind::Unk);
        assert_eq!(pieces[1].kind, MetaKind::Bos);
        assert_eq!(pieces[2].kind, MetaKind::Eos);
    }

    #[test]
    fn core_ids_may_be_permuted() {
        let cfg = TrainerConfig::builder()
            .unk_id(2)
            .bos_id(1)
            .eos_id(0)
            .build()
            .expect("config should be valid");
        let pieces = build(&cfg).expect("permuted ids should build");
        assert_eq!(symbols(&pieces), ["</s>", "<s>", "<unk>"]);

        let cfg = TrainerConfig::builder()
            .unk_id(0)
            .bos_id(3)
            .eos_id(2)
            .pad_id(1)
            .build()
            .expect("config should be valid");
        let pieces = build(&cfg).expect("permuted ids should build");
        assert_eq!(symbols(&pieces), ["<unk>", "<pad>", "</s>", "<s>"]);
    }

    #[test]
    fn pad_joins_the_inventory_when_enabled() {
        let cfg = TrainerConfig::builder()
            .pad_id(3)
            .build()
            .expect("config should be valid");
        let pieces = build(&cfg).expect("pad at 3 should build");
        assert_eq!(symbols(&pieces), ["<unk>", "<s>", "</s>", "<pad>"]);
        assert_eq!(pieces[3].kind, MetaKind::Pad);
    }

    #[test]
    fn disabled_core_symbols_are_skipped() {
        let cfg = TrainerConfig::builder()
            .unk_id(0)
            .bos_id(-1)
            .eos_id(1)
            .build()
            .expect("config should be valid");
        let pieces = build(&cfg).expect("unk and eos should build");
        assert_eq!(symbols(&pieces), ["<unk>", "</s>"]);

        let cfg = TrainerConfig::builder()
            .bos_id(-1)
            .eos_id(-1)
            .build()
            .expect("config should be valid");
        let pieces = build(&cfg).expect("lone unk should build");
        assert_eq!(symbols(&pieces), ["<unk>"]);
    }

    #[test]
    fn unset_unk_is_rejected_even_with_contiguous_ids() {
        let cfg = TrainerConfig::builder()
            .unk_id(-1)
            .bos_id(0)
            .eos_id(1)
            .build()
            .expect("config should be valid");
        let err = build(&cfg).expect_err("unk must be mandatory");
        assert!(matches!(err, SubvocError::InvalidConfig(ref msg)
            if msg.contains("unk id must be defined")));
    }

    #[test]
    fn gap_in_reserved_ids_is_rejected() {
        let cfg = TrainerConfig::builder()
            .unk_id(0)
            .bos_id(-1)
            .eos_id(2)
            .build()
            .expect("config should be valid");
        let err = build(&cfg).expect_err("gapped ids must be rejected");
        assert!(matches!(err, SubvocError::InvalidConfig(ref msg)
            if msg.contains("contiguous") && msg.contains("[0, 2]")));

        let cfg = TrainerConfig::builder()
            .unk_id(0)
            .bos_id(1)
            .eos_id(3)
            .build()
            .expect("config should be valid");
        let err = build(&cfg).expect_err("gapped ids must be rejected");
        assert!(matches!(err, SubvocError::InvalidConfig(ref msg)
            if msg.contains("contiguous")));
    }

    #[test]
    fn colliding_reserved_ids_are_rejected() {
        let cfg = TrainerConfig::builder()
            .unk_id(0)
            .bos_id(0)
            .eos_id(1)
            .build()
            .expect("config should be valid");
        let err = build(&cfg).expect_err("colliding ids must be rejected");
        assert!(matches!(err, SubvocError::InvalidConfig(ref msg)
            if msg.contains("contiguous")));
    }

    #[test]
    fn control_and_user_symbols_follow_the_core() {
        let cfg = TrainerConfig::builder()
            .control_symbols(["<mask>", "<cls>"])
            .user_defined_symbols(["foo", "bar"])
            .build()
            .expect("config should be valid");
        let pieces = build(&cfg).expect("extra symbols should build");
        assert_eq!(
            symbols(&pieces),
            ["<unk>", "<s>", "</s>", "<mask>", "<cls>", "foo", "bar"]
        );
        assert_eq!(pieces[3].kind, MetaKind::Control);
        assert_eq!(pieces[5].kind, MetaKind::UserDefined);
    }

    #[test]
    fn duplicate_symbols_within_a_list_are_rejected() {
        for cfg in [
            TrainerConfig::builder()
                .user_defined_symbols(["dup", "dup"])
                .build()
                .expect("config should be valid"),
            TrainerConfig::builder()
                .control_symbols(["dup", "dup"])
                .build()
                .expect("config should be valid"),
        ] {
            let err = build(&cfg).expect_err("duplicate symbols must be rejected");
            assert!(matches!(err, SubvocError::InvalidConfig(ref msg)
                if msg.contains("already defined")));
        }
    }

    #[test]
    fn symbol_clashing_with_a_core_piece_is_rejected() {
        for cfg in [
            TrainerConfig::builder()
                .control_symbols(["<unk>"])
                .build()
                .expect("config should be valid"),
            TrainerConfig::builder()
                .user_defined_symbols(["<unk>"])
                .build()
                .expect("config should be valid"),
        ] {
            let err = build(&cfg).expect_err("core clash must be rejected");
            assert!(matches!(err, SubvocError::InvalidConfig(ref msg)
                if msg.contains("already defined")));
        }
    }

    #[test]
    fn control_and_user_lists_may_not_overlap() {
        let cfg = TrainerConfig::builder()
            .control_symbols(["<sep>"])
            .user_defined_symbols(["<sep>"])
            .build()
            .expect("config should be valid");
        let err = build(&cfg).expect_err("cross-list clash must be rejected");
        assert!(matches!(err, SubvocError::InvalidConfig(ref msg)
            if msg.contains("already defined")));
    }
}
