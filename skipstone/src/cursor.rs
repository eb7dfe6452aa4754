//! Page cursors.
//!
//! A cursor names the key a page begins at. The first page of a sequence has
//! no such key - requesting it means "start from the lower bound" - so the
//! backward planner marks it with an explicit [`PageCursor::SequenceStart`]
//! sentinel instead of overloading an absent key, which would be
//! indistinguishable from "not computed".

use serde::{Serialize, Serializer};

/// Where a page begins: a concrete start key, or the start of the sequence.
///
/// Serializes as the key itself, or JSON `null` for the sentinel, so cursor
/// lists stay plain arrays of key-or-null on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor<K> {
    /// The page begins at this key (inclusive).
    Key(K),
    /// The page is the first page; request it with no start key.
    SequenceStart,
}

impl<K> PageCursor<K> {
    /// The concrete key, if any.
    pub const fn key(&self) -> Option<&K> {
        match self {
            Self::Key(key) => Some(key),
            Self::SequenceStart => None,
        }
    }

    /// True for the start-of-sequence sentinel.
    pub const fn is_sequence_start(&self) -> bool {
        matches!(self, Self::SequenceStart)
    }

    /// Turn the cursor into the start key of a follow-up call.
    ///
    /// `SequenceStart` becomes `None`, which a
    /// [`Paginator`](crate::Paginator) resolves back to the lower bound.
    pub fn into_start_key(self) -> Option<K> {
        match self {
            Self::Key(key) => Some(key),
            Self::SequenceStart => None,
        }
    }
}

impl<K: Serialize> Serialize for PageCursor<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Key(key) => key.serialize(serializer),
            Self::SequenceStart => serializer.serialize_none(),
        }
    }
}
