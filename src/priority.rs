//! The fixed priority field table controlling output order and labeling.
//!
//! Recognized field names are printed left-to-right in table order with fixed
//! column widths; everything else lands in the trailing `Extra` block.

/// Column width class for a priority field's rendered segment.
///
/// Widths are minimums: shorter segments are padded with trailing spaces,
/// longer segments are never truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Narrow column for the level badge segment.
    Narrow,
    /// Default column for most fields.
    Default,
    /// Wide column sized for a full normalized timestamp string.
    Wide,
}

impl ColumnWidth {
    /// Minimum rendered width of the segment, in characters.
    pub const fn chars(self) -> usize {
        match self {
            Self::Narrow => 17,
            Self::Default => 30,
            Self::Wide => 37,
        }
    }
}

/// One entry of the priority table: a recognized JSON key, its display
/// label, and the column width class of its rendered segment.
///
/// The entry's index in [`PRIORITY_FIELDS`] is its rank, which is both the
/// scan order and the left-to-right print order.
#[derive(Debug)]
pub struct PriorityField {
    /// The JSON key this entry matches (the canonical key).
    pub key: &'static str,
    /// The label printed in place of the key.
    pub label: &'static str,
    /// Column width class of the rendered segment.
    pub width: ColumnWidth,
}

/// The priority table. Fixed at compile time, never derived from input.
///
/// Both `message` and `msg` map to the `Message` label; a record carrying
/// both keys renders two `Message` segments, one per entry.
pub const PRIORITY_FIELDS: &[PriorityField] = &[
    PriorityField {
        key: "timestamp",
        label: "TimeStamp",
        width: ColumnWidth::Wide,
    },
    PriorityField {
        key: "thread",
        label: "Thread",
        width: ColumnWidth::Default,
    },
    PriorityField {
        key: "level",
        label: "Level",
        width: ColumnWidth::Narrow,
    },
    PriorityField {
        key: "logger",
        label: "Logger",
        width: ColumnWidth::Default,
    },
    PriorityField {
        key: "message",
        label: "Message",
        width: ColumnWidth::Default,
    },
    PriorityField {
        key: "msg",
        label: "Message",
        width: ColumnWidth::Default,
    },
    PriorityField {
        key: "error",
        label: "Error",
        width: ColumnWidth::Default,
    },
    PriorityField {
        key: "exception",
        label: "Exception",
        width: ColumnWidth::Default,
    },
];
