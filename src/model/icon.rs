// File: ./src/model/icon.rs
use crate::model::event::TaskType;

/// Glyph, tint and name used to decorate a task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskIcon {
    pub glyph: &'static str,
    /// (r, g, b) tint for the glyph.
    pub rgb: (u8, u8, u8),
    pub name: &'static str,
}

pub const DEFAULT_ICON: TaskIcon = TaskIcon {
    glyph: "📅",
    rgb: (113, 113, 122),
    name: "calendar",
};

/// Maps a stored (lowercased) task type to its icon.
///
/// Total: `other`, unknown labels and the empty string all resolve to
/// [`DEFAULT_ICON`].
pub fn resolve_icon(kind: &str) -> TaskIcon {
    match kind {
        "planting" => TaskIcon {
            glyph: "🌽",
            rgb: (234, 179, 8),
            name: "corn",
        },
        "fertilizing" => TaskIcon {
            glyph: "🍃",
            rgb: (22, 163, 74),
            name: "leaf",
        },
        "pest control" => TaskIcon {
            glyph: "🐛",
            rgb: (220, 38, 38),
            name: "bug",
        },
        "maintenance" => TaskIcon {
            glyph: "🔧",
            rgb: (37, 99, 235),
            name: "wrench",
        },
        "harvesting" => TaskIcon {
            glyph: "☀",
            rgb: (202, 138, 4),
            name: "sun",
        },
        _ => DEFAULT_ICON,
    }
}

impl TaskType {
    pub fn icon(self) -> TaskIcon {
        resolve_icon(&self.label().to_lowercase())
    }
}
