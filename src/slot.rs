//! Command slot layout for each published revision of the menu command table.

/// Number of numbered "play track N" commands every revision exposes.
pub const ORDINAL_SLOT_COUNT: u32 = 30;

const LAST_SLOT: u32 = 30;
const RANDOM_SLOT: u32 = 31;
const FOCUSED_SLOT: u32 = 32;

/// Published command-table layouts. Later revisions only append slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Revision {
    /// Ordinals plus "Last"; identifiers hash the raw slot index.
    V1,
    /// Adds "Random"; identifiers hash the decimal slot index.
    V2,
    /// Adds "Focused".
    #[default]
    V3,
}

/// How a slot's identifier input is built from the component name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierScheme {
    /// Component name followed by the little-endian `u32` slot index.
    RawIndex,
    /// Component name followed by the slot index in decimal.
    DecimalSuffix,
}

/// A logical command, independent of its position in the flat slot index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Zero-based playlist position.
    Ordinal(u32),
    Last,
    Random,
    Focused,
}

impl Revision {
    pub fn command_count(self) -> u32 {
        match self {
            Self::V1 => LAST_SLOT + 1,
            Self::V2 => RANDOM_SLOT + 1,
            Self::V3 => FOCUSED_SLOT + 1,
        }
    }

    pub fn identifier_scheme(self) -> IdentifierScheme {
        match self {
            Self::V1 => IdentifierScheme::RawIndex,
            Self::V2 | Self::V3 => IdentifierScheme::DecimalSuffix,
        }
    }

    /// V1 reuses the short name as the description.
    pub fn has_sentence_descriptions(self) -> bool {
        !matches!(self, Self::V1)
    }

    /// Maps a flat command index to its slot, or `None` when the index is past the table.
    pub fn slot_at(self, index: u32) -> Option<Slot> {
        if index >= self.command_count() {
            return None;
        }
        match index {
            LAST_SLOT => Some(Slot::Last),
            RANDOM_SLOT => Some(Slot::Random),
            FOCUSED_SLOT => Some(Slot::Focused),
            ordinal => Some(Slot::Ordinal(ordinal)),
        }
    }

    /// Inverse of [`Revision::slot_at`]. Returns `None` for slots this revision does not have.
    pub fn index_of(self, slot: Slot) -> Option<u32> {
        let index = match slot {
            Slot::Ordinal(position) if position < ORDINAL_SLOT_COUNT => position,
            Slot::Ordinal(_) => return None,
            Slot::Last => LAST_SLOT,
            Slot::Random => RANDOM_SLOT,
            Slot::Focused => FOCUSED_SLOT,
        };
        (index < self.command_count()).then_some(index)
    }
}

impl Slot {
    /// Short label shown in the menu.
    pub fn name(self) -> String {
        match self {
            Self::Ordinal(position) => (u64::from(position) + 1).to_string(),
            Self::Last => "Last".to_string(),
            Self::Random => "Random".to_string(),
            Self::Focused => "Focused".to_string(),
        }
    }

    /// Full sentence used as the command's help text.
    pub fn sentence(self) -> String {
        match self {
            Self::Ordinal(position) => {
                format!(
                    "Play track {} from the active playlist.",
                    u64::from(position) + 1
                )
            }
            Self::Last => "Play last track from the active playlist.".to_string(),
            Self::Random => "Play random track from the active playlist.".to_string(),
            Self::Focused => "Play focused track from the active playlist.".to_string(),
        }
    }
}
