//! The closed set of collectible items.

use serde::{Deserialize, Serialize};

/// Everything the player can hold. The inventory is a set over this enum —
/// membership, not counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    CaseFile,
    DnaSample,
    ExtractedDna,
    RestrictionFragments,
    GelResults,
    BlotMembrane,
    HybridisedMembrane,
    Autoradiograph,
    Certificate,
}

impl Item {
    pub fn display_name(&self) -> &'static str {
        match self {
            Item::CaseFile => "Case File",
            Item::DnaSample => "DNA Sample",
            Item::ExtractedDna => "Extracted DNA",
            Item::RestrictionFragments => "Restriction Fragments",
            Item::GelResults => "Gel Results",
            Item::BlotMembrane => "Blot Membrane",
            Item::HybridisedMembrane => "Hybridised Membrane",
            Item::Autoradiograph => "Autoradiograph",
            Item::Certificate => "RFLP Certificate",
        }
    }
}
