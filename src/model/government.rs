use serde::{Deserialize, Serialize};

use super::race::Race;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GovernmentType {
    Monarchy,
    Republic,
    Theocracy,
    TribalCouncil,
    Magocracy,
    ClanFederation,
}

string_enum!(GovernmentType {
    Monarchy => "monarchy",
    Republic => "republic",
    Theocracy => "theocracy",
    TribalCouncil => "tribal_council",
    Magocracy => "magocracy",
    ClanFederation => "clan_federation",
});

impl GovernmentType {
    pub const ALL: [GovernmentType; 6] = [
        GovernmentType::Monarchy,
        GovernmentType::Republic,
        GovernmentType::Theocracy,
        GovernmentType::TribalCouncil,
        GovernmentType::Magocracy,
        GovernmentType::ClanFederation,
    ];

    /// Weighted government table per race. Weights need not sum to any
    /// particular total; selection normalizes over the listed entries.
    pub fn weights_for(race: Race) -> &'static [(GovernmentType, u32)] {
        use GovernmentType::*;
        match race {
            Race::Human => &[(Monarchy, 40), (Republic, 25), (Theocracy, 20), (TribalCouncil, 15)],
            Race::Elf => &[(Monarchy, 35), (Magocracy, 30), (Republic, 20), (Theocracy, 15)],
            Race::Dwarf => &[(ClanFederation, 45), (Monarchy, 35), (Republic, 20)],
            Race::Halfling => &[(Republic, 45), (TribalCouncil, 30), (Monarchy, 25)],
            Race::Dragonborn => &[(Monarchy, 40), (ClanFederation, 35), (Theocracy, 25)],
            Race::Gnome => &[(Republic, 40), (Magocracy, 35), (TribalCouncil, 25)],
            Race::HalfElf => &[(Republic, 35), (Monarchy, 30), (Magocracy, 20), (TribalCouncil, 15)],
            Race::HalfOrc => &[(TribalCouncil, 45), (ClanFederation, 30), (Monarchy, 25)],
            Race::Tiefling => &[(Magocracy, 35), (Monarchy, 30), (Republic, 20), (Theocracy, 15)],
        }
    }
}
