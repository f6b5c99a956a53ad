use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    Halfling,
    Dragonborn,
    Gnome,
    HalfElf,
    HalfOrc,
    Tiefling,
}

string_enum!(Race {
    Human => "human",
    Elf => "elf",
    Dwarf => "dwarf",
    Halfling => "halfling",
    Dragonborn => "dragonborn",
    Gnome => "gnome",
    HalfElf => "half_elf",
    HalfOrc => "half_orc",
    Tiefling => "tiefling",
});

impl Race {
    pub const ALL: [Race; 9] = [
        Race::Human,
        Race::Elf,
        Race::Dwarf,
        Race::Halfling,
        Race::Dragonborn,
        Race::Gnome,
        Race::HalfElf,
        Race::HalfOrc,
        Race::Tiefling,
    ];

    /// Founding weights, human-leaning.
    pub const FOUNDING_WEIGHTS: [(Race, u32); 9] = [
        (Race::Human, 24),
        (Race::Elf, 14),
        (Race::Dwarf, 14),
        (Race::Halfling, 10),
        (Race::Dragonborn, 8),
        (Race::Gnome, 8),
        (Race::HalfElf, 8),
        (Race::HalfOrc, 8),
        (Race::Tiefling, 6),
    ];

    /// Nominal lifespan in years. The mortality curve brackets hang off this.
    pub fn lifespan(self) -> u32 {
        match self {
            Race::Human => 80,
            Race::Elf => 750,
            Race::Dwarf => 350,
            Race::Halfling => 150,
            Race::Dragonborn => 80,
            Race::Gnome => 425,
            Race::HalfElf => 180,
            Race::HalfOrc => 75,
            Race::Tiefling => 100,
        }
    }

    /// Inclusive age range in which a figure can parent children.
    pub fn fertility_range(self) -> (u32, u32) {
        match self {
            Race::Human => (18, 45),
            Race::Elf => (100, 550),
            Race::Dwarf => (50, 250),
            Race::Halfling => (20, 100),
            Race::Dragonborn => (16, 50),
            Race::Gnome => (40, 300),
            Race::HalfElf => (20, 120),
            Race::HalfOrc => (16, 45),
            Race::Tiefling => (18, 50),
        }
    }

    /// Age at which a figure becomes eligible for marriage.
    pub fn adult_age(self) -> u32 {
        match self {
            Race::Human => 18,
            Race::Elf => 100,
            Race::Dwarf => 50,
            Race::Halfling => 20,
            Race::Dragonborn => 16,
            Race::Gnome => 40,
            Race::HalfElf => 20,
            Race::HalfOrc => 16,
            Race::Tiefling => 18,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Sex {
    Male,
    Female,
}

string_enum!(Sex {
    Male => "male",
    Female => "female",
});
