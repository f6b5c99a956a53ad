use rand::Rng;
use rand::RngCore;

use crate::model::government::GovernmentType;
use crate::model::race::Race;

/// Given-name syllable tables per race.
fn name_parts(race: Race) -> (&'static [&'static str], &'static [&'static str]) {
    match race {
        Race::Human => (
            &["Al", "Bran", "Cal", "Ed", "Gar", "Hal", "Jor", "Mar", "Ros", "Wil"],
            &["dric", "wen", "ric", "a", "mund", "eth", "ian", "old", "lyn", "ter"],
        ),
        Race::Elf => (
            &["Ael", "Cael", "Elo", "Fae", "Gala", "Lia", "Nael", "Syl", "Thal", "Vae"],
            &["rion", "wen", "driel", "las", "nor", "riel", "thir", "viel", "ion", "ara"],
        ),
        Race::Dwarf => (
            &["Bal", "Dur", "Gim", "Gro", "Kaz", "Mor", "Thor", "Thra", "Ulf", "Vond"],
            &["din", "gar", "grim", "li", "nir", "rik", "run", "stein", "thur", "va"],
        ),
        Race::Halfling => (
            &["Ban", "Cor", "Dro", "Fil", "Lob", "Mer", "Per", "Pim", "Rose", "Tol"],
            &["bo", "doc", "ella", "go", "ias", "la", "lo", "ry", "to", "wise"],
        ),
        Race::Dragonborn => (
            &["Arj", "Bala", "Don", "Ghesh", "Hesk", "Kriv", "Medr", "Nad", "Pand", "Tor"],
            &["aar", "asar", "ash", "han", "inn", "jed", "rash", "rin", "thak", "urn"],
        ),
        Race::Gnome => (
            &["Alv", "Bim", "Dim", "Ell", "Fon", "Glim", "Nim", "Orr", "Wiz", "Zook"],
            &["ble", "bin", "dle", "kin", "nan", "nick", "ryn", "ti", "tock", "wick"],
        ),
        Race::HalfElf => (
            &["Ara", "Bel", "Cor", "Ely", "Ila", "Kael", "Lor", "Mira", "Ser", "Tam"],
            &["dan", "ia", "ion", "ira", "is", "len", "na", "ric", "ris", "wyn"],
        ),
        Race::HalfOrc => (
            &["Dre", "Gna", "Gor", "Hol", "Kar", "Mug", "Ront", "Shau", "Thok", "Yev"],
            &["akk", "arg", "ash", "gan", "grat", "kk", "rash", "tha", "ugh", "uzk"],
        ),
        Race::Tiefling => (
            &["Aka", "Dam", "Ia", "Kal", "Lev", "Mal", "Mor", "Rie", "Skar", "Zeph"],
            &["akos", "ai", "eth", "ista", "lech", "menos", "on", "rai", "tis", "yre"],
        ),
    }
}

const EPITHETS: &[&str] = &[
    "Ashford", "Blackthorn", "Brightwater", "Coldwell", "Dunmere", "Fairwind", "Greymoor",
    "Hartwood", "Ironhand", "Longbridge", "Oakshield", "Ravencrest", "Silverleaf", "Stonemark",
    "Thornwall", "Whitevale",
];

/// Generate a figure name (race-styled given name + epithet).
pub fn figure_name(rng: &mut dyn RngCore, race: Race) -> String {
    let (prefixes, suffixes) = name_parts(race);
    let prefix = prefixes[rng.random_range(0..prefixes.len())];
    let suffix = suffixes[rng.random_range(0..suffixes.len())];
    let epithet = EPITHETS[rng.random_range(0..EPITHETS.len())];
    format!("{prefix}{suffix} {epithet}")
}

/// Place-name roots per race, used for civilization names.
fn place_parts(race: Race) -> (&'static [&'static str], &'static [&'static str]) {
    match race {
        Race::Human => (
            &["Aldr", "Bryn", "Cast", "Fenn", "Harr", "Nor", "Ost", "Vale"],
            &["en", "fall", "gate", "mark", "shire", "stead", "ton", "wick"],
        ),
        Race::Elf => (
            &["Aelin", "Cellor", "Illi", "Lethir", "Quel", "Sylva", "Thalor", "Yll"],
            &["anor", "dell", "ethil", "ien", "lond", "mar", "oth", "wyn"],
        ),
        Race::Dwarf => (
            &["Bara", "Dur", "Grim", "Karak", "Khaz", "Mor", "Thane", "Zirn"],
            &["dun", "forge", "heim", "hold", "horn", "mont", "rock", "vault"],
        ),
        Race::Halfling => (
            &["Apple", "Bree", "Green", "Hay", "Mead", "Mill", "Tuck", "Willow"],
            &["bank", "bottom", "brook", "down", "field", "hollow", "march", "moor"],
        ),
        Race::Dragonborn => (
            &["Arkh", "Drak", "Irem", "Kethen", "Ophar", "Tymand", "Vrak", "Zerek"],
            &["ar", "eth", "isk", "osh", "rax", "thul", "um", "yr"],
        ),
        Race::Gnome => (
            &["Brass", "Cog", "Finn", "Glitt", "Spark", "Tinker", "Whim", "Zan"],
            &["borough", "bury", "dale", "ton", "town", "werk", "wheel", "yard"],
        ),
        Race::HalfElf => (
            &["Ard", "Bel", "Cyr", "Ever", "Glen", "Mir", "Sel", "Tyr"],
            &["anth", "dale", "haven", "lith", "mere", "rest", "vale", "wood"],
        ),
        Race::HalfOrc => (
            &["Brak", "Ghul", "Gor", "Krag", "Mauk", "Skar", "Urz", "Varg"],
            &["dakh", "gar", "grod", "mar", "rath", "ruk", "thar", "zag"],
        ),
        Race::Tiefling => (
            &["Ash", "Cinder", "Dis", "Ember", "Nessu", "Phleg", "Styx", "Vex"],
            &["fall", "gard", "ia", "mire", "reach", "spire", "thorne", "veil"],
        ),
    }
}

fn government_title(government: GovernmentType) -> &'static str {
    match government {
        GovernmentType::Monarchy => "Kingdom",
        GovernmentType::Republic => "Republic",
        GovernmentType::Theocracy => "Covenant",
        GovernmentType::TribalCouncil => "Tribes",
        GovernmentType::Magocracy => "Conclave",
        GovernmentType::ClanFederation => "Clans",
    }
}

/// Generate a civilization name from race place roots and a government title.
pub fn civilization_name(rng: &mut dyn RngCore, race: Race, government: GovernmentType) -> String {
    let (prefixes, suffixes) = place_parts(race);
    let prefix = prefixes[rng.random_range(0..prefixes.len())];
    let suffix = suffixes[rng.random_range(0..suffixes.len())];
    format!("{} of {prefix}{suffix}", government_title(government))
}
