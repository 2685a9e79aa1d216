/// Name pools persons are drawn from.
///
/// The first-name pool is the union of the male and female lists with
/// duplicates removed, keeping first-seen order. The last-name pool is
/// deduplicated the same way. Order matters: samplers address names by
/// index, so a fixed pool plus a fixed seed gives a fixed output.
use std::collections::HashSet;
use std::sync::LazyLock;

use tracing::debug;

const MALE_FIRST_NAMES: &[&str] = &[
    "Alexander", "Andreas", "Anton", "Arne", "Axel", "Ben", "Benedikt", "Bernd",
    "Bjoern", "Carl", "Christian", "Christoph", "Daniel", "David", "Dennis", "Dieter",
    "Dirk", "Dominik", "Elias", "Emil", "Erik", "Fabian", "Felix", "Finn",
    "Florian", "Frank", "Friedrich", "Georg", "Gerhard", "Hannes", "Hans", "Heinz",
    "Helmut", "Henrik", "Holger", "Jakob", "Jan", "Jannik", "Jens", "Joerg",
    "Johannes", "Jonas", "Julian", "Juergen", "Kai", "Karl", "Kevin", "Klaus",
    "Konstantin", "Lars", "Leon", "Lukas", "Luca", "Malte", "Manfred", "Marc",
    "Marcel", "Mario", "Markus", "Martin", "Matthias", "Max", "Michael", "Moritz",
    "Niklas", "Nils", "Noah", "Oliver", "Oskar", "Patrick", "Paul", "Peter",
    "Philipp", "Rainer", "Ralf", "Robin", "Rolf", "Sascha", "Sebastian", "Simon",
    "Stefan", "Sven", "Thomas", "Thorsten", "Tim", "Tobias", "Tom", "Torben",
    "Uwe", "Valentin", "Vincent", "Volker", "Werner", "Wolfgang", "Yannick", "Kim",
    "Achim", "Adrian", "Albert", "Alfred", "Arnold", "Bastian", "Benjamin", "Bruno",
    "Burkhard", "Clemens", "Detlef", "Dietmar", "Eberhard", "Eckhard", "Edgar", "Egon",
    "Ernst", "Erwin", "Fritz", "Gregor", "Guenter", "Gustav", "Hartmut", "Heiko",
    "Helge", "Herbert", "Hermann", "Horst", "Hubert", "Ingo", "Joachim", "Johann",
    "Jonathan", "Kurt", "Leonard", "Lothar", "Ludwig", "Lutz", "Marvin", "Mathis",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Alina", "Andrea", "Angelika", "Anja", "Anna", "Annika", "Antje", "Barbara",
    "Bettina", "Birgit", "Carina", "Carolin", "Charlotte", "Christina", "Claudia", "Daniela",
    "Doris", "Elena", "Elisabeth", "Emilia", "Emma", "Eva", "Franziska", "Frieda",
    "Gabriele", "Greta", "Hanna", "Heike", "Helena", "Ida", "Ines", "Ingrid",
    "Jana", "Janina", "Jasmin", "Johanna", "Julia", "Jutta", "Karin", "Katharina",
    "Kathrin", "Kerstin", "Kim", "Klara", "Lara", "Laura", "Lea", "Lena",
    "Lina", "Lisa", "Luisa", "Maja", "Manuela", "Maria", "Marie", "Marion",
    "Martina", "Melanie", "Mia", "Michaela", "Miriam", "Monika", "Nadine", "Natalie",
    "Nicole", "Nina", "Paula", "Petra", "Pia", "Renate", "Robin", "Ronja",
    "Sabine", "Sandra", "Sarah", "Sascha", "Silke", "Simone", "Sofia", "Sophie",
    "Stefanie", "Susanne", "Svenja", "Tanja", "Theresa", "Ulrike", "Ursula", "Vanessa",
    "Vera", "Verena", "Victoria", "Yvonne", "Zoe", "Luca", "Jule", "Merle",
    "Adele", "Agnes", "Alexandra", "Amelie", "Anke", "Annette", "Astrid", "Beate",
    "Brigitte", "Christa", "Cornelia", "Dagmar", "Diana", "Edith", "Elke", "Erika",
    "Friederike", "Gerda", "Gisela", "Hannelore", "Heidi", "Helga", "Hildegard", "Irene",
    "Isabel", "Jessica", "Josefine", "Kira", "Leonie", "Liselotte", "Magdalena", "Margarete",
    "Marlene", "Mathilde", "Nora", "Ottilie", "Rebecca", "Regina", "Rosemarie", "Tabea",
];

const LAST_NAMES: &[&str] = &[
    "Albrecht", "Arnold", "Bach", "Bauer", "Baumann", "Beck", "Becker", "Berger",
    "Bergmann", "Brandt", "Braun", "Busch", "Dietrich", "Engel", "Fischer", "Frank",
    "Franke", "Friedrich", "Fuchs", "Graf", "Gross", "Guenther", "Haas", "Hahn",
    "Hartmann", "Heinrich", "Herrmann", "Hoffmann", "Hofmann", "Horn", "Huber", "Jaeger",
    "Jung", "Kaiser", "Keller", "Klein", "Koch", "Koehler", "Koenig", "Kraft",
    "Kraus", "Krause", "Krueger", "Kuhn", "Kunz", "Lang", "Lange", "Lehmann",
    "Lorenz", "Ludwig", "Luebeck", "Maier", "Martin", "Mayer", "Meier", "Meyer",
    "Moeller", "Mueller", "Neumann", "Otto", "Peters", "Pohl", "Richter", "Roth",
    "Sauer", "Schaefer", "Schmid", "Schmidt", "Schmitt", "Schmitz", "Schneider", "Scholz",
    "Schreiber", "Schroeder", "Schubert", "Schulte", "Schulz", "Schulze", "Schumacher", "Schuster",
    "Schwarz", "Seidel", "Simon", "Sommer", "Stein", "Thomas", "Vogel", "Vogt",
    "Voigt", "Walter", "Weber", "Weiss", "Werner", "Wagner", "Wolf", "Wolff",
    "Winkler", "Winter", "Zimmermann", "Ziegler", "Kuehn", "Lindner", "Ebert", "Haase",
    "Brinkmann", "Dahl", "Eckert", "Falk", "Gerber", "Hesse", "Jansen", "Kessler",
];

/// Stems and endings of toponymic and occupational surnames. Every
/// stem/ending combination is a last name.
const SURNAME_STEMS: &[&str] = &[
    "Adler", "Ahorn", "Alt", "Amsel", "Apfel", "Bern", "Birk", "Blum",
    "Brand", "Breit", "Brink", "Buch", "Burg", "Dorn", "Eber", "Eck",
    "Edel", "Eich", "Eisen", "Elm", "Engel", "Erl", "Falk", "Feld",
    "Fels", "Fichten", "Fink", "Fisch", "Frei", "Fried", "Gold", "Grab",
    "Gruen", "Hag", "Hahn", "Hart", "Hassel", "Heid", "Hell", "Herz",
    "Hirsch", "Hoch", "Hof", "Holl", "Horn", "Kalt", "Kamp", "Kessel",
    "Kirch", "Klee", "Kling", "Kranz", "Kreuz", "Lamb", "Lang", "Lauter",
    "Lehn", "Lich", "Lieben", "Linden", "Mart", "Mittel", "Moos", "Neu",
    "Nord", "Ober", "Oster", "Ross", "Rosen", "Roth", "Sand", "Schoen",
    "Schwarz", "Seel", "Sonnen", "Stein", "Stern", "Thal", "Wald", "Weiden",
];

const SURNAME_ENDINGS: &[&str] = &[
    "bach", "bauer", "beck", "berg", "berger", "brand", "brink", "bruch",
    "brunner", "burg", "busch", "dorf", "dorfer", "feld", "felder", "fels",
    "furt", "gart", "graf", "haber", "hagen", "hammer", "hardt", "hausen",
    "hauser", "heim", "heimer", "hof", "hofer", "holz", "horst", "huber",
    "kamp", "kemper", "kirch", "kircher", "kranz", "land", "lehner", "ling",
    "mann", "maier", "meier", "meister", "moser", "mueller", "reiter", "ried",
    "ring", "roth", "schmidt", "stadt", "stein", "steiner", "stetter", "thal",
    "thaler", "wald", "walder", "weber", "wein", "wieser", "winkel", "wirth",
    "zeller",
];

static COMPOSED_LAST_NAMES: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut names = Vec::with_capacity(SURNAME_STEMS.len() * SURNAME_ENDINGS.len());
    for stem in SURNAME_STEMS {
        let lower = stem.to_ascii_lowercase();
        for ending in SURNAME_ENDINGS {
            // Skip stuttering pairs such as "Hofhof" or "Steinsteiner".
            if ending.starts_with(lower.as_str()) {
                continue;
            }
            names.push(format!("{stem}{ending}"));
        }
    }
    names
});

/// Ordered, duplicate-free first- and last-name pools.
#[derive(Debug, Clone)]
pub struct NamePools<'a> {
    first: Vec<&'a str>,
    last: Vec<&'a str>,
}

impl<'a> NamePools<'a> {
    /// Build pools from already-combined first and last name lists.
    pub fn new(first: &[&'a str], last: &[&'a str]) -> Self {
        Self {
            first: dedup_ordered(first.iter().copied()),
            last: dedup_ordered(last.iter().copied()),
        }
    }

    /// Build pools from gender-tagged first-name lists plus last names.
    pub fn from_lists(male: &[&'a str], female: &[&'a str], last: &[&'a str]) -> Self {
        Self {
            first: dedup_ordered(male.iter().chain(female).copied()),
            last: dedup_ordered(last.iter().copied()),
        }
    }

    pub fn first(&self) -> &[&'a str] {
        &self.first
    }

    pub fn last(&self) -> &[&'a str] {
        &self.last
    }

    /// Number of distinct (first, last) pairs, or `None` on overflow.
    pub fn capacity(&self) -> Option<usize> {
        self.first.len().checked_mul(self.last.len())
    }
}

/// The name pools shipped with the binary.
pub fn builtin() -> NamePools<'static> {
    let last: Vec<&'static str> = LAST_NAMES
        .iter()
        .copied()
        .chain(COMPOSED_LAST_NAMES.iter().map(String::as_str))
        .collect();
    let pools = NamePools::from_lists(MALE_FIRST_NAMES, FEMALE_FIRST_NAMES, &last);
    debug!(
        first = pools.first.len(),
        last = pools.last.len(),
        "loaded built-in name pools"
    );
    pools
}

fn dedup_ordered<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.filter(|name| seen.insert(*name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lists_merges_first_names_in_first_seen_order() {
        let pools = NamePools::from_lists(&["Kim", "Tom"], &["Anna", "Kim", "Eva"], &["Bauer"]);
        assert_eq!(pools.first(), &["Kim", "Tom", "Anna", "Eva"]);
        assert_eq!(pools.last(), &["Bauer"]);
    }

    #[test]
    fn new_dedups_last_names() {
        let pools = NamePools::new(&["Anna"], &["Cole", "Drake", "Cole"]);
        assert_eq!(pools.last(), &["Cole", "Drake"]);
        assert_eq!(pools.capacity(), Some(2));
    }

    #[test]
    fn builtin_pools_have_no_duplicates() {
        let pools = builtin();
        let first: HashSet<_> = pools.first().iter().collect();
        let last: HashSet<_> = pools.last().iter().collect();
        assert_eq!(first.len(), pools.first().len());
        assert_eq!(last.len(), pools.last().len());
    }

    #[test]
    fn builtin_pools_drop_shared_first_names() {
        let pools = builtin();
        // Kim, Luca, Robin and Sascha appear in both gender lists.
        assert_eq!(
            pools.first().len(),
            MALE_FIRST_NAMES.len() + FEMALE_FIRST_NAMES.len() - 4
        );
    }

    #[test]
    fn builtin_pools_are_ascii_and_comma_free() {
        let pools = builtin();
        for name in pools.first().iter().chain(pools.last()) {
            assert!(name.is_ascii(), "{name} is not ASCII");
            assert!(!name.contains(',') && !name.contains(' '), "{name}");
        }
    }

    #[test]
    fn builtin_capacity_covers_million_person_runs() {
        assert!(builtin().capacity().unwrap() >= 1_000_000);
    }

    #[test]
    fn composed_last_names_skip_stuttering_pairs() {
        let pools = builtin();
        assert!(pools.last().contains(&"Steinbach"));
        assert!(pools.last().contains(&"Rosenfeld"));
        assert!(!pools.last().contains(&"Hofhof"));
        assert!(!pools.last().contains(&"Steinsteiner"));
    }

    #[test]
    fn builtin_is_stable_across_calls() {
        assert_eq!(builtin().last(), builtin().last());
    }
}
