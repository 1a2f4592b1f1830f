//! [`TestCorpus`] builder for corpus lookup scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary corpus root laid out the way the server expects:
/// `index.txt`, `rules/<NNN>.txt` and `glossary/<stem>.txt`.
///
/// # Example
///
/// ```rust,no_run
/// use mtg_test_utils::TestCorpus;
///
/// let fixture = TestCorpus::new();
/// fixture.add_rule("100", "100. General");
/// fixture.add_glossary_entry("combat_damage", "Damage dealt during combat.");
/// assert!(fixture.root().join("rules/100.txt").exists());
/// ```
pub struct TestCorpus {
    temp_dir: TempDir,
}

impl Default for TestCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCorpus {
    /// Create an empty corpus root with `rules/` and `glossary/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("rules")).unwrap();
        fs::create_dir_all(temp_dir.path().join("glossary")).unwrap();
        Self { temp_dir }
    }

    /// Create a corpus with a handful of real rules and glossary entries.
    pub fn populated() -> Self {
        let fixture = Self::new();
        fixture.set_index("1. Game Concepts\n100. General\n105. Colors\n2. Parts of a Card");
        fixture.add_rule(
            "100",
            "100. General\n100.1. These Magic rules apply to any Magic game with two or more players.",
        );
        fixture.add_rule(
            "105",
            "105. Colors\n105.1. There are five colors in the Magic game: white, blue, black, red, and green.",
        );
        fixture.add_glossary_entry("flying", "A keyword ability that restricts how a creature may be blocked.");
        fixture.add_glossary_entry("first_strike", "A keyword ability that alters the combat damage step.");
        fixture.add_glossary_entry("combat_damage", "Damage dealt during the combat damage step.");
        fixture.add_glossary_entry("ability", "Text on an object that explains what it does.");
        fixture
    }

    /// Return the corpus root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the glossary directory.
    pub fn glossary_dir(&self) -> PathBuf {
        self.root().join("glossary")
    }

    /// Write `rules/<number>.txt`.
    pub fn add_rule(&self, number: &str, text: &str) {
        fs::write(self.root().join("rules").join(format!("{number}.txt")), text).unwrap();
    }

    /// Write `glossary/<stem>.txt`; `stem` is the already-normalized file name.
    pub fn add_glossary_entry(&self, stem: &str, text: &str) {
        fs::write(self.glossary_dir().join(format!("{stem}.txt")), text).unwrap();
    }

    /// Write `index.txt`.
    pub fn set_index(&self, text: &str) {
        fs::write(self.root().join("index.txt"), text).unwrap();
    }

    /// Remove the glossary directory entirely.
    pub fn remove_glossary(&self) {
        fs::remove_dir_all(self.glossary_dir()).unwrap();
    }
}
