use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::class::CharacterClass;
use super::types::{clamp_crit, Character};
use crate::core::constants::{BASE_CRIT_CHANCE, SAVE_FILE_EXTENSION, SAVE_FILE_PREFIX};
use crate::items::equipment::Equipment;
use crate::items::inventory::Inventory;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Fichier de sauvegarde non trouve: {0}")]
    NotFound(String),
    #[error("Erreur d'entree/sortie: {0}")]
    Io(#[from] io::Error),
    #[error("Sauvegarde corrompue: {0}")]
    Corrupted(#[from] serde_json::Error),
    #[error("Sauvegarde invalide: {0}")]
    Invalid(String),
    #[error("Impossible de trouver le dossier personnel")]
    NoHomeDir,
}

/// On-disk save file. Stat fields that depend on the class are optional so
/// hand-edited or older files still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveRecord {
    name: String,
    char_class: String,
    #[serde(default)]
    max_hp: Option<u32>,
    #[serde(default)]
    hp: Option<u32>,
    #[serde(default)]
    base_attack: Option<u32>,
    #[serde(default)]
    base_defense: Option<u32>,
    #[serde(default)]
    crit_chance: Option<f64>,
    #[serde(default)]
    xp: u32,
    #[serde(default = "default_level")]
    level: u32,
    #[serde(default)]
    inventory: Inventory,
    #[serde(default)]
    equipment: Equipment,
    #[serde(default)]
    avatar_file: Option<String>,
    #[serde(default)]
    gold: u32,
    #[serde(default = "default_level")]
    stage: u32,
    #[serde(default)]
    discovered_shop_items: Vec<String>,
    #[serde(default)]
    last_save_time: i64,
}

fn default_level() -> u32 {
    1
}

/// A session restored from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGame {
    pub character: Character,
    pub stage: u32,
    pub discovered_shop_items: Vec<String>,
}

/// One entry of the load screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub name: String,
    pub filename: String,
    pub class_name: String,
    pub level: u32,
    pub stage: u32,
    pub last_save_time: i64,
    pub is_corrupted: bool,
}

impl SaveRecord {
    fn from_session(character: &Character, stage: u32, discovered: &[String]) -> Self {
        Self {
            name: character.name.clone(),
            char_class: character.class.name().to_string(),
            max_hp: Some(character.max_hp),
            hp: Some(character.hp),
            base_attack: Some(character.base_attack),
            base_defense: Some(character.base_defense),
            crit_chance: Some(character.crit_chance),
            xp: character.xp,
            level: character.level,
            inventory: character.inventory.clone(),
            equipment: character.equipment.clone(),
            avatar_file: Some(character.avatar_file().to_string()),
            gold: character.gold,
            stage,
            discovered_shop_items: discovered.to_vec(),
            last_save_time: chrono::Utc::now().timestamp(),
        }
    }

    fn into_game(self) -> Result<LoadedGame, SaveError> {
        let class = CharacterClass::from_name(&self.char_class)
            .ok_or_else(|| SaveError::Invalid(format!("classe inconnue '{}'", self.char_class)))?;
        let stats = class.base_stats();

        let max_hp = self.max_hp.unwrap_or(stats.max_hp).max(1);
        let character = Character {
            name: self.name,
            class,
            max_hp,
            hp: self.hp.unwrap_or(max_hp).min(max_hp),
            base_attack: self.base_attack.unwrap_or(stats.attack),
            base_defense: self.base_defense.unwrap_or(stats.defense),
            crit_chance: clamp_crit(self.crit_chance.unwrap_or(BASE_CRIT_CHANCE)),
            xp: self.xp,
            level: self.level.max(1),
            gold: self.gold,
            inventory: self.inventory,
            equipment: self.equipment,
        };

        Ok(LoadedGame {
            character,
            stage: self.stage.max(1),
            discovered_shop_items: self.discovered_shop_items,
        })
    }
}

/// Reads and writes one JSON save file per hero.
pub struct CharacterManager {
    save_dir: PathBuf,
}

impl CharacterManager {
    /// Uses `~/.ascension/saves`, creating it if needed.
    pub fn new() -> Result<Self, SaveError> {
        let home_dir = dirs::home_dir().ok_or(SaveError::NoHomeDir)?;
        let save_dir = home_dir.join(".ascension").join("saves");
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    pub fn with_dir(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
        }
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Writes the session and returns the sanitized name used for the file.
    pub fn save_game(
        &self,
        character: &Character,
        stage: u32,
        discovered_shop_items: &[String],
    ) -> Result<String, SaveError> {
        let record = SaveRecord::from_session(character, stage, discovered_shop_items);
        let json = serde_json::to_string_pretty(&record)?;

        fs::create_dir_all(&self.save_dir)?;
        let safe = sanitize_name(&character.name);
        fs::write(self.save_dir.join(save_file_name(&character.name)), json)?;

        Ok(safe)
    }

    pub fn load_game(&self, filename: &str) -> Result<LoadedGame, SaveError> {
        let filepath = self.save_dir.join(filename);
        if !filepath.exists() {
            return Err(SaveError::NotFound(filename.to_string()));
        }

        let json = fs::read_to_string(filepath)?;
        let record: SaveRecord = serde_json::from_str(&json)?;
        record.into_game()
    }

    /// Every save in the directory, newest first. Files that fail to parse are
    /// listed as corrupted so they can still be deleted.
    pub fn list_saves(&self) -> Result<Vec<SaveSummary>, SaveError> {
        let mut saves = Vec::new();

        if !self.save_dir.exists() {
            return Ok(saves);
        }

        for entry in fs::read_dir(&self.save_dir)? {
            let path = entry?.path();

            if path.extension().and_then(|s| s.to_str()) != Some(SAVE_FILE_EXTENSION) {
                continue;
            }

            let filename = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string();
            if !filename.starts_with(SAVE_FILE_PREFIX) {
                continue;
            }

            saves.push(self.summarize(&path, filename));
        }

        saves.sort_by(|a, b| {
            b.last_save_time
                .cmp(&a.last_save_time)
                .then_with(|| a.filename.cmp(&b.filename))
        });

        Ok(saves)
    }

    fn summarize(&self, path: &Path, filename: String) -> SaveSummary {
        let parsed = fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str::<SaveRecord>(&json).ok())
            .filter(|record| CharacterClass::from_name(&record.char_class).is_some());

        match parsed {
            Some(record) => SaveSummary {
                name: record.name,
                filename,
                class_name: record.char_class,
                level: record.level,
                stage: record.stage,
                last_save_time: record.last_save_time,
                is_corrupted: false,
            },
            None => SaveSummary {
                name: "[CORROMPU]".to_string(),
                filename,
                class_name: String::new(),
                level: 0,
                stage: 0,
                last_save_time: 0,
                is_corrupted: true,
            },
        }
    }

    pub fn has_saves(&self) -> bool {
        self.list_saves().map(|s| !s.is_empty()).unwrap_or(false)
    }

    pub fn delete_save(&self, filename: &str) -> Result<(), SaveError> {
        let filepath = self.save_dir.join(filename);
        if !filepath.exists() {
            return Err(SaveError::NotFound(filename.to_string()));
        }
        fs::remove_file(filepath)?;
        Ok(())
    }
}

/// Keeps only alphanumeric characters; falls back to "default".
pub fn sanitize_name(name: &str) -> String {
    let safe: String = name.chars().filter(|c| c.is_alphanumeric()).collect();
    if safe.is_empty() {
        "default".to_string()
    } else {
        safe
    }
}

pub fn save_file_name(name: &str) -> String {
    format!(
        "{}{}.{}",
        SAVE_FILE_PREFIX,
        sanitize_name(name),
        SAVE_FILE_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::{Item, ItemKind};
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn new_for_test() -> CharacterManager {
        let id = TEST_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "ascension_manager_test_{}_{}",
            std::process::id(),
            id
        ));
        let _ = fs::remove_dir_all(&dir);
        CharacterManager::with_dir(dir)
    }

    fn write_raw(manager: &CharacterManager, filename: &str, json: &str) {
        fs::create_dir_all(manager.save_dir()).unwrap();
        fs::write(manager.save_dir().join(filename), json).unwrap();
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Heros"), "Heros");
        assert_eq!(sanitize_name("Jean Pierre!"), "JeanPierre");
        assert_eq!(sanitize_name("Élodie"), "Élodie");
        assert_eq!(sanitize_name("../.."), "default");
        assert_eq!(sanitize_name(""), "default");
    }

    #[test]
    fn test_save_file_name() {
        assert_eq!(save_file_name("Le Roi"), "save_LeRoi.json");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let manager = new_for_test();
        let mut hero = Character::new("Aria", CharacterClass::Mage);
        hero.level = 4;
        hero.xp = 33;
        hero.gold = 120;
        hero.hp = 40;
        hero.crit_chance = 0.13;
        hero.inventory.potion = 3;
        hero.inventory
            .add_item(Item::new("Casque", ItemKind::Helmet { defense: 1 }, ""));
        hero.equipment
            .equip(Item::new("Epée", ItemKind::Weapon { attack: 3 }, ""))
            .unwrap();
        let discovered = vec!["Potion Standard".to_string()];

        let safe = manager.save_game(&hero, 7, &discovered).unwrap();
        assert_eq!(safe, "Aria");

        let loaded = manager.load_game("save_Aria.json").unwrap();
        assert_eq!(loaded.character, hero);
        assert_eq!(loaded.stage, 7);
        assert_eq!(loaded.discovered_shop_items, discovered);
    }

    #[test]
    fn test_saved_json_shape() {
        let manager = new_for_test();
        let hero = Character::new("Shape", CharacterClass::Warrior);
        manager.save_game(&hero, 1, &[]).unwrap();

        let json = fs::read_to_string(manager.save_dir().join("save_Shape.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["char_class"], "Guerrier");
        assert_eq!(value["avatar_file"], "hero1.png");
        assert_eq!(value["inventory"]["potion"], 0);
        assert!(value["equipment"]["weapon"].is_null());
        assert!(value["equipment"]["greaves"].is_null());
    }

    #[test]
    fn test_load_missing_file() {
        let manager = new_for_test();
        assert!(matches!(
            manager.load_game("save_Nobody.json"),
            Err(SaveError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_malformed_json() {
        let manager = new_for_test();
        write_raw(&manager, "save_Broken.json", "{ not json");
        assert!(matches!(
            manager.load_game("save_Broken.json"),
            Err(SaveError::Corrupted(_))
        ));
    }

    #[test]
    fn test_load_unknown_class() {
        let manager = new_for_test();
        write_raw(
            &manager,
            "save_Rogue.json",
            r#"{"name": "Rogue", "char_class": "Voleur"}"#,
        );
        assert!(matches!(
            manager.load_game("save_Rogue.json"),
            Err(SaveError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_minimal_record_fills_class_defaults() {
        let manager = new_for_test();
        write_raw(
            &manager,
            "save_Old.json",
            r#"{"name": "Old", "char_class": "Tank", "hp": 500, "crit_chance": 0.9,
                "equipment": {"armor": {"name": "Plastron", "type": "chest", "defense": 2, "desc": "", "cost": 0}}}"#,
        );

        let loaded = manager.load_game("save_Old.json").unwrap();
        let c = loaded.character;
        assert_eq!(c.max_hp, 120);
        assert_eq!(c.hp, 120);
        assert_eq!(c.base_attack, 10);
        assert_eq!(c.crit_chance, 0.5);
        assert_eq!(c.equipment.chest.unwrap().name, "Plastron");
        assert_eq!(loaded.stage, 1);
    }

    #[test]
    fn test_list_saves_sorted_and_flags_corrupted() {
        let manager = new_for_test();
        write_raw(
            &manager,
            "save_A.json",
            r#"{"name": "A", "char_class": "Mage", "level": 2, "stage": 3, "last_save_time": 1000}"#,
        );
        write_raw(
            &manager,
            "save_B.json",
            r#"{"name": "B", "char_class": "Tank", "last_save_time": 2000}"#,
        );
        write_raw(&manager, "save_C.json", "garbage");
        write_raw(&manager, "notes.json", "{}");

        let list = manager.list_saves().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].name, "B");
        assert_eq!(list[1].name, "A");
        assert_eq!(list[1].level, 2);
        assert_eq!(list[1].stage, 3);
        assert!(list[2].is_corrupted);
        assert_eq!(list[2].filename, "save_C.json");
    }

    #[test]
    fn test_list_saves_missing_dir_is_empty() {
        let manager = new_for_test();
        assert!(manager.list_saves().unwrap().is_empty());
        assert!(!manager.has_saves());
    }

    #[test]
    fn test_delete_save() {
        let manager = new_for_test();
        let hero = Character::new("Gone", CharacterClass::Tank);
        manager.save_game(&hero, 1, &[]).unwrap();
        assert!(manager.has_saves());

        manager.delete_save("save_Gone.json").unwrap();
        assert!(!manager.has_saves());
        assert!(matches!(
            manager.delete_save("save_Gone.json"),
            Err(SaveError::NotFound(_))
        ));
    }
}
