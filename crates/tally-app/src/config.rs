use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

use tally_core::model::card::parse_card_list;
use tally_core::model::deck::TOTAL_CARDS;
use tally_core::model::player::PlayerState;
use tally_core::table::TableState;

pub const DEFAULT_HAND_SIZE: u32 = 10;

/// Table description loaded from YAML. Card fields are free text in the
/// same shape the engine's normalizer accepts: entries separated by commas
/// or newlines, unparseable entries silently dropped.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TableConfig {
    #[serde(default = "default_hand_size")]
    pub hand_size: u32,
    #[serde(default)]
    pub global_cards: String,
    pub players: Vec<PlayerConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PlayerConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub known_hand: String,
    #[serde(default)]
    pub discarded: String,
    /// Manual unknown-card count; omitted means derive it from the hand
    /// size and the known hand.
    #[serde(default)]
    pub unknown: Option<u32>,
}

fn default_hand_size() -> u32 {
    DEFAULT_HAND_SIZE
}

impl TableConfig {
    /// Load and validate a table description from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let cfg: TableConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.hand_size == 0 {
            return Err(ValidationError::InvalidField {
                field: "hand_size".to_string(),
                message: "hand size must be greater than zero".to_string(),
            });
        }

        if self.players.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "players".to_string(),
                message: "at least one player is required".to_string(),
            });
        }

        for (index, player) in self.players.iter().enumerate() {
            if let Some(unknown) = player.unknown
                && unknown > TOTAL_CARDS
            {
                return Err(ValidationError::InvalidField {
                    field: format!("players[{index}].unknown"),
                    message: format!("unknown count exceeds the {TOTAL_CARDS}-card deck"),
                });
            }
        }

        Ok(())
    }

    /// Build the engine input: parse every free-text card field.
    pub fn to_table(&self) -> TableState {
        let players = self
            .players
            .iter()
            .map(|player| PlayerState {
                name: player.name.clone(),
                known_hand: parse_card_list(&player.known_hand),
                discarded: parse_card_list(&player.discarded),
                unknown_override: player.unknown,
            })
            .collect();

        TableState {
            hand_size: self.hand_size,
            global_observed: parse_card_list(&self.global_cards),
            players,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read table config at {path}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse table config at {path}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid table config at {path}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
