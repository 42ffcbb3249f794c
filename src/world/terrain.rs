//! Terrain and construction kinds

use serde::{Deserialize, Serialize};

use crate::core::error::FortressError;

/// Ground type of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainType {
    Grass,
    Dirt,
    Stone,
    Water,
    Tree,
    Empty,
}

impl TerrainType {
    /// Stone and trees can be designated for digging or chopping
    pub fn is_mineable(&self) -> bool {
        matches!(self, TerrainType::Stone | TerrainType::Tree)
    }

    /// Open ground that accepts a construction
    pub fn is_buildable(&self) -> bool {
        matches!(
            self,
            TerrainType::Empty | TerrainType::Grass | TerrainType::Dirt
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            TerrainType::Grass => "grass",
            TerrainType::Dirt => "dirt",
            TerrainType::Stone => "stone",
            TerrainType::Water => "water",
            TerrainType::Tree => "tree",
            TerrainType::Empty => "empty",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            TerrainType::Grass => '.',
            TerrainType::Dirt => '≈',
            TerrainType::Stone => '█',
            TerrainType::Water => '~',
            TerrainType::Tree => '♠',
            TerrainType::Empty => ' ',
        }
    }
}

impl std::fmt::Display for TerrainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Player-placed structure on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructionType {
    Workshop,
    Stockpile,
    Wall,
    House,
    Nursery,
}

impl ConstructionType {
    pub fn name(&self) -> &'static str {
        match self {
            ConstructionType::Workshop => "workshop",
            ConstructionType::Stockpile => "stockpile",
            ConstructionType::Wall => "wall",
            ConstructionType::House => "house",
            ConstructionType::Nursery => "nursery",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            ConstructionType::Workshop => 'W',
            ConstructionType::Stockpile => '=',
            ConstructionType::Wall => '#',
            ConstructionType::House => 'H',
            ConstructionType::Nursery => 'N',
        }
    }
}

impl std::fmt::Display for ConstructionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ConstructionType {
    type Err = FortressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "workshop" => Ok(ConstructionType::Workshop),
            "stockpile" => Ok(ConstructionType::Stockpile),
            "wall" => Ok(ConstructionType::Wall),
            "house" => Ok(ConstructionType::House),
            "nursery" => Ok(ConstructionType::Nursery),
            _ => Err(FortressError::UnknownConstruction(s.to_string())),
        }
    }
}
