//! Asset construction from mod document entries

use serde_json::Value;
use crate::asset::{Asset, Board, Deck, Dice, MaterialMaker, PhysicsKind};
use crate::error::{Error, Result};
use crate::loader::json::{self, Object};
use crate::tabletop_warn;

const SOURCE: &str = "tabletop::AssetParser";

impl MaterialMaker {
    /// Read `tex`, `tex_n`, `tex_shininess` and `tex_transparent`
    ///
    /// Shininess outside (0, 1] leaves the maker non-specular.
    pub fn from_json(object: &Object) -> Self {
        let mut maker = MaterialMaker::with_paths(
            json::optional(SOURCE, object, "tex", "a string", json::to_string),
            json::optional(SOURCE, object, "tex_n", "a string", json::to_string),
        );
        if let Some(shininess) = json::optional(SOURCE, object, "tex_shininess", "a number", json::to_f32) {
            if !maker.set_shininess(shininess) {
                tabletop_warn!(SOURCE, "Ignoring tex_shininess {} outside (0, 1]", shininess);
            }
        }
        maker.transparent = json::optional(SOURCE, object, "tex_transparent", "a boolean", Value::as_bool)
            .unwrap_or(false);
        maker
    }
}

impl Deck {
    /// Requires `back` and `cards`; `face_up` defaults to false
    pub fn from_json(object: &Object) -> Result<Self> {
        let back = json::required_str(object, "back")?.to_string();
        let cards = match object.get("cards") {
            Some(value) => json::to_strings(value)
                .ok_or_else(|| Error::Parse("'cards' must be an array of strings".to_string()))?,
            None => return Err(Error::Parse("missing key 'cards'".to_string())),
        };
        let face_up = json::optional(SOURCE, object, "face_up", "a boolean", Value::as_bool)
            .unwrap_or(false);
        Ok(Deck { back, cards, face_up })
    }
}

impl Dice {
    /// Every key is optional; the material is read from the same object
    pub fn from_json(object: &Object) -> Self {
        let defaults = Dice::default();
        let physics = json::optional(SOURCE, object, "physics", "\"box\" or \"model\"", |value| {
            value.as_str().and_then(PhysicsKind::from_name)
        });
        Dice {
            model: json::optional(SOURCE, object, "model", "a string", json::to_string),
            model_scale: json::optional(SOURCE, object, "model_scale", "a number", json::to_f32)
                .unwrap_or(defaults.model_scale),
            material: MaterialMaker::from_json(object),
            physics_model: json::optional(SOURCE, object, "physics_model", "a string", json::to_string),
            physics: physics.unwrap_or(defaults.physics),
        }
    }
}

impl Board {
    /// Read `texture` and `texture_n`; both are optional
    pub fn from_json(object: &Object) -> Self {
        Board {
            material: MaterialMaker::with_paths(
                json::optional(SOURCE, object, "texture", "a string", json::to_string),
                json::optional(SOURCE, object, "texture_n", "a string", json::to_string),
            ),
        }
    }
}

/// Build the asset described by one `assets` entry
///
/// Returns `Ok(None)` for an unrecognized `type`, which callers skip.
pub fn parse_asset(name: &str, value: &Value) -> Result<Option<Asset>> {
    let object = json::as_object(value, &format!("asset '{}'", name))?;
    let kind = json::required_str(object, "type")?;
    match kind {
        "deck" => Deck::from_json(object).map(|deck| Some(Asset::Deck(deck))),
        "dice" => Ok(Some(Asset::Dice(Dice::from_json(object)))),
        "board" => Ok(Some(Asset::Board(Board::from_json(object)))),
        other => {
            tabletop_warn!(SOURCE, "Skipping asset '{}': unknown type '{}'", name, other);
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "asset_parser_tests.rs"]
mod tests;
