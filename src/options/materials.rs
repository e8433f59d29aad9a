use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::material::{Color, MaterialParams};

/// Initial values of the two shared materials.
///
/// A preset may give only some fields of a material. The rest come from
/// that material's own base ([`MaterialParams::body_paint`] or
/// [`MaterialParams::glass`]), never from the other one.
#[derive(Debug, Clone, Serialize, PartialEq, JsonSchema)]
#[schemars(title = "Materials", inline)]
#[serde(default)]
pub struct MaterialOptions {
    /// Body paint.
    #[schemars(title = "Body")]
    pub body: MaterialParams,
    /// Window glass.
    #[schemars(title = "Glass")]
    pub glass: MaterialParams,
}

impl Default for MaterialOptions {
    fn default() -> Self {
        Self {
            body: MaterialParams::body_paint(),
            glass: MaterialParams::glass(),
        }
    }
}

/// Fields of one `[materials.*]` table as written in a preset.
#[derive(Debug, Default, Deserialize)]
struct MaterialOverrides {
    base_color: Option<Color>,
    metalness: Option<f32>,
    roughness: Option<f32>,
    clearcoat: Option<f32>,
    clearcoat_roughness: Option<f32>,
    transmission: Option<f32>,
}

impl MaterialOverrides {
    fn over(self, base: MaterialParams) -> MaterialParams {
        MaterialParams {
            base_color: self.base_color.unwrap_or(base.base_color),
            metalness: self.metalness.unwrap_or(base.metalness),
            roughness: self.roughness.unwrap_or(base.roughness),
            clearcoat: self.clearcoat.unwrap_or(base.clearcoat),
            clearcoat_roughness: self
                .clearcoat_roughness
                .unwrap_or(base.clearcoat_roughness),
            transmission: self.transmission.unwrap_or(base.transmission),
        }
    }
}

#[derive(Deserialize)]
struct MaterialTables {
    body: Option<MaterialOverrides>,
    glass: Option<MaterialOverrides>,
}

impl<'de> Deserialize<'de> for MaterialOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tables = MaterialTables::deserialize(deserializer)?;
        Ok(Self {
            body: tables
                .body
                .unwrap_or_default()
                .over(MaterialParams::body_paint()),
            glass: tables
                .glass
                .unwrap_or_default()
                .over(MaterialParams::glass()),
        })
    }
}
