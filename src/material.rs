//! Shared surface materials for body paint and glass.
//!
//! Each [`SharedMaterial`] is referenced by every mesh of its kind, so one
//! panel edit is visible on all of them at the next draw. Everything runs on
//! the frame thread; the lock only exists so a scene built on a loader
//! thread can carry its material handles across.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::MaterialOptions;

/// Linear RGB color with components in [0, 1].
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema, Default,
)]
pub struct Color(pub [f32; 3]);

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color([1.0, 1.0, 1.0]);

    /// Build from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self([channel(16), channel(8), channel(0)])
    }

    /// Pack back into `0xRRGGBB`, rounding each channel.
    #[must_use]
    pub fn to_hex(self) -> u32 {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u32);
        (r << 16) | (g << 8) | b
    }
}

/// Scalar material inputs that the control panel exposes as sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    /// How metallic the surface is.
    Metalness,
    /// Microfacet roughness of the base layer.
    Roughness,
    /// Strength of the clear lacquer layer.
    Clearcoat,
    /// Roughness of the clear lacquer layer.
    ClearcoatRoughness,
    /// Fraction of light transmitted through the surface.
    Transmission,
}

impl ScalarField {
    /// Every scalar field, in panel order.
    pub const ALL: [ScalarField; 5] = [
        Self::Metalness,
        Self::Roughness,
        Self::Clearcoat,
        Self::ClearcoatRoughness,
        Self::Transmission,
    ];

    /// Panel label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Metalness => "metalness",
            Self::Roughness => "roughness",
            Self::Clearcoat => "clearcoat",
            Self::ClearcoatRoughness => "clearcoatRoughness",
            Self::Transmission => "transmission",
        }
    }
}

/// Physically based shading inputs for one material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MaterialParams {
    /// Albedo color.
    #[schemars(title = "Color")]
    pub base_color: Color,
    /// How metallic the surface is.
    #[schemars(title = "Metalness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub metalness: f32,
    /// Microfacet roughness of the base layer.
    #[schemars(title = "Roughness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub roughness: f32,
    /// Strength of the clear lacquer layer.
    #[schemars(title = "Clearcoat", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub clearcoat: f32,
    /// Roughness of the clear lacquer layer.
    #[schemars(title = "Clearcoat Roughness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub clearcoat_roughness: f32,
    /// Fraction of light transmitted through the surface.
    #[schemars(title = "Transmission", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub transmission: f32,
}

impl MaterialParams {
    /// Glossy red car paint.
    #[must_use]
    pub fn body_paint() -> Self {
        Self {
            base_color: Color::from_hex(0xff_0000),
            metalness: 1.0,
            roughness: 0.5,
            clearcoat: 1.0,
            clearcoat_roughness: 0.03,
            transmission: 0.0,
        }
    }

    /// Clear, fully transmissive glass.
    #[must_use]
    pub fn glass() -> Self {
        Self {
            base_color: Color::WHITE,
            metalness: 0.25,
            roughness: 0.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            transmission: 1.0,
        }
    }

    /// Read a scalar field.
    #[must_use]
    pub fn scalar(&self, field: ScalarField) -> f32 {
        match field {
            ScalarField::Metalness => self.metalness,
            ScalarField::Roughness => self.roughness,
            ScalarField::Clearcoat => self.clearcoat,
            ScalarField::ClearcoatRoughness => self.clearcoat_roughness,
            ScalarField::Transmission => self.transmission,
        }
    }

    /// Write a scalar field. No clamping: the panel enforces [0, 1].
    pub fn set_scalar(&mut self, field: ScalarField, value: f32) {
        let slot = match field {
            ScalarField::Metalness => &mut self.metalness,
            ScalarField::Roughness => &mut self.roughness,
            ScalarField::Clearcoat => &mut self.clearcoat,
            ScalarField::ClearcoatRoughness => &mut self.clearcoat_roughness,
            ScalarField::Transmission => &mut self.transmission,
        };
        *slot = value;
    }
}

/// A material shared by many meshes.
///
/// Cloning yields another handle to the same parameters.
#[derive(Clone)]
pub struct SharedMaterial {
    name: &'static str,
    params: Arc<RwLock<MaterialParams>>,
}

impl SharedMaterial {
    /// Wrap `params` in a new shared handle.
    #[must_use]
    pub fn new(name: &'static str, params: MaterialParams) -> Self {
        Self {
            name,
            params: Arc::new(RwLock::new(params)),
        }
    }

    /// Debug name of this material.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Snapshot of the current parameters.
    #[must_use]
    pub fn get(&self) -> MaterialParams {
        *self.read()
    }

    /// Overwrite the base color.
    pub fn set_base_color(&self, color: Color) {
        self.write().base_color = color;
    }

    /// Overwrite one scalar field.
    pub fn set_scalar(&self, field: ScalarField, value: f32) {
        self.write().set_scalar(field, value);
    }

    /// Whether both handles refer to the same material.
    #[must_use]
    pub fn ptr_eq(&self, other: &SharedMaterial) -> bool {
        Arc::ptr_eq(&self.params, &other.params)
    }

    // Params are plain data, so a poisoned lock is still readable.
    fn read(&self) -> RwLockReadGuard<'_, MaterialParams> {
        self.params.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MaterialParams> {
        self.params.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SharedMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMaterial")
            .field("name", &self.name)
            .field("params", &*self.read())
            .finish()
    }
}

/// Which shared material a mesh uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Body paint.
    Body,
    /// Window glass.
    Glass,
}

/// The two shared materials of the showroom, created once at startup.
#[derive(Debug, Clone)]
pub struct MaterialLibrary {
    body: SharedMaterial,
    glass: SharedMaterial,
}

impl MaterialLibrary {
    /// Create both materials from their configured initial values.
    #[must_use]
    pub fn from_options(options: &MaterialOptions) -> Self {
        Self {
            body: SharedMaterial::new("body", options.body),
            glass: SharedMaterial::new("glass", options.glass),
        }
    }

    /// Handle to the material of the given kind.
    #[must_use]
    pub fn get(&self, kind: MaterialKind) -> &SharedMaterial {
        match kind {
            MaterialKind::Body => &self.body,
            MaterialKind::Glass => &self.glass,
        }
    }

    /// Body paint handle.
    #[must_use]
    pub fn body(&self) -> &SharedMaterial {
        &self.body
    }

    /// Glass handle.
    #[must_use]
    pub fn glass(&self) -> &SharedMaterial {
        &self.glass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c = Color::from_hex(0x12_34ab);
        assert_eq!(c.to_hex(), 0x12_34ab);
        assert_eq!(Color::from_hex(0xff_0000).0, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn clones_share_parameters() {
        let a = SharedMaterial::new("body", MaterialParams::body_paint());
        let b = a.clone();
        a.set_scalar(ScalarField::Roughness, 0.2);
        assert_eq!(b.get().roughness, 0.2);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn library_materials_are_distinct() {
        let lib = MaterialLibrary::from_options(&MaterialOptions::default());
        assert!(!lib.body().ptr_eq(lib.glass()));
        lib.body().set_scalar(ScalarField::Metalness, 0.8);
        assert_eq!(lib.get(MaterialKind::Body).get().metalness, 0.8);
        assert_eq!(lib.glass().get().metalness, 0.25);
    }

    #[test]
    fn every_scalar_field_is_addressable() {
        let mut params = MaterialParams::glass();
        for (i, field) in ScalarField::ALL.into_iter().enumerate() {
            let v = i as f32 / 10.0;
            params.set_scalar(field, v);
            assert_eq!(params.scalar(field), v);
        }
    }
}
