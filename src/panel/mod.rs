//! Debug control panel seam.
//!
//! [`ControlPanel`] is the shape of the widget library the host embeds:
//! folders holding color pickers and numeric sliders, each reporting edits
//! through an `on_change` callback. [`HeadlessPanel`] implements it without
//! any UI so the binary and tests can drive edits directly.

pub mod binding;

pub use binding::bind_material_panel;

use rustc_hash::FxHashMap;

use crate::material::Color;

/// Identifies a folder created by [`ControlPanel::add_folder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FolderId(pub u32);

/// Slider bounds. Edits are clamped into `[min, max]` by the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange {
    /// Lowest accepted value.
    pub min: f32,
    /// Highest accepted value.
    pub max: f32,
    /// Slider increment.
    pub step: f32,
}

impl NumberRange {
    /// The `[0, 1]` range used for every physically based material scalar.
    pub const UNIT: NumberRange = NumberRange {
        min: 0.0,
        max: 1.0,
        step: 0.01,
    };

    /// Clamp `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Callback fired when a color control is edited.
pub type ColorCallback = Box<dyn FnMut(Color)>;
/// Callback fired when a number control is edited.
pub type NumberCallback = Box<dyn FnMut(f32)>;

/// Widget library surface used by the parameter binding.
pub trait ControlPanel {
    /// Create a named folder.
    fn add_folder(&mut self, name: &str) -> FolderId;

    /// Add a color picker to `folder`.
    fn add_color_control(
        &mut self,
        folder: FolderId,
        label: &str,
        initial: Color,
        on_change: ColorCallback,
    );

    /// Add a numeric slider to `folder`.
    fn add_number_control(
        &mut self,
        folder: FolderId,
        label: &str,
        initial: f32,
        range: NumberRange,
        on_change: NumberCallback,
    );
}

struct ColorControl {
    value: Color,
    on_change: ColorCallback,
}

struct NumberControl {
    value: f32,
    range: NumberRange,
    on_change: NumberCallback,
}

/// In-memory panel. Edits go through [`set_color`](Self::set_color) and
/// [`set_number`](Self::set_number), which fire the bound callback
/// synchronously.
#[derive(Default)]
pub struct HeadlessPanel {
    folders: Vec<String>,
    colors: FxHashMap<(FolderId, String), ColorControl>,
    numbers: FxHashMap<(FolderId, String), NumberControl>,
}

impl HeadlessPanel {
    /// Empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folder by name.
    #[must_use]
    pub fn folder(&self, name: &str) -> Option<FolderId> {
        self.folders
            .iter()
            .position(|f| f == name)
            .map(|i| FolderId(i as u32))
    }

    /// Number of controls across all folders.
    #[must_use]
    pub fn control_count(&self) -> usize {
        self.colors.len() + self.numbers.len()
    }

    /// Current value of a number control.
    #[must_use]
    pub fn number(&self, folder: FolderId, label: &str) -> Option<f32> {
        self.numbers
            .get(&(folder, label.to_owned()))
            .map(|c| c.value)
    }

    /// Current value of a color control.
    #[must_use]
    pub fn color(&self, folder: FolderId, label: &str) -> Option<Color> {
        self.colors.get(&(folder, label.to_owned())).map(|c| c.value)
    }

    /// Edit a number control as a user dragging its slider would. The value
    /// is clamped to the control's range. Returns the value actually
    /// written, or `None` if no such control exists.
    pub fn set_number(
        &mut self,
        folder: FolderId,
        label: &str,
        value: f32,
    ) -> Option<f32> {
        let Some(control) = self.numbers.get_mut(&(folder, label.to_owned()))
        else {
            log::warn!("no number control '{label}' in folder {folder:?}");
            return None;
        };
        let value = control.range.clamp(value);
        control.value = value;
        (control.on_change)(value);
        Some(value)
    }

    /// Edit a color control. Returns `false` if no such control exists.
    pub fn set_color(
        &mut self,
        folder: FolderId,
        label: &str,
        value: Color,
    ) -> bool {
        let Some(control) = self.colors.get_mut(&(folder, label.to_owned()))
        else {
            log::warn!("no color control '{label}' in folder {folder:?}");
            return false;
        };
        control.value = value;
        (control.on_change)(value);
        true
    }
}

impl ControlPanel for HeadlessPanel {
    fn add_folder(&mut self, name: &str) -> FolderId {
        if let Some(existing) = self.folder(name) {
            return existing;
        }
        self.folders.push(name.to_owned());
        FolderId((self.folders.len() - 1) as u32)
    }

    fn add_color_control(
        &mut self,
        folder: FolderId,
        label: &str,
        initial: Color,
        on_change: ColorCallback,
    ) {
        let _ = self.colors.insert(
            (folder, label.to_owned()),
            ColorControl {
                value: initial,
                on_change,
            },
        );
    }

    fn add_number_control(
        &mut self,
        folder: FolderId,
        label: &str,
        initial: f32,
        range: NumberRange,
        on_change: NumberCallback,
    ) {
        let _ = self.numbers.insert(
            (folder, label.to_owned()),
            NumberControl {
                value: range.clamp(initial),
                range,
                on_change,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn folders_are_deduplicated_by_name() {
        let mut panel = HeadlessPanel::new();
        let a = panel.add_folder("Body");
        let b = panel.add_folder("Glass");
        assert_ne!(a, b);
        assert_eq!(panel.add_folder("Body"), a);
        assert_eq!(panel.folder("Glass"), Some(b));
        assert_eq!(panel.folder("Wheels"), None);
    }

    #[test]
    fn number_edits_are_clamped_and_fire_callback() {
        let mut panel = HeadlessPanel::new();
        let folder = panel.add_folder("f");
        let seen = Rc::new(Cell::new(-1.0));
        let sink = Rc::clone(&seen);
        panel.add_number_control(
            folder,
            "x",
            0.5,
            NumberRange::UNIT,
            Box::new(move |v| sink.set(v)),
        );

        assert_eq!(panel.set_number(folder, "x", 1.7), Some(1.0));
        assert_eq!(seen.get(), 1.0);
        assert_eq!(panel.number(folder, "x"), Some(1.0));
        assert_eq!(panel.set_number(folder, "missing", 0.2), None);
    }

    #[test]
    fn color_edits_fire_callback() {
        let mut panel = HeadlessPanel::new();
        let folder = panel.add_folder("f");
        let seen = Rc::new(Cell::new(Color::WHITE));
        let sink = Rc::clone(&seen);
        panel.add_color_control(
            folder,
            "color",
            Color::WHITE,
            Box::new(move |c| sink.set(c)),
        );
        let blue = Color::from_hex(0x0000ff);
        assert!(panel.set_color(folder, "color", blue));
        assert_eq!(seen.get(), blue);
        assert!(!panel.set_color(folder, "tint", blue));
    }
}
