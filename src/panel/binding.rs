//! One-way binding from panel controls to a shared material.

use super::{ControlPanel, FolderId, NumberRange};
use crate::material::{ScalarField, SharedMaterial};

/// Add a folder named `folder_name` holding a color control for the base
/// color and a `[0, 1]` slider for every scalar field of `material`.
///
/// Each edit is written straight into the shared parameters, so it is
/// visible to every mesh using the material on the next draw.
pub fn bind_material_panel(
    panel: &mut dyn ControlPanel,
    folder_name: &str,
    material: &SharedMaterial,
) -> FolderId {
    let folder = panel.add_folder(folder_name);
    let initial = material.get();

    let target = material.clone();
    panel.add_color_control(
        folder,
        "color",
        initial.base_color,
        Box::new(move |color| target.set_base_color(color)),
    );

    for field in ScalarField::ALL {
        let target = material.clone();
        panel.add_number_control(
            folder,
            field.label(),
            initial.scalar(field),
            NumberRange::UNIT,
            Box::new(move |value| target.set_scalar(field, value)),
        );
    }

    log::debug!("bound material '{}' to panel folder '{folder_name}'", material.name());
    folder
}
