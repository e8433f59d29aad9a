use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use super::renderer::Renderer;
use super::{PendingScene, ShowroomEngine};
use crate::error::ShowroomError;
use crate::material::MaterialKind;
use crate::scene::roles::{NodeRole, RoleTable};
use crate::scene::Scene;

impl<R: Renderer> ShowroomEngine<R> {
    /// Wait for a scene on `receiver`. It is polled at the start of every
    /// frame; whatever the interaction state, nothing is clickable until it
    /// delivers.
    pub fn load_scene(&mut self, receiver: PendingScene) {
        if self.pending_scene.replace(receiver).is_some() {
            log::warn!("replacing an outstanding scene load");
        }
    }

    /// Run `build` on a loader thread and wait for its scene.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Io`] if the thread cannot be spawned.
    pub fn load_scene_with<F>(&mut self, build: F) -> Result<(), ShowroomError>
    where
        F: FnOnce() -> Result<Scene, ShowroomError> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let _ = thread::Builder::new()
            .name("showroom-loader".into())
            .spawn(move || {
                // The engine may be gone by the time the scene is ready.
                let _ = tx.send(build());
            })?;
        self.load_scene(rx);
        Ok(())
    }

    /// Mount `scene`: classify its nodes, share the body and glass
    /// materials across them, and close both doors.
    pub fn attach_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.roles = RoleTable::build(&self.scene, &self.options.scene);

        for (role, kind) in [
            (NodeRole::Body, MaterialKind::Body),
            (NodeRole::Glass, MaterialKind::Glass),
        ] {
            let material = self.materials.get(kind);
            for &id in self.roles.nodes(role) {
                let _ = self.scene.assign_material(id, material.clone());
            }
        }

        // Swings in flight belonged to the previous scene's pivots.
        self.doors.reset();
        log::info!(
            "scene attached: {} nodes, {} body, {} glass",
            self.scene.len(),
            self.roles.nodes(NodeRole::Body).len(),
            self.roles.nodes(NodeRole::Glass).len()
        );
    }

    /// Attach the pending scene if the loader has delivered one.
    pub(super) fn poll_pending_scene(&mut self) {
        let Some(receiver) = &self.pending_scene else {
            return;
        };
        match receiver.try_recv() {
            Err(TryRecvError::Empty) => {}
            Ok(Ok(scene)) => {
                self.pending_scene = None;
                self.attach_scene(scene);
            }
            Ok(Err(e)) => {
                self.pending_scene = None;
                log::error!("scene load failed: {e}");
            }
            Err(TryRecvError::Disconnected) => {
                self.pending_scene = None;
                log::error!("scene loader exited without delivering a scene");
            }
        }
    }
}
