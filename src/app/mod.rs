//! Headless App
//!
//! Owns a composed scene, its camera and the active camera rig, and runs the
//! per-frame update a renderer would call once per presented frame:
//!
//! 1. poll the orbit pivot gate
//! 2. user update hook
//! 3. animation tick (entity transforms)
//! 4. camera rig update (camera transform)
//! 5. camera matrices, then clear per-frame input
//!
//! Entity and camera updates touch disjoint state, so their relative order
//! carries no meaning beyond determinism.

use glam::Vec3;

use crate::animation::AnimationSystem;
use crate::assets::PivotGate;
use crate::config::SceneParams;
use crate::controls::{CameraRig, RigInput, RigMode};
use crate::errors::Result;
use crate::scene::{Camera, SceneComposer, SceneGraph};
use crate::utils::{Clock, FpsCounter, FrameTime, Timer};

pub type UpdateFn = Box<dyn FnMut(&mut SceneGraph, &RigInput, FrameTime)>;

pub struct App {
    scene: SceneGraph,
    camera: Camera,
    rig: CameraRig,
    pivot: PivotGate,

    input: RigInput,
    timer: Timer,
    fps_counter: FpsCounter,
    update_fn: Option<UpdateFn>,

    pivot_warned: bool,
}

impl App {
    pub fn new(params: &SceneParams) -> Result<Self> {
        let scene = SceneComposer::build(params)?;
        let config = scene.camera_rig().clone();

        let mut camera = Camera::new_perspective(config.fov, 1280.0 / 720.0, 0.1, 1000.0);
        camera.transform.position = config.initial_position;
        camera.transform.look_at(config.target, Vec3::Y);
        camera.update_view_projection();

        let rig = CameraRig::from_config(&config, None);

        let mut input = RigInput::new();
        input.handle_resize(1280, 720);

        Ok(Self {
            scene,
            camera,
            rig,
            pivot: PivotGate::unbound(),
            input,
            timer: Timer::new(),
            fps_counter: FpsCounter::new(),
            update_fn: None,
            pivot_warned: false,
        })
    }

    /// Binds the orbit pivot. Takes effect immediately if already resolved.
    #[must_use]
    pub fn with_pivot(mut self, pivot: PivotGate) -> Self {
        self.pivot = pivot;
        self.pivot.poll();
        if let Ok(target) = self.pivot.target() {
            self.rig.set_pivot(target);
        }
        self
    }

    pub fn set_update_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&mut SceneGraph, &RigInput, FrameTime) + 'static,
    {
        self.update_fn = Some(Box::new(f));
        self
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.input.handle_resize(width, height);
        self.camera.set_aspect(width, height);
    }

    /// Runs one frame timed by the app's wall clock.
    pub fn update(&mut self) -> FrameTime {
        let time = self.timer.tick();
        self.step(time);
        time
    }

    /// Runs `frames` frames timed by `clock`.
    pub fn run_frames<C: Clock>(&mut self, clock: &mut C, frames: usize) {
        for _ in 0..frames {
            self.step(clock.tick());
        }
    }

    /// Runs one frame at the given time.
    pub fn step(&mut self, time: FrameTime) {
        if self.pivot.poll()
            && let Ok(target) = self.pivot.target()
        {
            log::info!("orbit pivot resolved at {target}");
            self.rig.set_pivot(target);
        }

        if self.rig.mode() == RigMode::Orbit && !self.pivot.is_resolved() && !self.pivot_warned {
            log::warn!(
                "orbit pivot unavailable{}, orbiting the scene origin",
                if self.pivot.is_pending() { " (model still loading)" } else { "" }
            );
            self.pivot_warned = true;
        }

        if let Some(update_fn) = self.update_fn.as_mut() {
            update_fn(&mut self.scene, &self.input, time);
        }

        AnimationSystem::tick(&mut self.scene, time);

        let fov = self.camera.fov_degrees();
        self.rig
            .update(&mut self.camera.transform, &self.input, fov, time.sanitized_delta());
        self.camera.update_view_projection();

        if let Some(fps) = self.fps_counter.update(time.sanitized_delta()) {
            log::debug!("fps: {fps:.1}");
        }

        self.input.end_frame();
    }

    #[inline]
    #[must_use]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    #[inline]
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    #[inline]
    #[must_use]
    pub fn pivot(&self) -> &PivotGate {
        &self.pivot
    }

    /// Input to fill in before the next frame.
    #[inline]
    pub fn input_mut(&mut self) -> &mut RigInput {
        &mut self.input
    }
}
