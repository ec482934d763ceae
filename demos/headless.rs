//! Runs the meadow scene without a window for a few simulated seconds and
//! prints where every animated entity ended up.
//!
//! ```text
//! cargo run --example headless -- [params.json]
//! ```

use std::thread;

use glam::{Affine3A, Vec2, Vec3};
use meadow::{App, FixedStepClock, PivotGate, SceneParams, SceneVariant};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let params = match std::env::args().nth(1) {
        Some(path) => SceneParams::from_json_file(path)?,
        None => SceneParams {
            seed: Some(42),
            ..Default::default()
        },
    };

    // 1. First-person walk-through: push the stick forward for two seconds
    let mut app = App::new(&params)?;
    let mut clock = FixedStepClock::from_fps(60.0);
    app.input_mut().set_joystick_axis(Vec2::new(0.0, 1.0));
    app.run_frames(&mut clock, 120);
    app.input_mut().set_joystick_axis(Vec2::ZERO);
    app.run_frames(&mut clock, 60);

    println!("first person camera at {}", app.camera().transform.position);
    for key in app.scene().animated_keys() {
        if let Some(entity) = app.scene().get(key) {
            println!(
                "  {:<10} position {:>28}  spin {:.3}",
                entity.name(),
                entity.position().to_string(),
                entity.rotation().y
            );
        }
    }

    // 2. Orbitable variant, pivoting around a model that "loads" on another thread
    let orbit_params = SceneParams {
        variant: SceneVariant::Orbitable,
        orbit_ball: Some(Default::default()),
        camera: None,
        ..params
    };
    let (loader, gate) = PivotGate::pending();
    let mut app = App::new(&orbit_params)?.with_pivot(gate);

    let handle = thread::spawn(move || {
        loader.resolve(Affine3A::from_translation(Vec3::new(0.0, 1.0, 0.0)));
    });

    let mut clock = FixedStepClock::from_fps(60.0);
    app.run_frames(&mut clock, 30);
    handle.join().map_err(|_| anyhow::anyhow!("model loader thread panicked"))?;
    app.run_frames(&mut clock, 150);

    println!(
        "orbit camera at {} around {} (pivot resolved: {})",
        app.camera().transform.position,
        app.rig().target(),
        app.pivot().is_resolved()
    );

    Ok(())
}
