use crate::animation::motion::Animate;
use crate::scene::graph::SceneGraph;
use crate::utils::time::FrameTime;

/// Animation system.
///
/// Drives every animated entity of a [`SceneGraph`] once per frame. The pass
/// is O(animated entities), never allocates and has no failure modes.
pub struct AnimationSystem;

impl AnimationSystem {
    /// Advances all animated entities.
    ///
    /// # Arguments
    /// * `scene` - Scene whose animated entities are updated in place
    /// * `time` - Frame delta and absolute elapsed time (in seconds)
    pub fn tick(scene: &mut SceneGraph, time: FrameTime) {
        let mut updated = 0usize;

        for (motion, transform) in scene.animated_mut() {
            motion.animate(transform, time);
            transform.update_local_matrix();
            updated += 1;
        }

        log::trace!(
            "animation tick: dt={:.4}s t={:.4}s, {updated} entities",
            time.delta,
            time.elapsed
        );
    }
}
