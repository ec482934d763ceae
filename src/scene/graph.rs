use slotmap::{SlotMap, new_key_type};

use crate::animation::AnimationSystem;
use crate::controls::rig::CameraRigConfig;
use crate::scene::composer::SceneVariant;
use crate::scene::entity::{Entity, EntityKind, Motion};
use crate::scene::environment::Environment;
use crate::scene::transform::Transform;
use crate::utils::time::FrameTime;

new_key_type! {
    pub struct EntityKey;
}

/// The composed scene handed to the renderer.
///
/// Entities are inserted while composing and live until the graph is dropped;
/// there is no removal. Iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    entities: SlotMap<EntityKey, Entity>,
    order: Vec<EntityKey>,

    variant: SceneVariant,
    camera_rig: CameraRigConfig,
    standby_rig: CameraRigConfig,

    pub environment: Environment,
    seed: u64,
}

impl SceneGraph {
    pub(crate) fn new(variant: SceneVariant, environment: Environment, seed: u64) -> Self {
        Self {
            entities: SlotMap::with_key(),
            order: Vec::new(),
            variant,
            camera_rig: variant.rig_config(),
            standby_rig: variant.alternate().rig_config(),
            environment,
            seed,
        }
    }

    pub(crate) fn set_camera_rig(&mut self, config: CameraRigConfig) {
        self.camera_rig = config;
    }

    pub(crate) fn insert(&mut self, entity: Entity) -> EntityKey {
        let key = self.entities.insert(entity);
        self.order.push(key);
        key
    }

    #[must_use]
    pub fn get(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<(EntityKey, &Entity)> {
        self.iter().find(|(_, e)| e.name() == name)
    }

    /// All entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.order.iter().filter_map(|&key| self.entities.get(key).map(|e| (key, e)))
    }

    pub fn entities_of(&self, kind: EntityKind) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.iter().filter(move |(_, e)| e.kind() == kind)
    }

    /// Keys of the entities the animation system updates each tick.
    pub fn animated_keys(&self) -> impl Iterator<Item = EntityKey> + '_ {
        self.iter().filter(|(_, e)| e.is_animated()).map(|(key, _)| key)
    }

    /// Motion and transform of every animated entity.
    pub(crate) fn animated_mut(&mut self) -> impl Iterator<Item = (&Motion, &mut Transform)> {
        self.entities.values_mut().filter_map(Entity::motion_and_transform_mut)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn variant(&self) -> SceneVariant {
        self.variant
    }

    /// Configuration of the active camera rig.
    #[inline]
    #[must_use]
    pub fn camera_rig(&self) -> &CameraRigConfig {
        &self.camera_rig
    }

    /// Configuration of the other rig, kept for switching. Never instantiated
    /// alongside the active one.
    #[inline]
    #[must_use]
    pub fn standby_rig(&self) -> &CameraRigConfig {
        &self.standby_rig
    }

    /// Seed the motion parameters were drawn from.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advances all animated entities by one frame.
    pub fn tick(&mut self, delta: f32, elapsed: f32) {
        AnimationSystem::tick(self, FrameTime::new(delta, elapsed));
    }
}
