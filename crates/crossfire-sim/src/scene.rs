//! Spatial ray queries.
//!
//! [`RayQuery`] is the seam to the scene collaborator: given an origin and a
//! direction it yields hit records nearest-first. [`SceneGeometry`] is a
//! headless implementation that intersects rays with the spheres and boxes
//! of the simulation world, so the combat core runs without a renderer.

use glam::Vec3;
use hecs::World;

use crossfire_core::components::{Enemy, Obstacle, Player, Position, SphereCollider};
use crossfire_core::constants::{EPSILON, PLAYER_TAG, SCENERY_TAG};
use crossfire_core::error::CollaboratorError;
use crossfire_core::types::RayHit;

/// A spatial ray query against renderable geometry.
///
/// The returned sequence is finite, ordered nearest-first and consumed once.
pub trait RayQuery {
    type Hits: IntoIterator<Item = RayHit>;

    fn query_ray(&mut self, origin: Vec3, direction: Vec3) -> Result<Self::Hits, CollaboratorError>;
}

impl<Q: RayQuery + ?Sized> RayQuery for &mut Q {
    type Hits = Q::Hits;

    fn query_ray(&mut self, origin: Vec3, direction: Vec3) -> Result<Self::Hits, CollaboratorError> {
        (**self).query_ray(origin, direction)
    }
}

/// Check that a ray is usable and return its unit direction.
pub fn validate_ray(origin: Vec3, direction: Vec3) -> Result<Vec3, CollaboratorError> {
    if !origin.is_finite() {
        return Err(CollaboratorError::MalformedRay { origin, direction });
    }
    direction
        .try_normalize()
        .ok_or(CollaboratorError::MalformedRay { origin, direction })
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Sphere { center: Vec3, radius: f32 },
    Aabb { min: Vec3, max: Vec3 },
}

#[derive(Debug, Clone)]
struct SceneObject {
    tag: String,
    shape: Shape,
}

/// Headless scene made of tagged spheres and axis-aligned boxes.
#[derive(Debug, Clone, Default)]
pub struct SceneGeometry {
    objects: Vec<SceneObject>,
}

impl SceneGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the player body, every roster member and every obstacle.
    pub fn capture(world: &World) -> Self {
        let mut scene = Self::new();

        for (_, (_player, pos, collider)) in world
            .query::<(&Player, &Position, &SphereCollider)>()
            .iter()
        {
            scene.add_sphere(PLAYER_TAG, pos.0, collider.radius);
        }
        for (_, (enemy, pos, collider)) in world
            .query::<(&Enemy, &Position, &SphereCollider)>()
            .iter()
        {
            scene.add_sphere(enemy.id.tag(), pos.0, collider.radius);
        }
        for (_, (obstacle, pos)) in world.query::<(&Obstacle, &Position)>().iter() {
            scene.add_box(SCENERY_TAG, pos.0, obstacle.half_extents);
        }

        scene
    }

    pub fn add_sphere(&mut self, tag: impl Into<String>, center: Vec3, radius: f32) {
        self.objects.push(SceneObject {
            tag: tag.into(),
            shape: Shape::Sphere { center, radius },
        });
    }

    pub fn add_box(&mut self, tag: impl Into<String>, center: Vec3, half_extents: Vec3) {
        let half_extents = half_extents.abs();
        self.objects.push(SceneObject {
            tag: tag.into(),
            shape: Shape::Aabb {
                min: center - half_extents,
                max: center + half_extents,
            },
        });
    }
}

impl RayQuery for SceneGeometry {
    type Hits = std::vec::IntoIter<RayHit>;

    fn query_ray(&mut self, origin: Vec3, direction: Vec3) -> Result<Self::Hits, CollaboratorError> {
        let direction = validate_ray(origin, direction)?;

        let mut hits: Vec<RayHit> = self
            .objects
            .iter()
            .filter_map(|object| {
                let distance = match object.shape {
                    Shape::Sphere { center, radius } => {
                        ray_sphere(origin, direction, center, radius)
                    }
                    Shape::Aabb { min, max } => ray_aabb(origin, direction, min, max),
                }?;
                Some(RayHit::new(object.tag.clone(), distance))
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(hits.into_iter())
    }
}

/// Entry distance of a unit ray into a sphere. 0.0 when the origin is inside.
fn ray_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let c = oc.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }

    let b = oc.dot(direction);
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let t = -b - discriminant.sqrt();
    (t >= 0.0).then_some(t)
}

/// Entry distance of a unit ray into a box (slab test). 0.0 when the origin is inside.
fn ray_aabb(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = 0.0_f32;
    let mut t_exit = f32::INFINITY;

    let o = origin.to_array();
    let d = direction.to_array();
    let lo = min.to_array();
    let hi = max.to_array();

    for axis in 0..3 {
        if d[axis].abs() < EPSILON {
            // Parallel to this slab: must already be between its planes.
            if o[axis] < lo[axis] || o[axis] > hi[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d[axis];
        let mut t0 = (lo[axis] - o[axis]) * inv;
        let mut t1 = (hi[axis] - o[axis]) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    Some(t_enter)
}
