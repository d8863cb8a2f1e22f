use collisions::*;
use common::shapes::{Bounded, Rectangle};
use quadtree::Config;

#[derive(Debug)]
struct Thing {
    bounds: Rectangle,
    kind: CollisionTag,
    accepts: CollisionTag,
    colliding: bool,
}

impl Thing {
    fn new(bounds: Rectangle, kind: CollisionTag, accepts: CollisionTag) -> Self {
        Thing {
            bounds,
            kind,
            accepts,
            colliding: false,
        }
    }
}

impl Bounded for Thing {
    fn bounding_box(&self) -> Rectangle {
        self.bounds
    }
}

impl Collidable for Thing {
    fn collidable_type(&self) -> CollisionTag {
        self.kind
    }

    fn collidable_with(&self) -> CollisionTag {
        self.accepts
    }

    fn is_colliding(&self) -> bool {
        self.colliding
    }

    fn set_colliding(&mut self, colliding: bool) {
        self.colliding = colliding;
    }
}

struct Things(Vec<Thing>);

impl ColliderSet<usize> for Things {
    fn collider_mut(&mut self, key: usize) -> Option<&mut dyn Collidable> {
        self.0.get_mut(key).map(|thing| thing as &mut dyn Collidable)
    }
}

fn resolver() -> CollisionResolver<usize> {
    CollisionResolver::new(Rectangle::new(0.0, 0.0, 100.0, 100.0), Config::default()).unwrap()
}

fn enemy(bounds: Rectangle) -> Thing {
    Thing::new(bounds, CollisionTag::Enemy, CollisionTag::Bullet)
}

fn bullet(bounds: Rectangle) -> Thing {
    Thing::new(bounds, CollisionTag::Bullet, CollisionTag::Enemy)
}

fn run(resolver: &mut CollisionResolver<usize>, things: &mut Things, subjects: &[usize]) -> usize {
    resolver.clear();
    for (key, thing) in things.0.iter().enumerate() {
        resolver.insert(key, thing);
    }
    for &key in subjects {
        resolver.detect(key, &things.0[key]);
    }
    resolver.apply(things)
}

#[test]
fn test_can_collide_with_is_one_directional() {
    let hero = Thing::new(
        Rectangle::default(),
        CollisionTag::Hero,
        CollisionTag::EnemyBullet,
    );
    let shot = Thing::new(Rectangle::default(), CollisionTag::EnemyBullet, CollisionTag::Hero);
    let player_shot = bullet(Rectangle::default());
    assert!(hero.can_collide_with(&shot));
    assert!(shot.can_collide_with(&hero));
    assert!(!hero.can_collide_with(&player_shot));
    assert!(player_shot.can_collide_with(&enemy(Rectangle::default())));
    assert!(!enemy(Rectangle::default()).can_collide_with(&hero));
}

#[test]
fn test_collider_of() {
    let thing = enemy(Rectangle::new(1.0, 2.0, 3.0, 4.0));
    let collider = Collider::of(7usize, &thing);
    assert_eq!(
        collider,
        Collider {
            key: 7,
            kind: CollisionTag::Enemy,
            accepts: CollisionTag::Bullet
        }
    );
}

#[test]
fn test_overlapping_compatible_pair_flags_both() {
    let mut resolver = resolver();
    let mut things = Things(vec![
        enemy(Rectangle::new(10.0, 10.0, 20.0, 20.0)),
        bullet(Rectangle::new(15.0, 15.0, 5.0, 5.0)),
    ]);
    let flagged = run(&mut resolver, &mut things, &[0]);
    assert_eq!(flagged, 2);
    assert!(things.0[0].colliding);
    assert!(things.0[1].colliding);
    assert_eq!(
        resolver.contacts(),
        &[Contact {
            subject: 0,
            other: 1
        }]
    );
}

#[test]
fn test_non_overlapping_pair_is_not_flagged() {
    let mut resolver = resolver();
    let mut things = Things(vec![
        enemy(Rectangle::new(10.0, 10.0, 20.0, 20.0)),
        bullet(Rectangle::new(60.0, 60.0, 5.0, 5.0)),
        // Touches the enemy's right edge only.
        bullet(Rectangle::new(30.0, 10.0, 5.0, 5.0)),
    ]);
    let flagged = run(&mut resolver, &mut things, &[0]);
    assert_eq!(flagged, 0);
    assert!(things.0.iter().all(|thing| !thing.colliding));
    assert!(resolver.contacts().is_empty());
}

#[test]
fn test_incompatible_tags_are_not_flagged() {
    let mut resolver = resolver();
    let mut things = Things(vec![
        enemy(Rectangle::new(10.0, 10.0, 20.0, 20.0)),
        Thing::new(
            Rectangle::new(15.0, 15.0, 5.0, 5.0),
            CollisionTag::Hero,
            CollisionTag::EnemyBullet,
        ),
        Thing::new(
            Rectangle::new(12.0, 12.0, 5.0, 5.0),
            CollisionTag::EnemyBullet,
            CollisionTag::Hero,
        ),
    ]);
    let flagged = run(&mut resolver, &mut things, &[0]);
    assert_eq!(flagged, 0);
    assert!(things.0.iter().all(|thing| !thing.colliding));
}

#[test]
fn test_zero_area_inside_collides() {
    let mut resolver = resolver();
    let mut things = Things(vec![
        enemy(Rectangle::new(10.0, 10.0, 20.0, 20.0)),
        bullet(Rectangle::new(15.0, 15.0, 0.0, 0.0)),
    ]);
    assert_eq!(run(&mut resolver, &mut things, &[0]), 2);
    assert!(things.0[0].colliding);
    assert!(things.0[1].colliding);
}

#[test]
fn test_zero_area_on_edge_does_not_collide() {
    let mut resolver = resolver();
    let mut things = Things(vec![
        enemy(Rectangle::new(10.0, 10.0, 20.0, 20.0)),
        bullet(Rectangle::new(30.0, 15.0, 0.0, 0.0)),
        bullet(Rectangle::new(20.0, 10.0, 0.0, 0.0)),
    ]);
    assert_eq!(run(&mut resolver, &mut things, &[0]), 0);
    assert!(things.0.iter().all(|thing| !thing.colliding));
}

#[test]
fn test_subject_skips_itself() {
    let mut resolver = resolver();
    // Accepts its own kind, but must not hit itself.
    let mut things = Things(vec![Thing::new(
        Rectangle::new(10.0, 10.0, 20.0, 20.0),
        CollisionTag::Enemy,
        CollisionTag::Enemy,
    )]);
    assert_eq!(run(&mut resolver, &mut things, &[0]), 0);
}

#[test]
fn test_two_sided_detection() {
    let mut resolver = resolver();
    let mut things = Things(vec![
        Thing::new(
            Rectangle::new(40.0, 80.0, 10.0, 10.0),
            CollisionTag::Hero,
            CollisionTag::EnemyBullet,
        ),
        enemy(Rectangle::new(10.0, 10.0, 20.0, 20.0)),
        bullet(Rectangle::new(20.0, 20.0, 2.0, 2.0)),
        Thing::new(
            Rectangle::new(42.0, 82.0, 2.0, 2.0),
            CollisionTag::EnemyBullet,
            CollisionTag::Hero,
        ),
        bullet(Rectangle::new(90.0, 5.0, 2.0, 2.0)),
    ]);
    let flagged = run(&mut resolver, &mut things, &[1, 0]);
    assert_eq!(flagged, 4);
    let flags: Vec<bool> = things.0.iter().map(|thing| thing.colliding).collect();
    assert_eq!(flags, vec![true, true, true, true, false]);
    assert_eq!(resolver.contacts().len(), 2);
}

#[test]
fn test_many_bullets_one_enemy() {
    let mut resolver = resolver();
    let mut things = Things(vec![enemy(Rectangle::new(40.0, 40.0, 20.0, 20.0))]);
    for i in 0..30 {
        let x = (i % 10) as f32 * 10.0;
        let y = (i / 10) as f32 * 30.0 + 5.0;
        things.0.push(bullet(Rectangle::new(x, y, 2.0, 20.0)));
    }
    run(&mut resolver, &mut things, &[0]);
    for (key, thing) in things.0.iter().enumerate().skip(1) {
        let overlaps = thing.bounds.x < 60.0
            && thing.bounds.right() > 40.0
            && thing.bounds.y < 60.0
            && thing.bounds.bottom() > 40.0;
        assert_eq!(thing.colliding, overlaps, "bullet {}", key);
    }
    assert!(things.0[0].colliding);
}

#[test]
fn test_apply_only_sets_flags() {
    let mut resolver = resolver();
    let mut things = Things(vec![
        enemy(Rectangle::new(10.0, 10.0, 20.0, 20.0)),
        bullet(Rectangle::new(70.0, 70.0, 5.0, 5.0)),
    ]);
    things.0[1].colliding = true;
    run(&mut resolver, &mut things, &[0]);
    // Nothing here clears a flag set earlier.
    assert!(things.0[1].colliding);
    assert!(!things.0[0].colliding);
}

#[test]
fn test_clear_resets_tree_and_contacts() {
    let mut resolver = resolver();
    let mut things = Things(vec![
        enemy(Rectangle::new(10.0, 10.0, 20.0, 20.0)),
        bullet(Rectangle::new(15.0, 15.0, 5.0, 5.0)),
    ]);
    run(&mut resolver, &mut things, &[0]);
    assert_eq!(resolver.tree().len(), 2);
    resolver.clear();
    assert!(resolver.tree().is_empty());
    assert!(resolver.contacts().is_empty());
}

#[test]
fn test_invalid_world_is_rejected() {
    let result = CollisionResolver::<usize>::new(
        Rectangle::new(0.0, 0.0, -5.0, 10.0),
        Config::default(),
    );
    assert!(result.is_err());
}
