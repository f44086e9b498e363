//! Which body the camera is framing, and where to put the camera for it.

use std::fmt;

use glam::Vec3;

use crate::orbit::{BodyRegistry, SolarSystem};

/// Name under which the central body is addressed.
pub const SUN_NAME: &str = "Sun";

/// The body the camera is framing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The central body at the origin.
    #[default]
    Sun,
    /// An orbiting body by name.
    Body(String),
}

impl FocusTarget {
    /// Parse a name; `"Sun"` (any case) is the central body.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case(SUN_NAME) {
            Self::Sun
        } else {
            Self::Body(name.to_owned())
        }
    }

    /// Identifier of the target.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Sun => SUN_NAME,
            Self::Body(name) => name,
        }
    }
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a flight should leave the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    /// Camera position.
    pub eye: Vec3,
    /// Look-at point.
    pub target: Vec3,
}

/// Camera placement for a body at `position` with visual `radius`.
///
/// The camera sits above the body and further out along the Sun → body
/// direction, both offsets growing with the body's size.
#[must_use]
pub fn body_viewpoint(position: Vec3, radius: f32) -> Viewpoint {
    let outward = position.normalize_or_zero() * (20.0 + radius * 3.0);
    let lift = Vec3::new(0.0, 25.0 + radius * 1.5, 0.0);
    Viewpoint {
        eye: position + lift + outward,
        target: position,
    }
}

/// Resolve a focus target to a viewpoint, or `None` for an unknown body.
#[must_use]
pub fn viewpoint<R: BodyRegistry + ?Sized>(
    target: &FocusTarget,
    registry: &R,
    sun_view_offset: Vec3,
) -> Option<Viewpoint> {
    match target {
        FocusTarget::Sun => Some(Viewpoint {
            eye: sun_view_offset,
            target: Vec3::ZERO,
        }),
        FocusTarget::Body(name) => {
            let position = registry.world_position(name)?;
            let radius = registry.body_radius(name)?;
            Some(body_viewpoint(position, radius))
        }
    }
}

/// Numbered slot of `target`: 0 is the Sun, `i` the `i`-th body.
///
/// A name shared by several bodies resolves to the first of them.
#[must_use]
pub fn slot_of(target: &FocusTarget, system: &SolarSystem) -> Option<usize> {
    match target {
        FocusTarget::Sun => Some(0),
        FocusTarget::Body(name) => system
            .bodies()
            .iter()
            .position(|b| b.name() == name)
            .map(|i| i + 1),
    }
}

/// Slot after `current` in Sun → bodies in order → Sun.
///
/// Cycling walks slots rather than names so bodies sharing a name are
/// each visited once.
#[must_use]
pub fn next_slot(current: usize, system: &SolarSystem) -> usize {
    if current >= system.bodies().len() {
        0
    } else {
        current + 1
    }
}

/// The focus bound to a numbered slot: 0 is the Sun, `i` the `i`-th body.
#[must_use]
pub fn focus_slot(slot: usize, system: &SolarSystem) -> Option<FocusTarget> {
    if slot == 0 {
        return Some(FocusTarget::Sun);
    }
    system
        .bodies()
        .get(slot - 1)
        .map(|b| FocusTarget::Body(b.name().to_owned()))
}

/// Viewpoint for a numbered slot, or `None` past the last body.
#[must_use]
pub fn slot_viewpoint(
    slot: usize,
    system: &SolarSystem,
    sun_view_offset: Vec3,
) -> Option<Viewpoint> {
    if slot == 0 {
        return Some(Viewpoint {
            eye: sun_view_offset,
            target: Vec3::ZERO,
        });
    }
    let body = system.bodies().get(slot - 1)?;
    Some(body_viewpoint(body.world_position(), body.def().radius))
}

/// Info-panel summary for the focused body.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusInfo {
    /// Display name.
    pub name: String,
    /// Visual radius.
    pub radius: f32,
    /// Orbit distance from the Sun (schematic units, 0 for the Sun).
    pub orbit_distance: f32,
    /// Angular speed relative to the base rate, `None` for the Sun.
    pub relative_speed: Option<f32>,
}

impl FocusInfo {
    /// Summarize the body in `slot`, or `None` past the last body.
    #[must_use]
    pub fn describe(slot: usize, system: &SolarSystem) -> Option<Self> {
        if slot == 0 {
            return Some(Self {
                name: SUN_NAME.to_owned(),
                radius: system.sun_radius(),
                orbit_distance: 0.0,
                relative_speed: None,
            });
        }
        system.bodies().get(slot - 1).map(|b| Self {
            name: b.name().to_owned(),
            radius: b.def().radius,
            orbit_distance: b.def().orbit_radius,
            relative_speed: Some(b.def().angular_speed),
        })
    }
}

impl fmt::Display for FocusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.relative_speed {
            None => write!(f, "{}: central star", self.name),
            Some(speed) => write!(
                f,
                "{}: {} AU from the Sun (schematic), orbit speed {speed:.2}x",
                self.name, self.orbit_distance
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::BodyDef;

    fn system() -> SolarSystem {
        SolarSystem::new(10.0, BodyDef::planets())
    }

    #[test]
    fn sun_name_parsing() {
        assert_eq!(FocusTarget::from_name("sun"), FocusTarget::Sun);
        assert_eq!(
            FocusTarget::from_name("Mars"),
            FocusTarget::Body("Mars".into())
        );
        assert_eq!(FocusTarget::Sun.to_string(), "Sun");
    }

    #[test]
    fn sun_viewpoint_uses_fixed_offset() {
        let offset = Vec3::new(0.0, 80.0, 220.0);
        let vp = viewpoint(&FocusTarget::Sun, &system(), offset);
        assert_eq!(
            vp,
            Some(Viewpoint {
                eye: offset,
                target: Vec3::ZERO
            })
        );
    }

    #[test]
    fn planet_viewpoint_sits_above_and_outside() {
        // Earth at phase 0: (52, 0, 0), radius 3.2
        let vp = viewpoint(
            &FocusTarget::Body("Earth".into()),
            &system(),
            Vec3::ZERO,
        );
        let expected_eye = Vec3::new(52.0 + 20.0 + 9.6, 25.0 + 4.8, 0.0);
        assert!(vp.is_some_and(|vp| {
            vp.target == Vec3::new(52.0, 0.0, 0.0)
                && (vp.eye - expected_eye).length() < 1e-4
        }));
    }

    #[test]
    fn unknown_body_has_no_viewpoint() {
        let vp = viewpoint(
            &FocusTarget::Body("Pluto".into()),
            &system(),
            Vec3::ZERO,
        );
        assert!(vp.is_none());
        let pluto = FocusTarget::Body("Pluto".into());
        assert_eq!(slot_of(&pluto, &system()), None);
        assert!(FocusInfo::describe(9, &system()).is_none());
    }

    #[test]
    fn cycling_visits_every_body_then_returns_to_sun() {
        let sys = system();
        let mut slot = 0;
        let mut visited = Vec::new();
        for _ in 0..9 {
            slot = next_slot(slot, &sys);
            let focus = focus_slot(slot, &sys).unwrap_or_default();
            visited.push(focus.name().to_owned());
        }
        assert_eq!(visited.first().map(String::as_str), Some("Mercury"));
        assert_eq!(visited.get(7).map(String::as_str), Some("Neptune"));
        assert_eq!(visited.last().map(String::as_str), Some("Sun"));
    }

    #[test]
    fn cycling_steps_past_bodies_sharing_a_name() {
        let sys = SolarSystem::new(
            10.0,
            vec![
                BodyDef::new("Twin", 1.0, 20.0, 1.0),
                BodyDef::new("Twin", 2.0, 40.0, 1.0),
            ],
        );
        let order: Vec<usize> = std::iter::successors(Some(0), |&s| {
            Some(next_slot(s, &sys))
        })
        .take(4)
        .collect();
        assert_eq!(order, vec![0, 1, 2, 0]);

        // The second twin's viewpoint is its own, not the first's
        let second = slot_viewpoint(2, &sys, Vec3::ZERO);
        assert!(second.is_some_and(|vp| vp.target.x == 40.0));
    }

    #[test]
    fn slots_map_to_sun_then_bodies() {
        let sys = system();
        let earth = FocusTarget::Body("Earth".into());
        assert_eq!(slot_of(&earth, &sys), Some(3));
        assert_eq!(slot_of(&FocusTarget::Sun, &sys), Some(0));
        assert_eq!(focus_slot(0, &sys), Some(FocusTarget::Sun));
        assert_eq!(
            focus_slot(3, &sys),
            Some(FocusTarget::Body("Earth".into()))
        );
        assert_eq!(focus_slot(9, &sys), None);
    }

    #[test]
    fn info_summaries() {
        let sys = system();
        let sun = FocusInfo::describe(0, &sys);
        assert_eq!(sun.as_ref().map(|i| i.radius), Some(10.0));
        assert_eq!(sun.map(|i| i.relative_speed), Some(None));

        // Slot 5 is Jupiter
        let jupiter = FocusInfo::describe(5, &sys);
        assert!(jupiter.as_ref().is_some_and(|i| i.orbit_distance == 86.0));
        let text = jupiter.map(|i| i.to_string()).unwrap_or_default();
        assert!(text.contains("1.30x"));
    }
}
