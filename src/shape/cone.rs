//! Cone net: triangular slices hanging from the apex that open into a
//! circular sector, plus the base disc hinged off the middle slice.
//!
//! The flattened lateral surface of a cone is a sector whose radius is the
//! slant height and whose opening angle is `360° × r / slant`, which is a
//! full circle only when the base radius equals the slant height.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use super::piece::{PieceId, PieceKind, PieceRole, PieceSpec, PieceStyle};
use super::{lateral_parent, ShapeClass};
use crate::error::NetError;
use crate::fold::{Hinge, HingeAxis, PieceMotion, SectorUnroll};
use crate::geometry::Outline;
use crate::options::RoundPalette;

/// Parametric right circular cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeGeometry {
    /// Number of lateral slices (even, at least 4).
    pub segments: u32,
    /// Apex-to-base distance along the axis.
    pub height: f32,
    /// Radius of the base circle.
    pub base_radius: f32,
}

impl ConeGeometry {
    /// Apex-to-rim distance, the radius of the flattened sector.
    #[must_use]
    pub fn slant_height(&self) -> f32 {
        self.height.hypot(self.base_radius)
    }

    /// Opening angle of the flattened sector in degrees.
    #[must_use]
    pub fn sector_angle_degrees(&self) -> f32 {
        360.0 * self.base_radius / self.slant_height()
    }

    /// Tilt of each slice away from the axis when assembled, in degrees.
    #[must_use]
    pub fn tilt_folded_degrees(&self) -> f32 {
        self.tilt_folded().to_degrees()
    }

    fn tilt_folded(&self) -> f32 {
        (self.base_radius / self.slant_height()).asin()
    }

    /// Apex angle of one flattened slice in radians.
    fn sweep_step(&self) -> f32 {
        self.sector_angle_degrees().to_radians() / self.segments as f32
    }

    /// Apex position; the cone is centred on the origin along Y.
    #[must_use]
    pub fn apex(&self) -> Vec3 {
        Vec3::Y * (self.height * 0.5)
    }

    /// Index of the slice that stays put and carries the base.
    #[must_use]
    pub fn reference_segment(&self) -> u32 {
        self.segments / 2
    }

    /// Catalog id of the base cap.
    #[must_use]
    pub fn base_cap(&self) -> PieceId {
        PieceId(self.segments as usize)
    }

    /// Outline of one lateral slice: legs of slant length, apex angle of
    /// one sector step, so neighbours share edges once flat.
    #[must_use]
    pub fn segment_outline(&self) -> Outline {
        let half = self.sweep_step() * 0.5;
        let slant = self.slant_height();
        Outline::Triangle {
            base: 2.0 * slant * half.sin(),
            height: slant * half.cos(),
        }
    }

    fn validate(&self) -> Result<(), NetError> {
        let _ = super::segment_count(ShapeClass::Cone, self.segments)?;
        let _ = super::positive("cone.height", self.height)?;
        let _ = super::positive("cone.base_radius", self.base_radius)?;
        Ok(())
    }
}

/// Lateral slices `0..N` followed by the base cap.
pub(crate) fn pieces(
    geom: &ConeGeometry,
    palette: &RoundPalette,
) -> Result<Vec<PieceSpec>, NetError> {
    geom.validate()?;

    let n = geom.segments;
    let reference = geom.reference_segment();
    let tilt = geom.tilt_folded();
    let outline = geom.segment_outline();

    let mut specs: Vec<PieceSpec> = (0..n)
        .map(|i| {
            let parent = lateral_parent(i, reference);
            PieceSpec {
                kind: PieceKind::LateralSegment,
                role: PieceRole::Lateral { index: i },
                outline,
                parent: parent.map(|p| PieceId(p as usize)),
                hinge_axis: parent.map(|_| HingeAxis::Z),
                motion: PieceMotion::SectorUnroll(SectorUnroll {
                    apex: geom.apex(),
                    axial_step: TAU / n as f32,
                    tilt,
                    sweep_step: geom.sweep_step(),
                    offset: i as i32 - reference as i32,
                    anchor: parent.map(|p| p as i32 - reference as i32),
                }),
                style: PieceStyle::plain(palette.lateral_color(i)),
            }
        })
        .collect();

    // The base hinges on the sector arc, one slant below the apex on the
    // reference slice's centre line. Flat, the disc is tangent to the arc
    // and clears the slice's straight base edge by `slant * (1 - cos(half))`.
    // Folded, that arc point lands on the base circle, so the disc closes
    // the cone at `y = -H/2` after swinging through the tilt plus a right
    // angle.
    specs.push(PieceSpec {
        kind: PieceKind::Cap,
        role: PieceRole::BaseCap,
        outline: Outline::Disc {
            radius: geom.base_radius,
        },
        parent: Some(PieceId(reference as usize)),
        hinge_axis: Some(HingeAxis::X),
        motion: PieceMotion::Hinge(Hinge {
            pivot: Vec3::NEG_Y * geom.slant_height(),
            axis: HingeAxis::X,
            offset: Vec3::NEG_Y * geom.base_radius,
            folded_angle: FRAC_PI_2 + tilt,
        }),
        style: PieceStyle::labelled(palette.cap, "底面"),
    });
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::FoldParameter;
    use crate::shape::ShapeInstance;

    fn geometry() -> ConeGeometry {
        ConeGeometry {
            segments: 12,
            height: 140.0,
            base_radius: 50.0,
        }
    }

    #[test]
    fn sector_angle_is_not_a_full_circle() {
        let g = geometry();
        assert!((g.slant_height() - 148.66).abs() < 0.01);
        assert!((g.sector_angle_degrees() - 121.08).abs() < 0.01);
    }

    #[test]
    fn tilt_is_half_angle_of_cone() {
        let g = geometry();
        let expected = (50.0_f32 / 148.661).asin().to_degrees();
        assert!((g.tilt_folded_degrees() - expected).abs() < 1e-3);
    }

    #[test]
    fn slice_legs_are_slant_length() {
        let g = geometry();
        let Outline::Triangle { base, height } = g.segment_outline() else {
            unreachable!("cone slices are triangles");
        };
        let leg = (base * 0.5).hypot(height);
        assert!((leg - g.slant_height()).abs() < 1e-3);
    }

    #[test]
    fn base_cap_hangs_off_reference_slice() {
        let specs = pieces(&geometry(), &RoundPalette::cone()).unwrap();
        assert_eq!(specs.len(), 13);
        let base = &specs[12];
        assert_eq!(base.role, PieceRole::BaseCap);
        assert_eq!(base.parent, Some(PieceId(6)));
        assert!(specs[6].parent.is_none());
    }

    #[test]
    fn slices_sweep_about_the_net_normal() {
        let specs = pieces(&geometry(), &RoundPalette::cone()).unwrap();
        for spec in &specs[..12] {
            let expected = spec.parent.map(|_| HingeAxis::Z);
            assert_eq!(spec.hinge_axis, expected);
        }
        assert_eq!(specs[12].hinge_axis, Some(HingeAxis::X));
    }

    #[test]
    fn flat_base_is_tangent_to_the_sector_arc() {
        let g = geometry();
        let instance = ShapeInstance::with_defaults(ShapeClass::Cone).unwrap();
        let flat = instance.tree().world_poses(FoldParameter::FLAT);
        let base = flat[g.base_cap().index()].translation;
        let reference = flat[g.reference_segment() as usize];
        let apex = reference.translation;

        assert!((base.distance(apex) - (g.slant_height() + g.base_radius)).abs() < 1e-3);

        // Gap between the disc and the slice's straight base edge.
        let Outline::Triangle { height, .. } = g.segment_outline() else {
            unreachable!("cone slices are triangles");
        };
        let edge_mid = reference.transform_point(Vec3::new(0.0, -height, 0.0));
        let gap = base.distance(edge_mid) - g.base_radius;
        let half = g.sweep_step() * 0.5;
        assert!(gap >= 0.0);
        assert!((gap - g.slant_height() * (1.0 - half.cos())).abs() < 1e-3);
    }

    #[test]
    fn folded_base_closes_the_cone() {
        let g = geometry();
        let instance = ShapeInstance::with_defaults(ShapeClass::Cone).unwrap();
        let folded = instance.tree().world_poses(FoldParameter::FOLDED);
        let base = folded[g.base_cap().index()];
        assert!(base
            .translation
            .abs_diff_eq(Vec3::new(0.0, -g.height * 0.5, 0.0), 1e-3));
        assert!(base.normal().cross(Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn accepts_counts_that_do_not_divide_sector() {
        let g = ConeGeometry {
            segments: 10,
            ..geometry()
        };
        assert!(pieces(&g, &RoundPalette::cone()).is_ok());
    }
}
