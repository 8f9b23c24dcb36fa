//! Session state around one shape at a time.
//!
//! [`NetEngine`] owns the options, the active shape instance, the fold
//! state (with optional playback) and the view controller. Front ends feed
//! it [`NetCommand`]s and pointer events, tick it with [`NetEngine::update`],
//! and draw whatever [`NetEngine::scene`] returns.

/// Command vocabulary.
pub mod command;
mod options;

use std::time::Duration;

pub use command::NetCommand;

use crate::error::NetError;
use crate::fold::{FoldAnimator, FoldParameter};
use crate::options::Options;
use crate::scene::Scene;
use crate::shape::{ShapeClass, ShapeInstance};
use crate::view::{PointerEvent, ViewController, ViewState};

/// Interactive net viewer state.
#[derive(Debug, Clone)]
pub struct NetEngine {
    options: Options,
    shape: ShapeClass,
    /// `None` for shapes without a net.
    instance: Option<ShapeInstance>,
    fold: FoldParameter,
    animator: Option<FoldAnimator>,
    view: ViewController,
    active_preset: Option<String>,
}

impl NetEngine {
    /// Engine showing `shape`, folded, at the shape's initial view.
    ///
    /// Fails if the options describe an unbuildable shape. The sphere is
    /// accepted and shows an empty scene.
    pub fn new(options: Options, shape: ShapeClass) -> Result<Self, NetError> {
        let instance = build_instance(&options, shape)?;
        let view = ViewController::new(
            options.view.initial_view(shape),
            options.view.sensitivity,
        );
        log::debug!("engine started on {shape}");
        Ok(Self {
            options,
            shape,
            instance,
            fold: FoldParameter::FOLDED,
            animator: None,
            view,
            active_preset: None,
        })
    }

    /// Apply one command.
    pub fn execute(&mut self, command: NetCommand) -> Result<(), NetError> {
        match command {
            NetCommand::SelectShape { shape } => self.select_shape(shape)?,
            NetCommand::SetFold { value, scale } => {
                self.animator = None;
                self.fold = FoldParameter::from_scaled(value, scale);
            }
            NetCommand::AnimateFold { target } => self.animate_to(target),
            NetCommand::ResetView => self.view.reset(),
        }
        Ok(())
    }

    /// Feed a pointer event to the view controller. Returns `true` when
    /// the view changed.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        self.view.handle_event(event)
    }

    /// Advance fold playback by `dt`. Returns `true` while animating.
    pub fn update(&mut self, dt: Duration) -> bool {
        let Some(animator) = self.animator.as_mut() else {
            return false;
        };
        self.fold = animator.advance(dt);
        if animator.is_finished() {
            self.animator = None;
            return false;
        }
        true
    }

    /// Current frame.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let view = self.view.state();
        match &self.instance {
            Some(instance) => Scene::build(instance, self.fold, view),
            None => Scene::empty(self.shape, self.fold, view),
        }
    }

    /// Shape on display.
    #[must_use]
    pub fn shape(&self) -> ShapeClass {
        self.shape
    }

    /// Built instance, or `None` for the sphere.
    #[must_use]
    pub fn instance(&self) -> Option<&ShapeInstance> {
        self.instance.as_ref()
    }

    /// Current fold state.
    #[must_use]
    pub fn fold(&self) -> FoldParameter {
        self.fold
    }

    /// Whether a fold animation is playing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_some()
    }

    /// Current view angles.
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view.state()
    }

    fn select_shape(&mut self, shape: ShapeClass) -> Result<(), NetError> {
        self.instance = build_instance(&self.options, shape)?;
        self.shape = shape;
        self.fold = FoldParameter::FOLDED;
        self.animator = None;
        self.view.sensitivity = self.options.view.sensitivity;
        self.view.reset_to(self.options.view.initial_view(shape));
        log::debug!("selected {shape}");
        Ok(())
    }

    /// Playback time scales with the distance left to travel.
    fn animate_to(&mut self, target: FoldParameter) {
        let anim = &self.options.animation;
        let span = (target.t() - self.fold.t()).abs();
        let duration = anim.fold_duration().mul_f32(span);
        self.animator = Some(FoldAnimator::new(self.fold, target, duration, anim.easing));
    }
}

/// Build `shape`, mapping the sphere to `None`.
fn build_instance(options: &Options, shape: ShapeClass) -> Result<Option<ShapeInstance>, NetError> {
    if !shape.is_developable() {
        log::debug!("{shape} has no net; showing an empty scene");
        return Ok(None);
    }
    ShapeInstance::build(shape, &options.geometry, &options.colors).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::FoldScale;
    use crate::view::PointerButton;

    fn engine(shape: ShapeClass) -> NetEngine {
        NetEngine::new(Options::default(), shape).unwrap()
    }

    #[test]
    fn starts_folded_at_initial_view() {
        let e = engine(ShapeClass::Cone);
        assert_eq!(e.fold(), FoldParameter::FOLDED);
        assert_eq!(e.view(), ViewState::new(0.0, -30.0));
        assert_eq!(e.scene().pieces.len(), 13);
    }

    #[test]
    fn set_fold_reads_scale() {
        let mut e = engine(ShapeClass::Cube);
        e.execute(NetCommand::SetFold {
            value: 45.0,
            scale: FoldScale::HingeDegrees,
        })
        .unwrap();
        assert!((e.fold().t() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn animation_reaches_target_and_stops() {
        let mut e = engine(ShapeClass::Cylinder);
        e.execute(NetCommand::unfold()).unwrap();
        assert!(e.is_animating());
        let mut ticks = 0;
        while e.update(Duration::from_millis(100)) {
            ticks += 1;
            assert!(ticks < 100, "animation never finished");
        }
        assert_eq!(e.fold(), FoldParameter::FLAT);
        assert!(!e.is_animating());
    }

    #[test]
    fn set_fold_cancels_animation() {
        let mut e = engine(ShapeClass::Cube);
        e.execute(NetCommand::unfold()).unwrap();
        let _ = e.update(Duration::from_millis(100));
        e.execute(NetCommand::SetFold {
            value: 0.2,
            scale: FoldScale::Fraction,
        })
        .unwrap();
        assert!(!e.is_animating());
        assert!(!e.update(Duration::from_millis(100)));
        assert!((e.fold().t() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn selecting_a_shape_resets_state() {
        let mut e = engine(ShapeClass::Cube);
        let _ = e.handle_event(PointerEvent::Pressed {
            button: PointerButton::Primary,
        });
        assert!(e.handle_event(PointerEvent::Moved { dx: 20.0, dy: 0.0 }));
        e.execute(NetCommand::SetFold {
            value: 1.0,
            scale: FoldScale::Fraction,
        })
        .unwrap();

        e.execute(NetCommand::SelectShape {
            shape: ShapeClass::Cone,
        })
        .unwrap();
        assert_eq!(e.shape(), ShapeClass::Cone);
        assert_eq!(e.fold(), FoldParameter::FOLDED);
        assert_eq!(e.view(), ViewState::new(0.0, -30.0));
        // The drag did not survive the switch.
        assert!(!e.handle_event(PointerEvent::Moved { dx: 5.0, dy: 0.0 }));
    }

    #[test]
    fn sphere_shows_empty_scene() {
        let mut e = engine(ShapeClass::Cube);
        e.execute(NetCommand::SelectShape {
            shape: ShapeClass::Sphere,
        })
        .unwrap();
        assert!(e.instance().is_none());
        assert!(e.scene().pieces.is_empty());
    }

    #[test]
    fn failed_selection_keeps_previous_shape() {
        let mut options = Options::default();
        options.geometry.cylinder_segments = 14;
        let mut e = NetEngine::new(options, ShapeClass::Cube).unwrap();
        assert!(e
            .execute(NetCommand::SelectShape {
                shape: ShapeClass::Cylinder
            })
            .is_err());
        assert_eq!(e.shape(), ShapeClass::Cube);
        assert_eq!(e.scene().pieces.len(), 6);
    }

    #[test]
    fn reset_view_restores_initial_angles() {
        let mut e = engine(ShapeClass::Cuboid);
        let _ = e.handle_event(PointerEvent::Pressed {
            button: PointerButton::Primary,
        });
        let _ = e.handle_event(PointerEvent::Moved { dx: 8.0, dy: 8.0 });
        e.execute(NetCommand::ResetView).unwrap();
        assert_eq!(e.view(), ViewState::new(30.0, -20.0));
    }
}
