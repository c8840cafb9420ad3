//! Command-based control for animations.

use crate::effect::EffectTiming;

/// Updates a host can push into an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationAction {
    /// Set current time (`None` for no current time).
    SetCurrentTime(Option<f64>),
    /// Attach or replace effect.
    SetEffect(EffectTiming),
    /// Detach effect.
    ClearEffect,
}

/// Command targeting a specific animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationCommand<Id> {
    pub animation_id: Id,
    pub action: AnimationAction,
}

impl<Id> AnimationCommand<Id> {
    /// Creates command.
    pub fn new(animation_id: Id, action: AnimationAction) -> Self {
        Self {
            animation_id,
            action,
        }
    }
}
