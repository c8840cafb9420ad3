use crate::animation::Animation;
use crate::command::AnimationAction;
use heapless::Vec;

/// An identifier for an animation within a collection.
///
/// This is a simple wrapper around `usize` that provides type safety for
/// animation identifiers. IDs double as slot indices, so they must be smaller
/// than the collection's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationId(pub usize);

impl From<usize> for AnimationId {
    fn from(id: usize) -> Self {
        AnimationId(id)
    }
}

impl From<AnimationId> for usize {
    fn from(id: AnimationId) -> Self {
        id.0
    }
}

/// Errors that can occur during collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CollectionError {
    /// The specified animation ID does not exist in the collection.
    InvalidAnimationId(AnimationId),

    /// Attempted to add an animation with an ID that already exists.
    DuplicateAnimationId(AnimationId),

    /// The animation ID exceeds the collection's capacity.
    AnimationIdOutOfBounds { id: AnimationId, capacity: usize },
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::InvalidAnimationId(id) => {
                write!(f, "animation ID {} does not exist in collection", id.0)
            }
            CollectionError::DuplicateAnimationId(id) => {
                write!(f, "animation ID {} already exists in collection", id.0)
            }
            CollectionError::AnimationIdOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "animation ID {} exceeds collection capacity of {}",
                    id.0, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollectionError {}

/// Fixed-capacity set of animations sampled from the same timeline.
///
/// Lets a host push one timeline value into every animation and read all of
/// their progress values back in a single pass, without heap allocation.
///
/// # Type Parameters
/// * `MAX` - Maximum number of animations this collection can hold
#[derive(Debug, Clone)]
pub struct AnimationCollection<const MAX: usize> {
    animations: [Option<Animation>; MAX],
}

impl<const MAX: usize> AnimationCollection<MAX> {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self {
            animations: [None; MAX],
        }
    }

    /// Adds an animation under the given ID.
    ///
    /// # Errors
    /// * `DuplicateAnimationId` - An animation with this ID already exists
    /// * `AnimationIdOutOfBounds` - The ID exceeds the collection's capacity
    pub fn add_animation(
        &mut self,
        id: AnimationId,
        animation: Animation,
    ) -> Result<(), CollectionError> {
        let idx = id.0;

        if idx >= MAX {
            return Err(CollectionError::AnimationIdOutOfBounds { id, capacity: MAX });
        }

        if self.animations[idx].is_some() {
            return Err(CollectionError::DuplicateAnimationId(id));
        }

        self.animations[idx] = Some(animation);
        Ok(())
    }

    /// Removes and returns the animation with the given ID.
    ///
    /// # Errors
    /// Returns `InvalidAnimationId` if the animation does not exist.
    pub fn remove_animation(&mut self, id: AnimationId) -> Result<Animation, CollectionError> {
        self.animations
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(CollectionError::InvalidAnimationId(id))
    }

    /// Routes an action to the specified animation.
    ///
    /// # Errors
    /// Returns `InvalidAnimationId` if the animation does not exist.
    pub fn handle_command(
        &mut self,
        id: AnimationId,
        action: AnimationAction,
    ) -> Result<(), CollectionError> {
        let animation = self.get_mut(id)?;

        match action {
            AnimationAction::SetCurrentTime(time) => animation.set_current_time(time),
            AnimationAction::SetEffect(effect) => animation.set_effect(effect),
            AnimationAction::ClearEffect => {
                animation.clear_effect();
            }
        }
        Ok(())
    }

    /// Pushes one timeline value into every animation in the collection.
    pub fn set_current_time_all(&mut self, current_time: Option<f64>) {
        for animation in self.animations.iter_mut().flatten() {
            animation.set_current_time(current_time);
        }
    }

    /// Returns the overall progress of the specified animation.
    ///
    /// # Errors
    /// Returns `InvalidAnimationId` if the animation does not exist.
    pub fn overall_progress(&self, id: AnimationId) -> Result<Option<f64>, CollectionError> {
        Ok(self.get(id)?.overall_progress())
    }

    /// Returns the overall progress of every animation, in ID order.
    pub fn overall_progress_all(&self) -> Vec<(AnimationId, Option<f64>), MAX> {
        let mut progress = Vec::new();

        for (idx, animation) in self.animations.iter().enumerate() {
            if let Some(animation) = animation {
                // At most MAX slots are occupied, so this cannot overflow.
                let _ = progress.push((AnimationId(idx), animation.overall_progress()));
            }
        }

        progress
    }

    /// Returns a reference to the specified animation.
    ///
    /// # Errors
    /// Returns `InvalidAnimationId` if the animation does not exist.
    pub fn get(&self, id: AnimationId) -> Result<&Animation, CollectionError> {
        self.animations
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(CollectionError::InvalidAnimationId(id))
    }

    /// Returns a mutable reference to the specified animation.
    ///
    /// # Errors
    /// Returns `InvalidAnimationId` if the animation does not exist.
    pub fn get_mut(&mut self, id: AnimationId) -> Result<&mut Animation, CollectionError> {
        self.animations
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(CollectionError::InvalidAnimationId(id))
    }

    /// Returns the number of animations currently in the collection.
    pub fn len(&self) -> usize {
        self.animations.iter().filter(|a| a.is_some()).count()
    }

    /// Returns true if the collection contains no animations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the collection contains an animation with the given ID.
    pub fn contains(&self, id: AnimationId) -> bool {
        let idx = id.0;
        idx < MAX && self.animations[idx].is_some()
    }
}

impl<const MAX: usize> Default for AnimationCollection<MAX> {
    fn default() -> Self {
        Self::new()
    }
}
