//! Damage events exchanged with the host's event system.

/// Why an entity is being hurt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageCause {
    /// Touching a harmful block.
    Contact,
    /// Melee strike from another entity.
    EntityAttack,
    /// Hit by a projectile.
    Projectile,
    /// Trapped inside a block.
    Suffocation,
    /// Landing after a fall.
    Fall,
    /// Standing in fire.
    Fire,
    /// Burning after leaving fire.
    FireTick,
    /// Standing in lava.
    Lava,
    /// Out of air.
    Drowning,
    /// Exploding block.
    BlockExplosion,
    /// Exploding entity.
    EntityExplosion,
    /// Fell out of the world.
    Void,
    /// Self-inflicted.
    Suicide,
    /// Potion or spell.
    Magic,
    /// Hunger.
    Starvation,
    /// Plugin-defined.
    Custom,
}

/// A damage request that listeners may cancel before it is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageEvent {
    cause: DamageCause,
    amount: f64,
    cancelled: bool,
}

impl DamageEvent {
    /// Creates an uncancelled event.
    #[must_use]
    pub const fn new(cause: DamageCause, amount: f64) -> Self {
        Self {
            cause,
            amount,
            cancelled: false,
        }
    }

    /// Why the damage occurs.
    #[must_use]
    pub const fn cause(&self) -> DamageCause {
        self.cause
    }

    /// Amount of health to remove.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Marks the event as cancelled; the host must not apply it.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether a listener cancelled the event.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
