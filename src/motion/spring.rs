//! Damped spring used to smooth pointer-driven offsets.
//!
//! The spring chases a target that can move at any time. Each call to
//! [`Spring::step`] advances the simulation by a frame using semi-implicit
//! Euler integration split into fixed sub-steps.

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may settle.
    pub rest_delta: f64,
    /// Speed under which the spring may settle.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Parameters used for pointer parallax.
    pub const PARALLAX: SpringConfig = SpringConfig {
        stiffness: 300.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.01,
        rest_speed: 0.01,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringConfig::PARALLAX
    }
}

const SUBSTEP_SECS: f64 = 0.001;

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advances by `dt_secs`. Returns `true` while still moving.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        if self.is_at_rest() {
            self.settle();
            return false;
        }

        let mut remaining = dt_secs.max(0.0);
        while remaining > 0.0 {
            let dt = remaining.min(SUBSTEP_SECS);
            let spring_force = -self.config.stiffness * (self.position - self.target);
            let damping_force = -self.config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / self.config.mass;
            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
            remaining -= dt;
        }

        if self.is_at_rest() {
            self.settle();
            return false;
        }
        true
    }

    fn settle(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }
}

impl Default for Spring {
    fn default() -> Self {
        Spring::new(SpringConfig::default())
    }
}
