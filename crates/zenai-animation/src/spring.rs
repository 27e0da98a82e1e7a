//! Damped harmonic oscillator used for every spring-driven value on the site.
//!
//! The state is advanced with the closed-form solution of
//! `m·x'' + c·x' + k·x = 0`, so a step of any length lands exactly on the
//! analytic trajectory. Frame rate only changes how often the value is
//! sampled, never where it goes.

/// Spring configuration in physical units (framer-style `stiffness`,
/// `damping`, `mass`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Spring constant `k`. Higher values pull harder toward the target.
    pub stiffness: f32,
    /// Damping coefficient `c`. `2·sqrt(k·m)` is critical damping.
    pub damping: f32,
    /// Mass `m`.
    pub mass: f32,
    /// Distance from the target under which the spring may come to rest.
    pub rest_delta: f32,
    /// Speed (units per second) under which the spring may come to rest.
    pub rest_speed: f32,
}

impl SpringSpec {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.1,
        }
    }

    /// Spring with the damping coefficient that removes all overshoot.
    pub fn critically_damped(stiffness: f32) -> Self {
        Self::new(stiffness, 2.0 * stiffness.sqrt())
    }

    pub const fn with_mass(self, mass: f32) -> Self {
        Self { mass, ..self }
    }

    pub const fn with_rest_thresholds(self, rest_delta: f32, rest_speed: f32) -> Self {
        Self {
            rest_delta,
            rest_speed,
            ..self
        }
    }

    /// Magnetic buttons: soft pull with a little overshoot.
    pub const fn magnetic() -> Self {
        Self::new(150.0, 15.0)
    }

    /// Custom cursor layers chasing the pointer.
    pub const fn cursor() -> Self {
        Self::new(500.0, 28.0)
    }

    /// Testimonial slide entering from the side.
    pub const fn slide() -> Self {
        Self::new(300.0, 30.0)
    }

    /// `ζ = c / (2·sqrt(k·m))`. 1.0 is critical, below is bouncy.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Undamped angular frequency `ω₀ = sqrt(k/m)`.
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(100.0, 10.0)
    }
}

/// Position and velocity of a spring relative to the world, not the target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    pub position: f32,
    pub velocity: f32,
}

impl SpringState {
    pub const fn at_rest(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// Advances the state by `dt_secs` toward `target`. Returns true and
    /// snaps onto the target once both rest thresholds are met.
    pub fn advance(&mut self, target: f32, spec: &SpringSpec, dt_secs: f32) -> bool {
        if dt_secs > 0.0 && spec.stiffness > 0.0 && spec.mass > 0.0 {
            let (displacement, velocity) = oscillate(
                f64::from(self.position - target),
                f64::from(self.velocity),
                spec,
                f64::from(dt_secs),
            );
            self.position = target + displacement as f32;
            self.velocity = velocity as f32;
        }
        let settled = (self.position - target).abs() < spec.rest_delta
            && self.velocity.abs() < spec.rest_speed;
        if settled {
            self.position = target;
            self.velocity = 0.0;
        }
        settled
    }
}

/// Closed-form displacement and velocity after `t` seconds.
fn oscillate(x0: f64, v0: f64, spec: &SpringSpec, t: f64) -> (f64, f64) {
    let k = f64::from(spec.stiffness);
    let c = f64::from(spec.damping.max(0.0));
    let m = f64::from(spec.mass);
    let omega = (k / m).sqrt();
    let zeta = c / (2.0 * (k * m).sqrt());

    if (zeta - 1.0).abs() < 1e-4 {
        let decay = (-omega * t).exp();
        let b = v0 + omega * x0;
        let x = decay * (x0 + b * t);
        let v = decay * (v0 - omega * b * t);
        (x, v)
    } else if zeta < 1.0 {
        let alpha = zeta * omega;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let b = (v0 + alpha * x0) / omega_d;
        let decay = (-alpha * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let x = decay * (x0 * cos + b * sin);
        let v = decay * (v0 * cos - (alpha * b + omega_d * x0) * sin);
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}

/// A spring-smoothed scalar: a target plus the state chasing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    spec: SpringSpec,
    state: SpringState,
    target: f32,
    at_rest: bool,
}

impl Spring {
    pub fn new(spec: SpringSpec, initial: f32) -> Self {
        Self {
            spec,
            state: SpringState::at_rest(initial),
            target: initial,
            at_rest: true,
        }
    }

    pub fn spec(&self) -> &SpringSpec {
        &self.spec
    }

    pub fn value(&self) -> f32 {
        self.state.position
    }

    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Retargets without touching position or velocity, so motion stays
    /// continuous.
    pub fn set_target(&mut self, target: f32) {
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    pub fn snap_to(&mut self, value: f32) {
        self.target = value;
        self.state = SpringState::at_rest(value);
        self.at_rest = true;
    }

    /// Returns the new value.
    pub fn step(&mut self, dt_secs: f32) -> f32 {
        if !self.at_rest {
            self.at_rest = self.state.advance(self.target, &self.spec, dt_secs);
        }
        self.state.position
    }
}

#[cfg(test)]
#[path = "tests/spring_tests.rs"]
mod tests;
