//! ODE integration for edge signaling systems.
//!
//! The signaling core only needs "advance this state from `t0` to `t1`";
//! the numerical method is chosen by the caller through [`OdeIntegrator`].
//! [`RK4Integrator`] is the fixed-step 4th-order Runge-Kutta used by default.
//!
//! Reference: Press et al., Numerical Recipes, 3rd ed., Cambridge University Press 2007

use serde::{Deserialize, Serialize};

/// Right-hand side callback: `(time, y, dy)`
pub type Derivatives<'a> = dyn Fn(f64, &[f64], &mut [f64]) + 'a;

/// Something that can advance an autonomous or time-dependent ODE state.
pub trait OdeIntegrator {
    /// Advance `y` in place from `start_time` to `end_time`.
    fn advance(&mut self, y: &mut [f64], derivatives: &Derivatives<'_>, start_time: f64, end_time: f64);
}

/// Configuration for the ODE integrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegratorConfig {
    /// Maximum integration step
    pub dt: f64,
    /// Floor concentrations at zero after every step
    pub clamp_non_negative: bool,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            dt: 0.001,
            clamp_non_negative: false,
        }
    }
}

/// 4th-order Runge-Kutta integrator
///
/// Solves dy/dt = f(t, y). An interval is split into the smallest number of
/// equal steps no longer than `config.dt`.
#[derive(Debug, Clone)]
pub struct RK4Integrator {
    pub config: IntegratorConfig,
    /// Number of steps taken
    pub step_count: u64,
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    y_temp: Vec<f64>,
}

impl RK4Integrator {
    /// Create a new RK4 integrator for a system with n variables
    pub fn new(n_variables: usize, config: IntegratorConfig) -> Self {
        assert!(config.dt > 0.0, "integrator step must be positive, got {}", config.dt);
        Self {
            config,
            step_count: 0,
            k1: vec![0.0; n_variables],
            k2: vec![0.0; n_variables],
            k3: vec![0.0; n_variables],
            k4: vec![0.0; n_variables],
            y_temp: vec![0.0; n_variables],
        }
    }

    /// Resize internal buffers if system size changes
    pub fn resize(&mut self, n_variables: usize) {
        if self.k1.len() != n_variables {
            self.k1.resize(n_variables, 0.0);
            self.k2.resize(n_variables, 0.0);
            self.k3.resize(n_variables, 0.0);
            self.k4.resize(n_variables, 0.0);
            self.y_temp.resize(n_variables, 0.0);
        }
    }

    /// Perform one RK4 step of size `h` starting at time `t`
    ///
    /// k1 = f(t, y)
    /// k2 = f(t + h/2, y + h/2 * k1)
    /// k3 = f(t + h/2, y + h/2 * k2)
    /// k4 = f(t + h, y + h * k3)
    /// y_new = y + h/6 * (k1 + 2*k2 + 2*k3 + k4)
    pub fn step(&mut self, y: &mut [f64], derivatives: &Derivatives<'_>, t: f64, h: f64) {
        let n = y.len();
        self.resize(n);

        derivatives(t, y, &mut self.k1);

        for i in 0..n {
            self.y_temp[i] = y[i] + 0.5 * h * self.k1[i];
        }
        derivatives(t + 0.5 * h, &self.y_temp, &mut self.k2);

        for i in 0..n {
            self.y_temp[i] = y[i] + 0.5 * h * self.k2[i];
        }
        derivatives(t + 0.5 * h, &self.y_temp, &mut self.k3);

        for i in 0..n {
            self.y_temp[i] = y[i] + h * self.k3[i];
        }
        derivatives(t + h, &self.y_temp, &mut self.k4);

        let h_6 = h / 6.0;
        for i in 0..n {
            y[i] += h_6 * (self.k1[i] + 2.0 * self.k2[i] + 2.0 * self.k3[i] + self.k4[i]);
            if self.config.clamp_non_negative && y[i] < 0.0 {
                y[i] = 0.0;
            }
        }

        self.step_count += 1;
    }

    /// Number of equal substeps used to cover `duration`
    pub fn substeps_for(&self, duration: f64) -> usize {
        // Tolerate round-off so that e.g. 0.1 / 0.001 gives 100, not 101
        ((duration / self.config.dt) - 1e-9).ceil().max(1.0) as usize
    }
}

impl OdeIntegrator for RK4Integrator {
    fn advance(&mut self, y: &mut [f64], derivatives: &Derivatives<'_>, start_time: f64, end_time: f64) {
        let duration = end_time - start_time;
        if duration <= 0.0 {
            return;
        }
        let n_steps = self.substeps_for(duration);
        let h = duration / n_steps as f64;
        for i in 0..n_steps {
            self.step(y, derivatives, start_time + i as f64 * h, h);
        }
    }
}

impl Default for RK4Integrator {
    fn default() -> Self {
        Self::new(crate::biochemistry::SPECIES_COUNT, IntegratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rk4_exponential_decay() {
        // dy/dt = -y, y(0) = 1  =>  y(t) = exp(-t)
        let mut integrator = RK4Integrator::new(1, IntegratorConfig { dt: 0.01, clamp_non_negative: false });

        let mut y = vec![1.0];
        let derivatives = |_t: f64, state: &[f64], dydt: &mut [f64]| {
            dydt[0] = -state[0];
        };

        integrator.advance(&mut y, &derivatives, 0.0, 1.0);

        let expected = (-1.0_f64).exp();
        let error = (y[0] - expected).abs();
        assert!(error < 1e-8, "RK4 error too large: {} vs expected {}", y[0], expected);
        assert_eq!(integrator.step_count, 100);
    }

    #[test]
    fn test_rk4_oscillator() {
        // y1 = cos(t), y2 = -sin(t)
        let mut integrator = RK4Integrator::new(2, IntegratorConfig { dt: 0.001, clamp_non_negative: false });

        let mut y = vec![1.0, 0.0];
        let derivatives = |_t: f64, state: &[f64], dydt: &mut [f64]| {
            dydt[0] = state[1];
            dydt[1] = -state[0];
        };

        integrator.advance(&mut y, &derivatives, 0.0, std::f64::consts::PI);

        assert!((y[0] + 1.0).abs() < 1e-9);
        assert!(y[1].abs() < 1e-9);
    }

    #[test]
    fn test_time_dependent_rhs() {
        // dy/dt = t  =>  y(2) - y(1) = 1.5
        let mut integrator = RK4Integrator::new(1, IntegratorConfig::default());
        let mut y = vec![0.0];
        let derivatives = |t: f64, _: &[f64], dydt: &mut [f64]| {
            dydt[0] = t;
        };

        integrator.advance(&mut y, &derivatives, 1.0, 2.0);
        assert!((y[0] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_non_negative_clamp() {
        let mut integrator = RK4Integrator::new(1, IntegratorConfig { dt: 0.1, clamp_non_negative: true });

        let mut y = vec![0.001];
        let derivatives = |_: f64, _: &[f64], dydt: &mut [f64]| {
            dydt[0] = -1000.0;
        };

        integrator.advance(&mut y, &derivatives, 0.0, 0.1);
        assert_eq!(y[0], 0.0);
    }

    #[test]
    fn test_substep_count() {
        let integrator = RK4Integrator::default();
        assert_eq!(integrator.substeps_for(0.1), 100);
        assert_eq!(integrator.substeps_for(0.0005), 1);
        assert_eq!(integrator.substeps_for(0.0015), 2);
    }

    #[test]
    fn test_empty_interval_is_noop() {
        let mut integrator = RK4Integrator::default();
        let mut y = vec![1.0];
        let derivatives = |_: f64, _: &[f64], dydt: &mut [f64]| {
            dydt[0] = 1.0;
        };

        integrator.advance(&mut y, &derivatives, 3.0, 3.0);
        assert_eq!(y[0], 1.0);
        assert_eq!(integrator.step_count, 0);
    }
}
