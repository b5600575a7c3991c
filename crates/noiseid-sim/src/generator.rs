//! Discrete power-law noise (Kasdin & Walter, 1992).
//!
//! White Gaussian noise is filtered by the impulse response of a fractional
//! integrator, giving a phase series whose spectrum falls as `f^(b-2)`. The
//! convolution runs in the frequency domain on a zero-padded buffer of twice
//! the series length, so it is linear, not circular.

use std::sync::Arc;

use log::debug;
use noiseid_core::{NoiseIdError, SampleSequence};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::config::SimulationConfig;
use crate::error::SimError;

/// Filter taps `h_0 = 1`, `h_k = h_{k-1} (a + k - 1) / k` with
/// `a = (2 - b) / 2`, half the negated phase-spectrum exponent.
pub fn impulse_response(b: i32, len: usize) -> Vec<f64> {
    let a = f64::from(2 - b) / 2.0;
    let mut h = Vec::with_capacity(len);
    let mut tap = 1.0;
    for k in 0..len {
        if k > 0 {
            tap *= (a + k as f64 - 1.0) / k as f64;
        }
        h.push(tap);
    }
    h
}

/// Generates independent phase series for one [`SimulationConfig`].
///
/// Each call to [`generate`](Self::generate) draws fresh white noise from the
/// generator's own seeded RNG.
pub struct NoiseGenerator {
    samples: usize,
    rate: f64,
    b: i32,
    /// Spectrum of the zero-padded impulse response.
    filter: Vec<Complex<f64>>,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    white: Normal<f64>,
    rng: StdRng,
}

impl NoiseGenerator {
    pub fn new(config: &SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let n = config.samples;
        let size = 2 * n;

        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(size);
        let inverse = planner.plan_fft_inverse(size);

        let mut filter: Vec<Complex<f64>> = impulse_response(config.b, n)
            .into_iter()
            .map(|h| Complex::new(h, 0.0))
            .collect();
        filter.resize(size, Complex::new(0.0, 0.0));
        forward.process(&mut filter);

        let white = Normal::new(0.0, config.noise_power.sqrt())
            .map_err(|e| SimError::Config(format!("noise_power: {e}")))?;

        debug!(
            "noise generator b={} n={n} qd={} seed={}",
            config.b, config.noise_power, config.seed
        );
        Ok(Self {
            samples: n,
            rate: config.rate,
            b: config.b,
            filter,
            forward,
            inverse,
            white,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    pub fn b(&self) -> i32 {
        self.b
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Draw the next phase series.
    pub fn generate(&mut self) -> Result<SampleSequence, NoiseIdError> {
        let n = self.samples;
        let size = self.filter.len();

        let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(size);
        buffer.extend((0..n).map(|_| Complex::new(self.white.sample(&mut self.rng), 0.0)));
        buffer.resize(size, Complex::new(0.0, 0.0));

        self.forward.process(&mut buffer);
        for (w, h) in buffer.iter_mut().zip(&self.filter) {
            *w *= h;
        }
        self.inverse.process(&mut buffer);

        // rustfft leaves the inverse unnormalized.
        let scale = (size as f64).recip();
        let phase: Vec<f64> = buffer[..n].iter().map(|c| c.re * scale).collect();
        SampleSequence::new(phase, self.rate)
    }
}
