// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Sampling and first-N rate limiting for log calls.
//!
//! Both controls are optional and independent. Sampling is evaluated first,
//! then the first-N counter. Counters are keyed by the MD5 digest of the
//! message template, so two call sites logging the same template share one
//! counter. The counter map is never pruned.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::Mutex;

/// Sampling value that disables the random draw entirely
pub const ALWAYS_SAMPLE: u8 = 100;

/// Per-call rate limiting options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    /// Percentage of calls to keep (0-100, values above 100 behave as 100)
    pub sampling: u8,
    /// Emission cap per message template; zero or negative is unlimited
    pub first_n: i64,
}

impl LogOptions {
    pub const fn new() -> Self {
        Self {
            sampling: ALWAYS_SAMPLE,
            first_n: -1,
        }
    }

    pub const fn sampling(mut self, percent: u8) -> Self {
        self.sampling = percent;
        self
    }

    pub const fn first_n(mut self, n: i64) -> Self {
        self.first_n = n;
        self
    }

    /// True when neither control can suppress a call
    pub const fn is_unrestricted(&self) -> bool {
        self.sampling >= ALWAYS_SAMPLE && self.first_n <= 0
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        Self::new()
    }
}

struct Inner {
    counters: HashMap<[u8; 16], i64>,
    rng: StdRng,
}

/// Shared counters and random source backing [`LogOptions`]
pub struct SamplingState {
    inner: Mutex<Inner>,
}

impl SamplingState {
    /// Create state seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create state with a fixed seed (reproducible sampling)
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            inner: Mutex::new(Inner {
                counters: HashMap::new(),
                rng,
            }),
        }
    }

    /// Decide whether a call with `options` and message `template` is emitted.
    ///
    /// Updates the first-N counter for admitted calls. A template is admitted
    /// while its counter is at most `first_n`, so it is emitted `first_n + 1`
    /// times in total.
    pub fn admit(&self, options: &LogOptions, template: &str) -> bool {
        if options.is_unrestricted() {
            return true;
        }

        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if options.sampling < ALWAYS_SAMPLE {
            let draw: f64 = inner.rng.gen_range(0.0..100.0);
            if draw >= f64::from(options.sampling) {
                return false;
            }
        }

        if options.first_n > 0 {
            let key = md5::compute(template.as_bytes()).0;
            let counter = inner.counters.entry(key).or_insert(0);
            if *counter > options.first_n {
                return false;
            }
            *counter += 1;
        }

        true
    }

    /// Current counter for a template (0 if never counted)
    pub fn count(&self, template: &str) -> i64 {
        let key = md5::compute(template.as_bytes()).0;
        let inner = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        inner.counters.get(&key).copied().unwrap_or(0)
    }

    /// Number of distinct templates being counted
    pub fn tracked_templates(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .counters
            .len()
    }
}

impl Default for SamplingState {
    fn default() -> Self {
        Self::new()
    }
}
