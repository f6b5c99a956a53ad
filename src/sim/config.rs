use crate::error::SimError;

/// Longest supported run; the usual operating range is 100-200 years.
pub const MAX_YEARS: u32 = 200;

/// Configuration for a simulation run. Validated up front: bad values are
/// fatal before any simulation work begins.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub seed: u64,
    pub start_year: u32,
    pub num_years: u32,
    /// Number of civilizations to found; None draws from [5, 8].
    pub target_civilizations: Option<u32>,
    /// Emit a progress report every this many years.
    pub progress_interval: u32,
}

impl SimConfig {
    pub fn new(seed: u64, start_year: u32, num_years: u32) -> Self {
        Self {
            seed,
            start_year,
            num_years,
            target_civilizations: None,
            progress_interval: 10,
        }
    }

    pub fn with_target_civilizations(mut self, target: u32) -> Self {
        self.target_civilizations = Some(target);
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_years == 0 {
            return Err(SimError::Config("num_years must be at least 1".to_string()));
        }
        if self.num_years > MAX_YEARS {
            return Err(SimError::Config(format!(
                "num_years {} exceeds the supported maximum of {MAX_YEARS}",
                self.num_years
            )));
        }
        if let Some(target) = self.target_civilizations
            && !(5..=8).contains(&target)
        {
            return Err(SimError::Config(format!(
                "target_civilizations {target} outside the supported range 5-8"
            )));
        }
        if self.progress_interval == 0 {
            return Err(SimError::Config("progress_interval must be at least 1".to_string()));
        }
        if self.start_year.checked_add(self.num_years).is_none() {
            return Err(SimError::Config("year range overflows".to_string()));
        }
        Ok(())
    }
}
