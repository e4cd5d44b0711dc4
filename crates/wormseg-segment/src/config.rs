use serde::{Deserialize, Serialize};
use wormseg_core::Error;

/// Parameters of the per-frame segmentation pipeline.
///
/// Serializable so host applications can store presets next to their
/// acquisition settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentConfig {
    /// Number of centerline samples, i.e. body segments addressed downstream.
    pub num_segments: usize,
    /// Points each boundary side is resampled to before smoothing.
    pub side_samples: usize,
    /// Standard deviation (in samples) of the Gaussian applied to each side.
    pub smooth_sigma: f64,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            num_segments: 20,
            side_samples: 100,
            smooth_sigma: 2.0,
        }
    }
}

impl SegmentConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_segments == 0 {
            return Err(Error::InvalidParameter {
                name: "num_segments",
                reason: "must be >= 1".to_string(),
            });
        }
        if self.side_samples < self.num_segments {
            return Err(Error::InvalidParameter {
                name: "side_samples",
                reason: format!(
                    "must be >= num_segments ({}), got {}",
                    self.num_segments, self.side_samples
                ),
            });
        }
        if !(self.smooth_sigma.is_finite() && self.smooth_sigma > 0.0) {
            return Err(Error::InvalidParameter {
                name: "smooth_sigma",
                reason: format!("must be > 0 and finite, got {}", self.smooth_sigma),
            });
        }
        Ok(())
    }

    /// Parses a JSON preset; missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| Error::InvalidParameter {
            name: "config",
            reason: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidParameter {
            name: "config",
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentConfig;
    use wormseg_core::Error;

    #[test]
    fn default_is_valid() {
        assert!(SegmentConfig::default().validate().is_ok());
    }

    #[test]
    fn json_preset_fills_missing_fields() {
        let cfg = SegmentConfig::from_json_str(r#"{ "num_segments": 12 }"#).expect("valid json");
        assert_eq!(cfg.num_segments, 12);
        assert_eq!(cfg.side_samples, SegmentConfig::default().side_samples);

        let back = SegmentConfig::from_json_str(&cfg.to_json_string().expect("serializable"))
            .expect("valid json");
        assert_eq!(back, cfg);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            SegmentConfig::from_json_str(r#"{ "num_segments": 0 }"#),
            Err(Error::InvalidParameter {
                name: "num_segments",
                ..
            })
        ));
        assert!(matches!(
            SegmentConfig::from_json_str(r#"{ "smooth_sigma": -2.0 }"#),
            Err(Error::InvalidParameter {
                name: "smooth_sigma",
                ..
            })
        ));
        assert!(matches!(
            SegmentConfig::from_json_str(r#"{ "num_segments": 50, "side_samples": 10 }"#),
            Err(Error::InvalidParameter {
                name: "side_samples",
                ..
            })
        ));
        assert!(matches!(
            SegmentConfig::from_json_str("not json"),
            Err(Error::InvalidParameter { name: "config", .. })
        ));
    }
}
