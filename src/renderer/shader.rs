use serde::Serialize;

use crate::params::Parameters;

/// The parameters that are baked into the ray-marching shader at compile
/// time. Changing any of them requires a recompile; the rest travel as
/// uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShaderFeatures {
    pub ray_steps: u32,
    pub accretion_disk: bool,
    pub planet: bool,
    pub lorentz_contraction: bool,
    pub gravitational_time_dilation: bool,
    pub aberration: bool,
    pub beaming: bool,
    pub doppler_shift: bool,
    pub light_travel_time: bool,
    pub observer_motion: bool,
}

impl ShaderFeatures {
    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            ray_steps: params.quality.ray_steps(),
            accretion_disk: params.accretion_disk,
            planet: params.planet_visible(),
            lorentz_contraction: params.lorentz_contraction,
            gravitational_time_dilation: params.gravitational_time_dilation,
            aberration: params.aberration,
            beaming: params.beaming,
            doppler_shift: params.doppler_shift,
            light_travel_time: params.light_travel_time,
            observer_motion: params.observer.motion_enabled(),
        }
    }

    /// Preprocessor preamble for the shader source.
    pub fn defines(&self) -> Vec<String> {
        let flags = [
            ("ACCRETION_DISK", self.accretion_disk),
            ("PLANET_ENABLED", self.planet),
            ("LORENTZ_CONTRACTION", self.lorentz_contraction),
            ("GRAVITATIONAL_TIME_DILATION", self.gravitational_time_dilation),
            ("ABERRATION", self.aberration),
            ("BEAMING", self.beaming),
            ("DOPPLER_SHIFT", self.doppler_shift),
            ("LIGHT_TRAVEL_TIME", self.light_travel_time),
            ("OBSERVER_MOTION", self.observer_motion),
        ];
        std::iter::once(format!("#define N_STEPS {}", self.ray_steps))
            .chain(
                flags
                    .iter()
                    .filter(|(_, enabled)| *enabled)
                    .map(|(name, _)| format!("#define {name}")),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ObserverMode, Quality};

    #[test]
    fn defaults_enable_everything() {
        let features = ShaderFeatures::from_parameters(&Parameters::default());
        let defines = features.defines();
        assert_eq!(defines[0], "#define N_STEPS 100");
        assert_eq!(defines.len(), 10);
        assert!(defines.contains(&"#define OBSERVER_MOTION".to_string()));
    }

    #[test]
    fn low_quality_drops_planet_and_steps() {
        let params = Parameters {
            quality: Quality::Low,
            ..Default::default()
        };
        let features = ShaderFeatures::from_parameters(&params);
        assert_eq!(features.ray_steps, 40);
        assert!(!features.planet);
        assert!(!features.defines().contains(&"#define PLANET_ENABLED".to_string()));
    }

    #[test]
    fn uniform_only_edits_keep_features() {
        let base = Parameters::default();
        let moved = Parameters {
            planet: crate::params::PlanetParameters {
                distance: 9.0,
                ..base.planet
            },
            time_scale: 2.0,
            observer: ObserverMode::Orbiting {
                radius: 20.0,
                inclination_deg: 5.0,
            },
            ..base
        };
        assert_eq!(
            ShaderFeatures::from_parameters(&base),
            ShaderFeatures::from_parameters(&moved)
        );
    }
}
