use crate::streams::generators::{InputDomain, LinearGenerator, ModelSpec};
use crate::ui::types::{build::BuildError, choices::LinearGeneratorParameters};
use std::convert::TryFrom;

impl TryFrom<&LinearGeneratorParameters> for LinearGenerator {
    type Error = BuildError;

    fn try_from(parameters: &LinearGeneratorParameters) -> Result<Self, Self::Error> {
        let max_samples = usize::try_from(parameters.max_samples)
            .map_err(|_| BuildError::InvalidParameter("max_samples too large for usize".into()))?;
        if max_samples == 0 {
            return Err(BuildError::InvalidParameter("max_samples must be > 0".into()));
        }

        let spec = ModelSpec {
            intercept: parameters.intercept,
            slope1: parameters.slope1,
            slope2: parameters.slope2,
        };
        let domain = if parameters.integer_inputs {
            InputDomain::Integer
        } else {
            InputDomain::Continuous
        };

        LinearGenerator::new(
            spec,
            domain,
            parameters.noise_fraction,
            max_samples,
            parameters.seed,
        )
        .map_err(BuildError::from)
    }
}
