use crate::accelerator::{Precision, ReferenceAccelerator, SoftwareAccelerator};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{AcceleratorChoice, PrecisionChoice, SoftwareParameters};

impl From<PrecisionChoice> for Precision {
    fn from(p: PrecisionChoice) -> Self {
        match p {
            PrecisionChoice::Single => Precision::Single,
            PrecisionChoice::Double => Precision::Double,
        }
    }
}

impl TryFrom<&SoftwareParameters> for SoftwareAccelerator {
    type Error = BuildError;

    fn try_from(p: &SoftwareParameters) -> Result<Self, Self::Error> {
        let lane_width = usize::try_from(p.lane_width)
            .map_err(|_| BuildError::InvalidParameter("lane_width too large for usize".into()))?;
        Ok(SoftwareAccelerator::new(lane_width, p.precision.into())?)
    }
}

pub fn build_accelerator(
    choice: &AcceleratorChoice,
) -> Result<Box<dyn ReferenceAccelerator>, BuildError> {
    match choice {
        AcceleratorChoice::Software(p) => Ok(Box::new(SoftwareAccelerator::try_from(p)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accelerator::AcceleratorError;

    #[test]
    fn default_is_single_precision() {
        let acc = build_accelerator(&AcceleratorChoice::default()).unwrap();
        assert_eq!(acc.name(), "software-f32");
        assert_eq!(acc.lane_width(), 4);
    }

    #[test]
    fn zero_lanes_are_rejected() {
        let p = SoftwareParameters {
            lane_width: 0,
            precision: PrecisionChoice::Double,
        };
        assert!(matches!(
            SoftwareAccelerator::try_from(&p),
            Err(BuildError::Accelerator(AcceleratorError::InvalidLaneWidth))
        ));
    }
}
