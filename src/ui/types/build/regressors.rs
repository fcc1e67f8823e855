use crate::regressors::{
    BivariateRegressor, IncrementalRegressor, SampleValidation, WelfordRegressor,
};
use crate::ui::types::choices::{RegressorChoice, RegressorParameters};

impl From<&RegressorParameters> for SampleValidation {
    fn from(p: &RegressorParameters) -> Self {
        if p.reject_non_finite {
            SampleValidation::RejectNonFinite
        } else {
            SampleValidation::Unchecked
        }
    }
}

pub fn build_regressor(choice: &RegressorChoice) -> Box<dyn IncrementalRegressor> {
    match choice {
        RegressorChoice::Reference(p) => Box::new(BivariateRegressor::new(p.into())),
        RegressorChoice::Welford(p) => Box::new(WelfordRegressor::new(p.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_selected_policy() {
        let r = build_regressor(&RegressorChoice::default());
        assert_eq!(r.name(), "reference");

        let strict = RegressorParameters {
            reject_non_finite: true,
        };
        assert_eq!(SampleValidation::from(&strict), SampleValidation::RejectNonFinite);
        let w = build_regressor(&RegressorChoice::Welford(strict));
        assert_eq!(w.name(), "welford");
    }
}
