use crate::streams::SampleStream;
use crate::streams::generators::LinearGenerator;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::StreamChoice;

mod linear_generator;

pub fn build_stream(choice: &StreamChoice) -> Result<Box<dyn SampleStream>, BuildError> {
    match choice {
        StreamChoice::LinearGenerator(p) => {
            let s = LinearGenerator::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
