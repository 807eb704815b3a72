use crate::domain::model::BumpOutcome;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct BumpEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BumpEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<Option<BumpOutcome>> {
        tracing::info!("Locating project descriptors...");
        let Some(source) = self.pipeline.extract()? else {
            return Ok(None);
        };
        tracing::info!("Current version: {}", source.current);

        let plan = self.pipeline.transform(source)?;
        tracing::info!("Next version: {}", plan.next);

        let outcome = self.pipeline.load(plan)?;
        tracing::info!(
            "Updated {} descriptor(s)",
            u32::from(outcome.primary_updated) + u32::from(outcome.secondary_updated)
        );

        Ok(Some(outcome))
    }
}
