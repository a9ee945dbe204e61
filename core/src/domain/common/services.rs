use crate::domain::meal_analysis::{normalizer::ResponseNormalizer, ports::VisionClient};

/// Application service. Holds the outbound adapters the domain services run against.
#[derive(Clone)]
pub struct Service<V>
where
    V: VisionClient,
{
    pub(crate) vision_client: V,
    pub(crate) normalizer: ResponseNormalizer,
}

impl<V> Service<V>
where
    V: VisionClient,
{
    pub fn new(vision_client: V, normalizer: ResponseNormalizer) -> Self {
        Self {
            vision_client,
            normalizer,
        }
    }
}
