use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{EntityId, Identified, Schema};
use crate::upstream;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpstreamSchema {
    #[validate(range(min = 1))]
    pub id: EntityId,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(url, length(max = 512))]
    pub base_url: String,
    pub active: bool,
}

impl From<upstream::Model> for UpstreamSchema {
    fn from(m: upstream::Model) -> Self {
        Self { id: m.id, name: m.name, base_url: m.base_url, active: m.active }
    }
}

impl From<UpstreamSchema> for upstream::Model {
    fn from(s: UpstreamSchema) -> Self {
        Self { id: s.id, name: s.name, base_url: s.base_url, active: s.active }
    }
}

impl Identified for UpstreamSchema {
    fn id(&self) -> EntityId { self.id }
}

impl Schema<upstream::Model> for UpstreamSchema {}
