use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{EntityId, Identified, Schema};
use crate::tenant;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TenantSchema {
    #[validate(range(min = 1))]
    pub id: EntityId,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
}

impl From<tenant::Model> for TenantSchema {
    fn from(m: tenant::Model) -> Self { Self { id: m.id, name: m.name } }
}

impl From<TenantSchema> for tenant::Model {
    fn from(s: TenantSchema) -> Self { Self { id: s.id, name: s.name } }
}

impl Identified for TenantSchema {
    fn id(&self) -> EntityId { self.id }
}

impl Schema<tenant::Model> for TenantSchema {}
