use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "upstream")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub base_url: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}

pub fn new(name: &str, base_url: &str) -> ActiveModel {
    ActiveModel { id: NotSet, name: Set(name.to_string()), base_url: Set(base_url.to_string()), active: Set(true) }
}

/// Partial payload that only flips `active`; other columns keep their stored values.
pub fn set_active(active: bool) -> ActiveModel {
    ActiveModel { id: NotSet, name: NotSet, base_url: NotSet, active: Set(active) }
}
