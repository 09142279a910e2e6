use filmvault_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `directors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: String,
}
