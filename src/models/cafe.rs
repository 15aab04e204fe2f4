use serde::{Deserialize, Serialize};

/// One row of the `cafes` table. Fields are declared in column order so the
/// serialized JSON object lists them the way the table does.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Form payload for `POST /add`. The checkbox-style fields arrive as raw
/// strings and are coerced to booleans at the handler boundary.
#[derive(Debug, Deserialize)]
pub struct AddCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub loc: String,
    pub sockets: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub calls: Option<String>,
    pub seats: String,
    pub coffee_price: Option<String>,
}
