//! Static sample data for the demo page.

use serde::Deserialize;

use trellis::TableRow;

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl TableRow for User {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

const SAMPLE_USERS: &str = include_str!("users.json");

pub fn load_users() -> Result<Vec<User>, serde_json::Error> {
    serde_json::from_str(SAMPLE_USERS)
}
