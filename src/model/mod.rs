// 麻雀のデータモデル
mod config;
mod define;
mod meld;
mod score_context;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use config::*;
pub use define::*;
pub use meld::*;
pub use score_context::*;
pub use tile::*;
