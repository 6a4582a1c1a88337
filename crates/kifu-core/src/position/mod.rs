//! Position module
//!
//! 盤面・持駒・手番・棋譜と undo 履歴を管理する。
//!
//! ## Module Structure
//! - `core` - Position / Snapshot と基本操作
//! - `setup` - 平手初期配置
//! - `moves` - 最小適用（構造的な検査のみ）と打ち候補
//! - `legality` - 厳密適用（将棋のルール検査）

mod core;
mod legality;
mod moves;
mod setup;


pub use self::core::{Position, Snapshot};
