// 手牌の役や点数計算を行うモジュール
mod evaluate;
mod fu;
mod parse;
mod point;
mod yaku;

pub use self::{evaluate::evaluate_hand, yaku::YakuFlags};
