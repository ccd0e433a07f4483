// 牌テーブルの操作と文字列変換を行うモジュール
pub mod common;
pub mod string;
