// 処理モジュール共通のテストデータ


pub use test_data::*;
