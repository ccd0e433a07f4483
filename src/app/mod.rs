// mainから直接呼び出すアプリケーションの動作モードのモジュール

mod calculator;

pub use calculator::CalculatorApp;
