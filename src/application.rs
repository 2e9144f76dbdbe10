// アプリケーション層モジュール
pub mod hello_handler;

// 再エクスポート
pub use hello_handler::HelloHandler;
