/// HelloWorld Lambdaエントリポイント
///
/// API Gatewayプロキシ統合経由のイベントを受け取り、
/// 挨拶メッセージを格納したレスポンスを返却する。
use hello_world::application::HelloHandler;
use hello_world::domain::GatewayResponse;
use hello_world::infrastructure::{init_logging, InvocationContext};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("HelloWorld Lambda関数を初期化");

    // Lambda関数を実行
    lambda_runtime::run(service_fn(handler)).await
}

/// Lambdaリクエストハンドラー
///
/// イベントとランタイムコンテキストを分解し、実行環境情報を
/// `InvocationContext`へ変換した上でアプリケーション層へ委譲する。
/// 呼び出しごとのログ出力はアプリケーション層の診断6行のみ。
///
/// # Arguments
/// * `event` - 任意形状のJSONイベントとランタイムコンテキスト
///
/// # Returns
/// API Gatewayプロキシ統合形式の200レスポンス
async fn handler(event: LambdaEvent<Value>) -> Result<GatewayResponse, Error> {
    let (payload, context) = event.into_parts();
    let invocation_context = InvocationContext::from(&context);

    Ok(HelloHandler::handle(&payload, &invocation_context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hello_world::infrastructure::init_logging;
    use lambda_runtime::Context;
    use serde_json::json;

    /// テスト用のLambdaEventを作成するヘルパー
    fn create_lambda_event(payload: Value) -> LambdaEvent<Value> {
        LambdaEvent::new(payload, Context::default())
    }

    // ==================== ハンドラーテスト ====================

    /// 名前付きクエリでステータス200と挨拶ボディが返ることを確認
    #[tokio::test]
    async fn test_handler_greets_named_caller() {
        init_logging();

        let event = create_lambda_event(json!({"queryStringParameters": {"name": "Ada"}}));
        let response = handler(event).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            "{'message': 'Hello, Ada!', 'details': 'Python Lambda function example'}"
        );
    }

    /// クエリ無しイベントでデフォルトの挨拶が返ることを確認
    #[tokio::test]
    async fn test_handler_greets_world_without_query() {
        init_logging();

        let event = create_lambda_event(json!({}));
        let response = handler(event).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            "{'message': 'Hello, World!', 'details': 'Python Lambda function example'}"
        );
    }

    /// nullイベントでもエラーにならず200が返ることを確認
    #[tokio::test]
    async fn test_handler_accepts_null_event() {
        init_logging();

        let event = create_lambda_event(json!(null));
        let response = handler(event).await.unwrap();

        assert_eq!(response.status_code, 200);
    }

    /// Content-Typeヘッダが設定されることを確認
    #[tokio::test]
    async fn test_handler_sets_json_content_type() {
        init_logging();

        let event = create_lambda_event(json!({}));
        let response = handler(event).await.unwrap();

        assert_eq!(
            response.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }
}
