/// HelloWorldリクエストハンドラー
///
/// 受信イベントと実行コンテキストの診断情報をログへ出力し、
/// クエリ文字列パラメータから挨拶対象の名前を抽出して
/// API Gateway形式の200レスポンスを生成する。
use serde_json::Value;
use tracing::info;

use crate::domain::{GatewayResponse, GreetingBody};
use crate::infrastructure::InvocationContext;

/// クエリ文字列パラメータを格納するイベントキー
const QUERY_STRING_PARAMETERS_KEY: &str = "queryStringParameters";

/// 挨拶対象の名前を示すパラメータキー
const NAME_KEY: &str = "name";

/// nameが存在しない場合に参照するフォールバックキー
const NAME_FALLBACK_KEY: &str = "Name";

/// HelloWorldリクエストハンドラー
pub struct HelloHandler;

impl HelloHandler {
    /// イベントを処理して挨拶レスポンスを生成する
    ///
    /// イベントの形状は問わない。オブジェクト以外のイベントや
    /// 欠落したクエリ文字列パラメータも名前なしとして扱い、
    /// 常にステータス200のレスポンスを返す。
    ///
    /// # 処理フロー
    /// 1. 受信イベントと実行環境の診断情報を6行出力
    /// 2. クエリ文字列パラメータから名前を抽出
    /// 3. 挨拶ボディをテキスト形式で格納したレスポンスを構築
    pub fn handle(event: &Value, context: &InvocationContext) -> GatewayResponse {
        info!(event = %event, "Received event");
        info!(function_arn = %context.invoked_function_arn, "Lambda function ARN");
        info!(log_stream_name = %context.log_stream_name, "CloudWatch log stream name");
        info!(log_group_name = %context.log_group_name, "CloudWatch log group name");
        info!(request_id = %context.aws_request_id, "Lambda Request ID");
        info!(
            memory_limit_in_mb = context.memory_limit_in_mb,
            "Lambda function memory limits in MB"
        );

        let name = Self::extract_name(event);
        let body = GreetingBody::new(name);

        GatewayResponse::ok(body.to_string())
    }

    /// イベントから挨拶対象の名前を抽出する
    ///
    /// `queryStringParameters`オブジェクト内の`name`キーを参照し、
    /// 採用できない場合は`Name`キーへフォールバックする。
    /// イベントがオブジェクトでない場合や両キーとも採用できない場合はNone。
    fn extract_name(event: &Value) -> Option<&str> {
        let query_parameters = event.get(QUERY_STRING_PARAMETERS_KEY)?;

        Self::lookup_name(query_parameters, NAME_KEY)
            .or_else(|| Self::lookup_name(query_parameters, NAME_FALLBACK_KEY))
    }

    /// 指定キーの値を名前として採用できる場合に返す
    ///
    /// 文字列かつ空でない値のみを採用する。
    fn lookup_name<'a>(query_parameters: &'a Value, key: &str) -> Option<&'a str> {
        query_parameters
            .get(key)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }
}
