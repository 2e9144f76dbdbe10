/// Lambda実行コンテキスト
///
/// Lambdaプラットフォームが呼び出しごとに提供する実行環境情報を
/// 読み取り専用で保持する。エントリポイントがランタイムのContextから
/// 変換してハンドラーへ渡す。
use std::collections::HashMap;

use chrono::Utc;

/// Cognitoアイデンティティ情報
///
/// モバイルSDK経由でアイデンティティプール認証された呼び出しでのみ提供される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CognitoIdentity {
    /// CognitoアイデンティティID
    pub cognito_identity_id: String,
    /// CognitoアイデンティティプールID
    pub cognito_identity_pool_id: String,
}

/// 呼び出し元モバイルクライアントのアプリケーション情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileClient {
    /// インストールID
    pub installation_id: String,
    /// アプリパッケージ名
    pub app_package_name: String,
    /// アプリタイトル
    pub app_title: String,
    /// アプリバージョンコード
    pub app_version_code: String,
    /// アプリバージョン名
    pub app_version_name: String,
}

/// クライアントコンテキスト
///
/// モバイルSDK経由の呼び出しでのみ提供される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    /// クライアントアプリケーション情報
    pub client: MobileClient,
    /// クライアント定義のカスタム値
    pub custom: HashMap<String, String>,
    /// クライアント環境情報
    pub env: HashMap<String, String>,
}

/// Lambda実行コンテキスト
///
/// 構築後に状態を変更する操作は持たない。実行期限は
/// `remaining_time_in_millis`経由でのみ参照する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Lambda関数名
    pub function_name: String,
    /// Lambda関数バージョン
    pub function_version: String,
    /// 呼び出しに使用されたARN
    pub invoked_function_arn: String,
    /// メモリ上限（MB）
    pub memory_limit_in_mb: i32,
    /// 呼び出しリクエストID
    pub aws_request_id: String,
    /// CloudWatchロググループ名
    pub log_group_name: String,
    /// CloudWatchログストリーム名
    pub log_stream_name: String,
    /// Cognitoアイデンティティ情報
    pub identity: Option<CognitoIdentity>,
    /// クライアントコンテキスト
    pub client_context: Option<ClientContext>,
    /// 実行期限（Unixエポックからのミリ秒）
    deadline_ms: u64,
}

impl InvocationContext {
    /// テスト用に明示的な値で作成
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        function_name: String,
        function_version: String,
        invoked_function_arn: String,
        memory_limit_in_mb: i32,
        aws_request_id: String,
        log_group_name: String,
        log_stream_name: String,
        identity: Option<CognitoIdentity>,
        client_context: Option<ClientContext>,
        deadline_ms: u64,
    ) -> Self {
        Self {
            function_name,
            function_version,
            invoked_function_arn,
            memory_limit_in_mb,
            aws_request_id,
            log_group_name,
            log_stream_name,
            identity,
            client_context,
            deadline_ms,
        }
    }

    /// 実行期限までの残り時間をミリ秒で返す
    ///
    /// 現在時刻と実行期限の差を返し、期限を過ぎている場合は0を返す。
    pub fn remaining_time_in_millis(&self) -> u64 {
        let now_ms = Utc::now().timestamp_millis().max(0) as u64;
        self.deadline_ms.saturating_sub(now_ms)
    }
}

impl From<&lambda_runtime::Context> for InvocationContext {
    /// ランタイムのContextから実行環境情報を取り込む
    ///
    /// identityとclient_contextはモバイルSDK経由の呼び出しでのみ
    /// 提供されるため、この変換では設定しない。
    fn from(context: &lambda_runtime::Context) -> Self {
        Self {
            function_name: context.env_config.function_name.clone(),
            function_version: context.env_config.version.clone(),
            invoked_function_arn: context.invoked_function_arn.clone(),
            memory_limit_in_mb: context.env_config.memory,
            aws_request_id: context.request_id.clone(),
            log_group_name: context.env_config.log_group.clone(),
            log_stream_name: context.env_config.log_stream.clone(),
            identity: None,
            client_context: None,
            deadline_ms: context.deadline,
        }
    }
}
