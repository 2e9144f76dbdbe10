/// API Gatewayプロキシ統合レスポンス
///
/// Lambda関数からAPI Gatewayへ返却するレスポンス構造を定義する。
/// statusCode、headers、bodyの3フィールドをcamelCaseで
/// シリアライズする。
use std::collections::HashMap;

use serde::Serialize;

/// Content-Typeヘッダ名
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// JSONコンテンツタイプ
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// API Gatewayプロキシ統合形式のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// レスポンスヘッダ
    pub headers: HashMap<String, String>,
    /// レスポンスボディ（テキスト）
    pub body: String,
}

impl GatewayResponse {
    /// 200 OKレスポンスを作成する
    ///
    /// ヘッダは`Content-Type: application/json`の1件のみを設定する。
    pub fn ok(body: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            CONTENT_TYPE_HEADER.to_string(),
            CONTENT_TYPE_JSON.to_string(),
        );

        Self {
            status_code: 200,
            headers,
            body: body.into(),
        }
    }
}
