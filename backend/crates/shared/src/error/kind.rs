//! Error Kind
//!
//! ポータルのエラー分類。ドメインエラーは必ずいずれかの種別に写像され、
//! 種別が HTTP ステータスと Problem Details の `title` を決める。

use serde::Serialize;

/// エラー種別
///
/// | 種別 | 代表的な発生源 |
/// |---|---|
/// | `BadRequest` | 登録フォーム・提出フォームの不備 |
/// | `Unauthorized` | ログイン失敗、セッション切れ |
/// | `NotFound` | セッションが削除済みユーザーを指す |
/// | `Conflict` | ユーザー名・チーム名の重複 |
/// | `InternalServerError` | ストレージ障害 |
/// | `ServiceUnavailable` | データベースに接続できない |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    InternalServerError,
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::InternalServerError => 500,
            Self::ServiceUnavailable => 503,
        }
    }

    /// Reason phrase, used as the problem `title`
    pub const fn title(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::InternalServerError => "Internal Server Error",
            Self::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// 5xx: the detail is never shown to the user and the error is logged
    pub const fn is_server_error(self) -> bool {
        matches!(self, Self::InternalServerError | Self::ServiceUnavailable)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_and_duplicate_errors_are_client_errors() {
        for kind in [ErrorKind::BadRequest, ErrorKind::Conflict, ErrorKind::Unauthorized] {
            assert!((400..500).contains(&kind.status_code()));
            assert!(!kind.is_server_error());
        }
    }

    #[test]
    fn test_storage_errors_are_server_errors() {
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), 503);
        assert!(ErrorKind::ServiceUnavailable.is_server_error());
    }

    #[test]
    fn test_display_is_title() {
        assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
        assert_eq!(
            serde_json::to_string(&ErrorKind::Conflict).unwrap(),
            r#""conflict""#
        );
    }
}
