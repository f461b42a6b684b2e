//! Kernel
//!
//! account と hackathon の両ドメインから使われる最小限の共通部分。
//!
//! - [`error`]: HTTP 境界の統一エラー型と種別
//! - [`clock`]: 現在時刻の供給源（クレジット付与と提出時刻はここから時刻を得る）

pub mod clock;

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;

    pub use app_error::{AppError, AppResult};
    pub use kind::ErrorKind;
}
