//! Localized display strings.
//!
//! The daemon ships English and Japanese built-ins; a `[strings]` table in
//! the config file overrides the whole set.

use serde::{Deserialize, Serialize};

/// Every piece of user-visible text the daemon produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strings {
    pub channel_name: String,
    pub channel_description: String,
    pub notification_title: String,
    pub unknown_carrier: String,
    pub error_getting_carrier: String,
}

impl Default for Strings {
    fn default() -> Strings {
        Strings::en()
    }
}

impl Strings {
    pub fn en() -> Strings {
        Strings {
            channel_name: "Carrier info".into(),
            channel_description: "Shows the carrier currently providing mobile data".into(),
            notification_title: "Current carrier".into(),
            unknown_carrier: "Unknown carrier".into(),
            error_getting_carrier: "Error getting carrier info".into(),
        }
    }

    pub fn ja() -> Strings {
        Strings {
            channel_name: "キャリア情報".into(),
            channel_description: "モバイルデータ通信中のキャリアを表示します".into(),
            notification_title: "現在のキャリア".into(),
            unknown_carrier: "不明なキャリア".into(),
            error_getting_carrier: "キャリア情報の取得エラー".into(),
        }
    }

    /// Built-ins for a locale tag; unknown tags fall back to English.
    pub fn for_locale(tag: &str) -> Strings {
        match tag {
            "ja" | "ja-JP" => Strings::ja(),
            _ => Strings::en(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_locale_falls_back_to_english() {
        assert_eq!(Strings::for_locale("de"), Strings::en());
        assert_eq!(Strings::for_locale(""), Strings::en());
    }

    #[test]
    fn japanese_locale_selects_japanese_strings() {
        assert_eq!(Strings::for_locale("ja"), Strings::ja());
        assert_eq!(Strings::for_locale("ja-JP").unknown_carrier, "不明なキャリア");
    }

    #[test]
    fn partial_override_keeps_english_defaults() {
        let strings: Strings = serde_json::from_str(r#"{"unknown_carrier": "???"}"#).unwrap();
        assert_eq!(strings.unknown_carrier, "???");
        assert_eq!(strings.notification_title, Strings::en().notification_title);
    }
}
