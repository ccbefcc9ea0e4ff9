//! Page language selection and translated strings.

/// Supported page languages. Japanese is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    Ja,
    En,
}

impl Lang {
    /// Parse a `lang` parameter, falling back to the default for anything unknown.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("en") => Self::En,
            _ => Self::Ja,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// The language offered by the switch link.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Ja => Self::En,
            Self::En => Self::Ja,
        }
    }

    #[must_use]
    pub fn texts(self) -> &'static Texts {
        match self {
            Self::Ja => &JA,
            Self::En => &EN,
        }
    }
}

/// Every user-visible string of the editor pages.
#[derive(Debug)]
pub struct Texts {
    pub title: &'static str,
    pub alert: &'static str,
    pub current_id: &'static str,
    pub detected_mac: &'static str,
    pub placeholder: &'static str,
    pub sync_mac: &'static str,
    pub update_title: &'static str,
    pub bulk_top: &'static str,
    pub bulk_bottom: &'static str,
    pub result_title: &'static str,
    result_msg: &'static str,
    pub result_note: &'static str,
    pub back_home: &'static str,
    pub lang_switch: &'static str,
}

impl Texts {
    /// Confirmation sentence for `count` saved changes.
    #[must_use]
    pub fn result_msg(&self, count: usize) -> String {
        self.result_msg.replace("{n}", &count.to_string())
    }
}

static JA: Texts = Texts {
    title: "HA Unique ID Patch",
    alert: "⚠ 注意: IDを変更した後は、Home Assistant本体を再起動する必要があります。書き換え前に自動的にバックアップが保存されます。",
    current_id: "現在のID",
    detected_mac: "検出されたMac Addr",
    placeholder: "新しいUnique IDを入力...",
    sync_mac: "Mac Addr同期",
    update_title: "タイトルも更新",
    bulk_top: "選択した項目を一括更新",
    bulk_bottom: "選択した項目を一括更新",
    result_title: "更新完了",
    result_msg: "{n} 件の変更を保存しました。",
    result_note: "変更を反映させるには、Home Assistant の再起動が必要です。",
    back_home: "ホームに戻る",
    lang_switch: "English",
};

static EN: Texts = Texts {
    title: "HA Unique ID Patch",
    alert: "⚠ CAUTION: You must restart Home Assistant after changing IDs. A backup is automatically saved before modification.",
    current_id: "Current ID",
    detected_mac: "Detected Mac Addr",
    placeholder: "Enter new Unique ID...",
    sync_mac: "Sync Mac Addr",
    update_title: "Update Title",
    bulk_top: "Update Selected",
    bulk_bottom: "Update Selected",
    result_title: "Update Complete",
    result_msg: "Saved {n} changes.",
    result_note: "A Home Assistant restart is required to apply changes.",
    back_home: "Back to Home",
    lang_switch: "日本語",
};
