//! Toast notifications.

use std::time::Duration;

use serde::Serialize;

use crate::locale::Locale;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Visual class of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// The message in the panel's single toast slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    /// Bumped on every `show_toast`; a hide timer only clears its own toast
    #[serde(skip)]
    pub(crate) generation: u64,
}

/// Messages the panel shows by itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    PartialTimezoneSupport,
    ZonesEnabled,
    BasicZones,
    CurrentTimeFetched,
    EnterTimestamp,
    EnterNumber,
    Converted,
    ConversionFailed(String),
    UnknownTimezone(String),
    EnterDateTime,
    ReverseConverted,
    Cleared,
    HostUnavailable,
    HotkeysUnsupported,
    HotkeysOpened,
    HotkeysFailed(String),
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::BasicZones => Severity::Info,
            Notice::ZonesEnabled
            | Notice::CurrentTimeFetched
            | Notice::Converted
            | Notice::ReverseConverted
            | Notice::Cleared
            | Notice::HotkeysOpened => Severity::Success,
            Notice::PartialTimezoneSupport | Notice::HotkeysUnsupported => Severity::Warning,
            Notice::EnterTimestamp
            | Notice::EnterNumber
            | Notice::ConversionFailed(_)
            | Notice::UnknownTimezone(_)
            | Notice::EnterDateTime
            | Notice::HostUnavailable
            | Notice::HotkeysFailed(_) => Severity::Error,
        }
    }

    pub fn message(&self, locale: Locale) -> String {
        let text = match (self, locale) {
            (Notice::ConversionFailed(reason), Locale::En) => {
                return format!("Conversion failed: {reason}")
            }
            (Notice::ConversionFailed(reason), Locale::ZhCn) => return format!("转换失败: {reason}"),
            (Notice::UnknownTimezone(zone), Locale::En) => {
                return format!("Unknown time zone: {zone}")
            }
            (Notice::UnknownTimezone(zone), Locale::ZhCn) => return format!("未知时区: {zone}"),
            (Notice::HotkeysFailed(reason), Locale::En) => {
                return format!("Failed to open hotkey settings: {reason}")
            }
            (Notice::HotkeysFailed(reason), Locale::ZhCn) => {
                return format!("打开快捷键设置失败: {reason}")
            }
            (Notice::PartialTimezoneSupport, Locale::En) => {
                "Time zone support is incomplete in this environment"
            }
            (Notice::PartialTimezoneSupport, Locale::ZhCn) => "当前环境不完全支持时区功能",
            (Notice::ZonesEnabled, Locale::En) => "Time zones enabled, all IANA zones available",
            (Notice::ZonesEnabled, Locale::ZhCn) => "时区功能已启用，支持全球时区转换",
            (Notice::BasicZones, Locale::En) => "Using basic time zone support",
            (Notice::BasicZones, Locale::ZhCn) => "使用基础时区功能",
            (Notice::CurrentTimeFetched, Locale::En) => "Fetched current timestamp",
            (Notice::CurrentTimeFetched, Locale::ZhCn) => "已获取当前时间戳",
            (Notice::EnterTimestamp, Locale::En) => "Please enter a timestamp",
            (Notice::EnterTimestamp, Locale::ZhCn) => "请输入时间戳",
            (Notice::EnterNumber, Locale::En) => "Please enter a valid number",
            (Notice::EnterNumber, Locale::ZhCn) => "请输入有效的数字",
            (Notice::Converted, Locale::En) => "Converted!",
            (Notice::Converted, Locale::ZhCn) => "转换成功！",
            (Notice::EnterDateTime, Locale::En) => "Please enter a date and time",
            (Notice::EnterDateTime, Locale::ZhCn) => "请选择日期时间",
            (Notice::ReverseConverted, Locale::En) => "Reverse conversion succeeded!",
            (Notice::ReverseConverted, Locale::ZhCn) => "反向转换成功！",
            (Notice::Cleared, Locale::En) => "Cleared everything",
            (Notice::Cleared, Locale::ZhCn) => "已清空所有内容",
            (Notice::HostUnavailable, Locale::En) => "Host platform bridge is not loaded",
            (Notice::HostUnavailable, Locale::ZhCn) => "平台API未加载，请检查预加载脚本",
            (Notice::HotkeysUnsupported, Locale::En) => "Hotkey settings are not available",
            (Notice::HotkeysUnsupported, Locale::ZhCn) => "快捷键设置功能暂未实现",
            (Notice::HotkeysOpened, Locale::En) => "Opened hotkey settings",
            (Notice::HotkeysOpened, Locale::ZhCn) => "已打开快捷键设置页面",
        };
        text.to_string()
    }
}
