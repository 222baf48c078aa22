//! Conversion between stored text and typed setting values.
//!
//! Each supported type implements [`SettingValue`] directly; there is no
//! runtime registry. Implement the trait for your own types to read and
//! write them through a resolver.

use std::path::PathBuf;

/// A type that can be stored as setting text.
pub trait SettingValue: Sized {
    /// Name used in conversion error messages.
    const TYPE_NAME: &'static str;

    /// Parses stored text. The error is the parser's message.
    fn parse_setting(text: &str) -> Result<Self, String>;

    /// Canonical text written to the store.
    fn format_setting(&self) -> String;
}

impl SettingValue for String {
    const TYPE_NAME: &'static str = "String";

    fn parse_setting(text: &str) -> Result<Self, String> {
        Ok(text.to_string())
    }

    fn format_setting(&self) -> String {
        self.clone()
    }
}

impl SettingValue for PathBuf {
    const TYPE_NAME: &'static str = "PathBuf";

    fn parse_setting(text: &str) -> Result<Self, String> {
        Ok(PathBuf::from(text))
    }

    fn format_setting(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

/// Accepts `true`/`false` in any letter case, surrounding whitespace ignored.
impl SettingValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_setting(text: &str) -> Result<Self, String> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err("expected `true` or `false`".to_string())
        }
    }

    fn format_setting(&self) -> String {
        self.to_string()
    }
}

impl SettingValue for char {
    const TYPE_NAME: &'static str = "char";

    fn parse_setting(text: &str) -> Result<Self, String> {
        text.parse::<char>().map_err(|e| e.to_string())
    }

    fn format_setting(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_numeric_setting {
    ($($ty:ty),* $(,)?) => {$(
        impl SettingValue for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn parse_setting(text: &str) -> Result<Self, String> {
                text.trim().parse::<$ty>().map_err(|e| e.to_string())
            }

            fn format_setting(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_numeric_setting!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
