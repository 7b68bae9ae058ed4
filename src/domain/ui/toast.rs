use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
    Success,
}

impl ToastVariant {
    pub fn class_name(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast-default",
            ToastVariant::Destructive => "toast-destructive",
            ToastVariant::Success => "toast-success",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            ToastVariant::Default => "Notice",
            ToastVariant::Destructive => "Something went wrong",
            ToastVariant::Success => "Done",
        }
    }
}

// Unknown variants render as the default toast instead of failing the payload.
impl<'de> Deserialize<'de> for ToastVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.to_ascii_lowercase().as_str() {
            "destructive" => ToastVariant::Destructive,
            "success" => ToastVariant::Success,
            _ => ToastVariant::Default,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Toast {
    pub variant: ToastVariant,
    pub class_name: String,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn new(variant: ToastVariant, title: Option<String>, description: Option<String>) -> Self {
        Self {
            variant,
            class_name: variant.class_name().to_string(),
            title: title.unwrap_or_else(|| variant.default_title().to_string()),
            description,
        }
    }
}
