//! # Tech Advice
//!
//! The one external integration: ask a generative-text service for a quick
//! diagnosis of a customer-described fault.
//!
//! ```text
//! AdviceRequest ──build_prompt()──▶ AdviceProvider::generate()
//!                                        │
//!                     Ok(text) ◀─────────┴────────▶ Err(_) ──▶ FALLBACK_ADVICE
//! ```
//!
//! Callers only ever see a string. Failures are logged here and replaced by
//! the fixed fallback message; they never reach navigation.

pub mod provider;
pub mod providers;

pub use provider::{AdviceProvider, ProviderError, UnconfiguredProvider};
pub use providers::{GeminiProvider, OpenRouterProvider};

use log::{info, warn};

/// Shown whenever the advice service cannot produce an answer.
pub const FALLBACK_ADVICE: &str = "Rất tiếc, hệ thống tư vấn thông minh đang bận. Vui lòng gửi yêu cầu hỗ trợ, kỹ thuật viên sẽ liên hệ lại ngay.";

/// A customer's fault description, as entered on the warranty form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRequest {
    pub product_type: String,
    pub issue_category: String,
    pub description: String,
}

/// Senior-technician prompt: preliminary diagnosis, a few safe on-site
/// checks, and whether to wait for a technician. Markdown, in Vietnamese.
pub fn build_prompt(request: &AdviceRequest) -> String {
    format!(
        "Bạn là kỹ thuật viên cao cấp tại SOLPOWER, một công ty năng lượng mặt trời.\n\
         Khách hàng đang gặp vấn đề với thiết bị sau:\n\
         Loại sản phẩm: {}\n\
         Loại sự cố: {}\n\
         Mô tả của khách hàng: {}\n\
         \n\
         Hãy cung cấp:\n\
         1. Chẩn đoán sơ bộ.\n\
         2. 3-4 bước kiểm tra nhanh tại chỗ (an toàn).\n\
         3. Lời khuyên có nên đợi kỹ thuật viên đến hay không.\n\
         \n\
         Phản hồi bằng tiếng Việt, ngắn gọn, chuyên nghiệp, định dạng Markdown.",
        request.product_type.trim(),
        request.issue_category.trim(),
        request.description.trim(),
    )
}

/// Asks `provider` for advice. Never fails: any error, or a blank answer,
/// yields [`FALLBACK_ADVICE`].
pub async fn get_tech_advice(provider: &dyn AdviceProvider, request: &AdviceRequest) -> String {
    let prompt = build_prompt(request);
    match provider.generate(&prompt).await {
        Ok(text) if !text.trim().is_empty() => {
            info!(
                "Advice received from {} ({} bytes)",
                provider.name(),
                text.len()
            );
            text.trim().to_string()
        }
        Ok(_) => {
            warn!("Advice from {} was empty, using fallback", provider.name());
            FALLBACK_ADVICE.to_string()
        }
        Err(e) => {
            warn!("Advice request to {} failed: {}", provider.name(), e);
            FALLBACK_ADVICE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingProvider, StubProvider};

    fn request() -> AdviceRequest {
        AdviceRequest {
            product_type: "inverter".to_string(),
            issue_category: "Lỗi AC Overload".to_string(),
            description: "  Inverter báo lỗi vào buổi trưa  ".to_string(),
        }
    }

    #[test]
    fn test_prompt_includes_request_fields() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Loại sản phẩm: inverter\n"));
        assert!(prompt.contains("Loại sự cố: Lỗi AC Overload\n"));
        assert!(prompt.contains("Mô tả của khách hàng: Inverter báo lỗi vào buổi trưa\n"));
        assert!(prompt.ends_with("định dạng Markdown."));
    }

    #[tokio::test]
    async fn test_advice_returns_trimmed_text() {
        let provider = StubProvider::new("\n**Chẩn đoán**: quá tải\n");
        let advice = get_tech_advice(&provider, &request()).await;
        assert_eq!(advice, "**Chẩn đoán**: quá tải");
    }

    #[tokio::test]
    async fn test_advice_sends_built_prompt() {
        let provider = StubProvider::new("ok");
        get_tech_advice(&provider, &request()).await;
        assert_eq!(provider.last_prompt().as_deref(), Some(build_prompt(&request()).as_str()));
    }

    #[tokio::test]
    async fn test_advice_falls_back_on_error() {
        let advice = get_tech_advice(&FailingProvider, &request()).await;
        assert_eq!(advice, FALLBACK_ADVICE);
    }

    #[tokio::test]
    async fn test_advice_falls_back_on_blank_text() {
        let provider = StubProvider::new("   ");
        let advice = get_tech_advice(&provider, &request()).await;
        assert_eq!(advice, FALLBACK_ADVICE);
    }

    #[tokio::test]
    async fn test_unconfigured_provider_yields_fallback() {
        let advice = get_tech_advice(&UnconfiguredProvider, &request()).await;
        assert_eq!(advice, FALLBACK_ADVICE);
    }
}
