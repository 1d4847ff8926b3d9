//! # Auth Sub-flow
//!
//! Local selector for the logged-out screens: login, sign-up and
//! forgot-password, with an optional policy page layered over sign-up.
//! It has no effect on navigation; only a successful login does.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPage {
    #[default]
    Login,
    SignUp,
    Forgot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Terms,
    Privacy,
}

impl Policy {
    pub fn title(self) -> &'static str {
        match self {
            Policy::Terms => "Điều khoản sử dụng",
            Policy::Privacy => "Chính sách bảo mật",
        }
    }

    /// Numbered (heading, body) sections.
    pub fn sections(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Policy::Terms => &[
                (
                    "1. Chấp thuận điều khoản",
                    "Bằng việc đăng ký tài khoản SOLPOWER, bạn đồng ý tuân thủ các điều khoản này. Chúng tôi có quyền cập nhật điều khoản bất kỳ lúc nào.",
                ),
                (
                    "2. Sử dụng dịch vụ",
                    "Ứng dụng được cung cấp để hỗ trợ kỹ thuật và quản lý bảo hành thiết bị năng lượng mặt trời. Mọi hành vi phá hoại hoặc sử dụng sai mục đích sẽ bị đình chỉ tài khoản.",
                ),
                (
                    "3. Trách nhiệm dữ liệu",
                    "Người dùng có trách nhiệm cung cấp thông tin thiết bị (S/N) chính xác để nhận được hỗ trợ tốt nhất.",
                ),
                (
                    "4. Giới hạn trách nhiệm",
                    "SOLPOWER không chịu trách nhiệm cho các hư hỏng do việc tự ý lắp đặt hoặc sửa chữa không theo hướng dẫn kỹ thuật.",
                ),
            ],
            Policy::Privacy => &[
                (
                    "1. Thu thập thông tin",
                    "Chúng tôi thu thập Email, SĐT và thông tin hệ thống điện mặt trời của bạn để phục vụ việc bảo hành và tối ưu hiệu suất.",
                ),
                (
                    "2. Sử dụng thông tin",
                    "Thông tin được sử dụng để liên hệ hỗ trợ, gửi thông báo bảo trì và xác thực quyền lợi bảo hành.",
                ),
                (
                    "3. Bảo mật",
                    "Dữ liệu được mã hóa và lưu trữ an toàn trên máy chủ của chúng tôi. Chúng tôi cam kết không bán dữ liệu cho bên thứ ba.",
                ),
                (
                    "4. Quyền của bạn",
                    "Bạn có quyền yêu cầu xóa tài khoản và dữ liệu cá nhân bất kỳ lúc nào thông qua phần cài đặt tài khoản.",
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthFlow {
    pub page: AuthPage,
    pub policy: Option<Policy>,
}

impl AuthFlow {
    pub fn show(&mut self, page: AuthPage) {
        self.page = page;
        self.policy = None;
    }

    pub fn show_policy(&mut self, policy: Policy) {
        self.policy = Some(policy);
    }

    /// Policy page first, then back to login.
    pub fn back(&mut self) {
        if self.policy.take().is_none() {
            self.page = AuthPage::Login;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_closes_policy_before_page() {
        let mut flow = AuthFlow::default();
        flow.show(AuthPage::SignUp);
        flow.show_policy(Policy::Terms);
        flow.back();
        assert_eq!(flow.page, AuthPage::SignUp);
        assert!(flow.policy.is_none());
        flow.back();
        assert_eq!(flow, AuthFlow::default());
    }

    #[test]
    fn test_show_page_drops_policy() {
        let mut flow = AuthFlow::default();
        flow.show_policy(Policy::Privacy);
        flow.show(AuthPage::Forgot);
        assert_eq!(flow.page, AuthPage::Forgot);
        assert!(flow.policy.is_none());
    }

    #[test]
    fn test_policies_have_four_sections() {
        assert_eq!(Policy::Terms.sections().len(), 4);
        assert_eq!(Policy::Privacy.sections().len(), 4);
    }
}
