//! # Catalog
//!
//! Static, read-only datasets the app is built around: products, warranty
//! records, notification seeds, and the issue categories offered when asking
//! for tech advice. Nothing here is ever mutated; notifications are copied
//! into an owned collection at startup.

use chrono::NaiveDate;

use crate::core::notifications::{Notification, NotificationCategory};

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Panel,
    Inverter,
    Battery,
    PumpInverter,
    Electrical,
    Cabinet,
    DiyCombo,
}

impl ProductCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::Panel => "Tấm pin",
            ProductCategory::Inverter => "Biến tần",
            ProductCategory::Battery => "Pin lưu trữ",
            ProductCategory::PumpInverter => "Biến tần bơm",
            ProductCategory::Electrical => "Thiết bị điện",
            ProductCategory::Cabinet => "Tủ điện",
            ProductCategory::DiyCombo => "Combo DIY",
        }
    }
}

/// Category chip selection on the products screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    /// Chip order shown on the products screen.
    pub const CHIPS: [CategoryFilter; 8] = [
        CategoryFilter::All,
        CategoryFilter::Only(ProductCategory::Panel),
        CategoryFilter::Only(ProductCategory::Inverter),
        CategoryFilter::Only(ProductCategory::Battery),
        CategoryFilter::Only(ProductCategory::PumpInverter),
        CategoryFilter::Only(ProductCategory::Electrical),
        CategoryFilter::Only(ProductCategory::Cabinet),
        CategoryFilter::Only(ProductCategory::DiyCombo),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "Tất cả",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == category,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ProductCategory,
    pub model: &'static str,
    pub price: Option<&'static str>,
    pub image: &'static str,
    /// Ordered spec sheet (label, value).
    pub specs: &'static [(&'static str, &'static str)],
    pub warranty_months: u32,
}

pub static PRODUCTS: &[Product] = &[
    Product {
        id: "p1",
        name: "Tấm pin Mono Perc 550W",
        category: ProductCategory::Panel,
        model: "SP-550M",
        price: None,
        image: "https://images.unsplash.com/photo-1508514177221-188b1cf16e9d?auto=format&fit=crop&q=80&w=400",
        specs: &[("Công suất", "550W"), ("Hiệu suất", "21.3%")],
        warranty_months: 144,
    },
    Product {
        id: "p2",
        name: "Inverter Hybrid 5kW Single Phase",
        category: ProductCategory::Inverter,
        model: "SOL-H5K",
        price: None,
        image: "https://images.unsplash.com/photo-1592833159155-c62df1b35614?auto=format&fit=crop&q=80&w=400",
        specs: &[("Công suất", "5000W"), ("IP", "IP65")],
        warranty_months: 60,
    },
    Product {
        id: "p3",
        name: "Pin Lưu Trữ Lithium 10kWh",
        category: ProductCategory::Battery,
        model: "BAT-L10",
        price: None,
        image: "https://images.unsplash.com/photo-1620714223084-8fcacc6dfd8d?auto=format&fit=crop&q=80&w=400",
        specs: &[("Dung lượng", "10kWh"), ("Điện áp", "48V")],
        warranty_months: 120,
    },
    Product {
        id: "p4",
        name: "Biến tần bơm năng lượng mặt trời 2.2kW",
        category: ProductCategory::PumpInverter,
        model: "PUMP-2.2K",
        price: None,
        image: "https://images.unsplash.com/photo-1581092160562-40aa08e78837?auto=format&fit=crop&q=80&w=400",
        specs: &[("Công suất", "2.2kW"), ("Đầu ra", "3 Pha 380V")],
        warranty_months: 24,
    },
    Product {
        id: "p5",
        name: "Aptomat DC 1000V 32A",
        category: ProductCategory::Electrical,
        model: "MCB-DC-32A",
        price: None,
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc4b?auto=format&fit=crop&q=80&w=400",
        specs: &[("Dòng định mức", "32A"), ("Điện áp", "1000V DC")],
        warranty_months: 12,
    },
    Product {
        id: "p6",
        name: "Tủ điện Combined Box 4 String",
        category: ProductCategory::Cabinet,
        model: "CB-4S",
        price: None,
        image: "https://images.unsplash.com/photo-1544724569-5f546fd6f2b5?auto=format&fit=crop&q=80&w=400",
        specs: &[("Số String", "4 In - 1 Out"), ("Tiêu chuẩn", "Chống nước IP65")],
        warranty_months: 24,
    },
];

/// Products matching `filter`, in catalog order.
pub fn filter_products(filter: CategoryFilter) -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|p| filter.matches(p)).collect()
}

pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

// ============================================================================
// Warranty records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarrantyState {
    Valid,
    Near,
    Expired,
}

impl WarrantyState {
    pub fn label(self) -> &'static str {
        match self {
            WarrantyState::Valid => "Còn bảo hành",
            WarrantyState::Near => "Sắp hết hạn",
            WarrantyState::Expired => "Hết bảo hành",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct WarrantyRecord {
    /// Normalized (trimmed, uppercase) serial; the lookup key.
    pub serial: &'static str,
    pub product_name: &'static str,
    pub model: &'static str,
    pub activation_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: WarrantyState,
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid catalog date"),
    }
}

pub static WARRANTIES: &[WarrantyRecord] = &[WarrantyRecord {
    serial: "SP123456",
    product_name: "Inverter Hybrid 5kW",
    model: "SOL-H5K",
    activation_date: date(2023, 1, 15),
    expiry_date: date(2028, 1, 15),
    status: WarrantyState::Valid,
}];

// ============================================================================
// Issue types (advice form)
// ============================================================================

/// Product families offered on the advice form, with their known issues.
/// The last issue of every family is the catch-all "Khác".
pub static ISSUE_TYPES: &[(&str, &[&str])] = &[
    (
        "inverter",
        &[
            "Lỗi kết nối Wi-Fi",
            "Lỗi AC Overload",
            "Lỗi DC Isolation",
            "Màn hình không hiển thị",
            "Khác",
        ],
    ),
    (
        "battery",
        &[
            "Sạc không vào",
            "Dung lượng giảm nhanh",
            "Lỗi giao tiếp BMS",
            "Nhiệt độ cao",
            "Khác",
        ],
    ),
    (
        "panel",
        &[
            "Nứt vỡ vật lý",
            "Công suất giảm sâu",
            "Lỗi đầu nối MC4",
            "Điểm nóng (Hotspot)",
            "Khác",
        ],
    ),
    ("accessory", &["Lỗi Smart Meter", "Lỗi cáp kết nối", "Khác"]),
];

/// Issue family for a product model, used to preselect the advice form.
pub fn issue_family_for_model(model: &str) -> &'static str {
    let model = model.to_ascii_uppercase();
    if model.starts_with("SOL") || model.starts_with("PUMP") {
        "inverter"
    } else if model.starts_with("BAT") {
        "battery"
    } else if model.starts_with("SP") {
        "panel"
    } else {
        "accessory"
    }
}

pub fn issues_for(family: &str) -> &'static [&'static str] {
    ISSUE_TYPES
        .iter()
        .find(|(name, _)| *name == family)
        .map(|(_, issues)| *issues)
        .unwrap_or(&[])
}

// ============================================================================
// Notifications
// ============================================================================

struct NotificationSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: NotificationCategory,
    timestamp: &'static str,
    is_read: bool,
}

static NOTIFICATION_SEEDS: &[NotificationSeed] = &[
    NotificationSeed {
        id: "n1",
        title: "Bảo hành sắp hết hạn",
        description: "Inverter SOL-H5K của bạn còn 30 ngày bảo hành. Đăng ký gia hạn để được hỗ trợ liên tục.",
        category: NotificationCategory::Warranty,
        timestamp: "2 giờ trước",
        is_read: false,
    },
    NotificationSeed {
        id: "n2",
        title: "Lịch bảo trì định kỳ",
        description: "Kỹ thuật viên sẽ liên hệ để vệ sinh tấm pin và kiểm tra hệ thống trong tuần này.",
        category: NotificationCategory::Service,
        timestamp: "Hôm qua",
        is_read: false,
    },
    NotificationSeed {
        id: "n3",
        title: "Ưu đãi pin lưu trữ",
        description: "Giảm 10% cho Pin Lưu Trữ Lithium 10kWh khi nâng cấp hệ thống hybrid.",
        category: NotificationCategory::Promotion,
        timestamp: "3 ngày trước",
        is_read: true,
    },
    NotificationSeed {
        id: "n4",
        title: "Cập nhật ứng dụng",
        description: "Phiên bản mới hỗ trợ tra cứu bảo hành nhanh bằng số serial.",
        category: NotificationCategory::System,
        timestamp: "1 tuần trước",
        is_read: true,
    },
];

/// Fresh, owned copy of the notification seed data.
pub fn seed_notifications() -> Vec<Notification> {
    NOTIFICATION_SEEDS
        .iter()
        .map(|seed| Notification {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category,
            timestamp: seed.timestamp.to_string(),
            is_read: seed.is_read,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_keeps_catalog_order() {
        let ids: Vec<_> = filter_products(CategoryFilter::All).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5", "p6"]);
    }

    #[test]
    fn test_filter_by_category() {
        let batteries = filter_products(CategoryFilter::Only(ProductCategory::Battery));
        assert_eq!(batteries.len(), 1);
        assert_eq!(batteries[0].model, "BAT-L10");
    }

    #[test]
    fn test_filter_empty_category() {
        assert!(filter_products(CategoryFilter::Only(ProductCategory::DiyCombo)).is_empty());
    }

    #[test]
    fn test_find_product() {
        assert_eq!(find_product("p2").map(|p| p.model), Some("SOL-H5K"));
        assert!(find_product("p99").is_none());
    }

    #[test]
    fn test_issue_family_for_model() {
        assert_eq!(issue_family_for_model("SOL-H5K"), "inverter");
        assert_eq!(issue_family_for_model("bat-l10"), "battery");
        assert_eq!(issue_family_for_model("SP-550M"), "panel");
        assert_eq!(issue_family_for_model("CB-4S"), "accessory");
    }

    #[test]
    fn test_every_issue_family_ends_with_other() {
        for (family, _) in ISSUE_TYPES {
            assert_eq!(issues_for(family).last(), Some(&"Khác"));
        }
        assert!(issues_for("unknown").is_empty());
    }

    #[test]
    fn test_seed_notifications_has_unread() {
        let seeds = seed_notifications();
        assert_eq!(seeds.len(), 4);
        assert_eq!(seeds.iter().filter(|n| !n.is_read).count(), 2);
    }
}
