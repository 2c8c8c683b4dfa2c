//! Leaderboard and voucher catalogue. Both are display-only.

use serde::Serialize;

use crate::localization::LocalizedText;

/// The signed-in demo user.
pub const CURRENT_USER_NAME: &str = "Linh Đỗ";
pub const CURRENT_USER_INITIALS: &str = "LĐ";

/// Points per tree in the plant-a-tree offer.
pub const POINTS_PER_TREE: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub name: &'static str,
    pub points: u32,
    pub initials: &'static str,
}

impl LeaderboardEntry {
    pub fn is_current_user(&self) -> bool {
        self.name == CURRENT_USER_NAME
    }
}

pub static LEADERBOARD: &[LeaderboardEntry] = &[
    LeaderboardEntry {
        name: "Minh Anh",
        points: 2850,
        initials: "MA",
    },
    LeaderboardEntry {
        name: "Thu Trang",
        points: 2340,
        initials: "TT",
    },
    LeaderboardEntry {
        name: CURRENT_USER_NAME,
        points: 1920,
        initials: CURRENT_USER_INITIALS,
    },
    LeaderboardEntry {
        name: "Duc Huy",
        points: 1750,
        initials: "DH",
    },
    LeaderboardEntry {
        name: "Ngoc Mai",
        points: 1520,
        initials: "NM",
    },
];

/// Points shown for a leaderboard row; the current user's row tracks the
/// live balance.
pub fn leaderboard_points(entry: &LeaderboardEntry, user_points: u32) -> u32 {
    if entry.is_current_user() {
        user_points
    } else {
        entry.points
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Voucher {
    pub name: LocalizedText,
    pub cost: u32,
}

pub static VOUCHERS: &[Voucher] = &[
    Voucher {
        name: LocalizedText::new("Starbucks Ly Xanh", "Starbucks Green Cup"),
        cost: 200,
    },
    Voucher {
        name: LocalizedText::new("Grab Chuyến Eco", "Grab Eco Ride"),
        cost: 150,
    },
    Voucher {
        name: LocalizedText::new("Shopee Túi Eco", "Shopee Eco Bag"),
        cost: 100,
    },
    Voucher {
        name: LocalizedText::new("Aquafina Refill", "Aquafina Refill"),
        cost: 80,
    },
];
