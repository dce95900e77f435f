//! One module per console screen: its view state and renderer.

pub mod dashboard;
pub mod orders;
pub mod payments;
pub mod pricing;
pub mod products;
pub mod referrals;
pub mod scheme_detail;
pub mod schemes;
pub mod user_detail;
pub mod users;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::ui::app::App;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Users,
    UserDetail,
    Products,
    Pricing,
    Payments,
    Orders,
    Referrals,
    Schemes,
    SchemeDetail,
}

impl Page {
    /// Sidebar entries, in hotkey order.
    pub const NAV: [Page; 8] = [
        Page::Dashboard,
        Page::Users,
        Page::Products,
        Page::Pricing,
        Page::Payments,
        Page::Orders,
        Page::Referrals,
        Page::Schemes,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::UserDetail => "User Details",
            Page::Products => "Products",
            Page::Pricing => "Pricing",
            Page::Payments => "Payments & Refunds",
            Page::Orders => "Orders",
            Page::Referrals => "Referrals",
            Page::Schemes => "Schemes",
            Page::SchemeDetail => "Scheme Details",
        }
    }

    /// Screen for a digit hotkey (`1` is the dashboard).
    pub fn from_hotkey(digit: char) -> Option<Page> {
        let index = digit.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|index| Page::NAV.get(index).copied())
    }

    /// Entry highlighted in the sidebar.
    pub fn nav_entry(self) -> Page {
        match self {
            Page::UserDetail => Page::Users,
            Page::SchemeDetail => Page::Schemes,
            page => page,
        }
    }

    /// Screens that accept typed search text.
    pub fn is_searchable(self) -> bool {
        matches!(self, Page::Users | Page::Products)
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.page() {
        Page::Dashboard => dashboard::render(frame, area, app),
        Page::Users => users::render(frame, area, app),
        Page::UserDetail => user_detail::render(frame, area, app),
        Page::Products => products::render(frame, area, app),
        Page::Pricing => pricing::render(frame, area, app),
        Page::Payments => payments::render(frame, area, app),
        Page::Orders => orders::render(frame, area, app),
        Page::Referrals => referrals::render(frame, area, app),
        Page::Schemes => schemes::render(frame, area, app),
        Page::SchemeDetail => scheme_detail::render(frame, area, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotkeys_map_to_sidebar_order() {
        assert_eq!(Page::from_hotkey('1'), Some(Page::Dashboard));
        assert_eq!(Page::from_hotkey('8'), Some(Page::Schemes));
        assert_eq!(Page::from_hotkey('0'), None);
        assert_eq!(Page::from_hotkey('9'), None);
        assert_eq!(Page::UserDetail.nav_entry(), Page::Users);
        assert_eq!(Page::SchemeDetail.nav_entry(), Page::Schemes);
    }
}
