//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBox as Products, LuChevronDown as ChevronDown, LuChevronRight as ChevronRight,
        LuCreditCard as Secure, LuHeadphones as Support, LuHouse as Home,
        LuLayoutDashboard as Dashboard, LuLogOut as SignOut, LuMenu as Menu,
        LuMessageCircle as WhatsApp, LuMoon as Moon, LuReceipt as Orders,
        LuRotateCcw as Returns, LuSettings as Settings, LuShieldCheck as Roles,
        LuSun as Sun, LuTruck as Delivery, LuUsers as Customers, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Returns, BsBoxSeam as Products, BsChevronDown as ChevronDown,
        BsChevronRight as ChevronRight, BsCreditCard as Secure, BsGear as Settings,
        BsGrid1x2 as Dashboard, BsHeadset as Support, BsHouseFill as Home, BsList as Menu,
        BsMoonStars as Moon, BsPeople as Customers, BsReceipt as Orders,
        BsBoxArrowRight as SignOut, BsShieldCheck as Roles, BsSun as Sun, BsTruck as Delivery,
        BsWhatsapp as WhatsApp, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(CUSTOMERS, Customers);
themed_icon!(DASHBOARD, Dashboard);
themed_icon!(DELIVERY, Delivery);
themed_icon!(HOME, Home);
themed_icon!(MENU, Menu);
themed_icon!(MOON, Moon);
themed_icon!(ORDERS, Orders);
themed_icon!(PRODUCTS, Products);
themed_icon!(RETURNS, Returns);
themed_icon!(ROLES, Roles);
themed_icon!(SECURE, Secure);
themed_icon!(SETTINGS, Settings);
themed_icon!(SIGN_OUT, SignOut);
themed_icon!(SUN, Sun);
themed_icon!(SUPPORT, Support);
themed_icon!(WHATSAPP, WhatsApp);

/// Map a semantic icon key (from the nav catalog or feature list) to an icon.
pub fn by_key(key: &str) -> Icon {
    match key {
        "dashboard" => DASHBOARD,
        "products" => PRODUCTS,
        "orders" => ORDERS,
        "customers" => CUSTOMERS,
        "roles" => ROLES,
        "settings" => SETTINGS,
        "delivery" => DELIVERY,
        "secure" => SECURE,
        "returns" => RETURNS,
        "support" => SUPPORT,
        _ => HOME,
    }
}
