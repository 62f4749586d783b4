//! # Renderer
//!
//! Draws the ordering page as text.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  味道餐厅  正宗中餐，现点现做                         [购物车 (3)]        │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  菜品分类  [全部]  主菜  主食  汤品  小食                                  │
//! │                                                                         │
//! │  menu cards ...                                                         │
//! │                                                                         │
//! │  Wide:    订单详情 panel, always                                         │
//! │  Narrow:  订单详情 sheet, only while opened from the header button       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The page is captured from the session through the same commands a front
//! end would call, then formatted by its `Display` impl.

use std::fmt;

use weidao_core::effective_image_or;

use crate::commands::cart::{get_cart, CartResponse};
use crate::commands::menu::{get_categories, list_menu, CategoryOption, MenuCardDto, MenuResponse};
use crate::commands::view::{get_view, ViewResponse};
use crate::state::{ConfigState, LayoutMode, Session};

const RULE: &str = "────────────────────────────────────────────────────────────";
const HALF_RULE: &str = "──────────────────────────────";

/// A snapshot of everything on screen.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    config: &'a ConfigState,
    view: ViewResponse,
    categories: Vec<CategoryOption>,
    menu: MenuResponse,
    cart: CartResponse,
}

impl<'a> PageView<'a> {
    pub fn capture(session: &'a Session) -> Self {
        PageView {
            config: &session.config,
            view: get_view(&session.view, &session.config),
            categories: get_categories(&session.catalog, &session.view),
            menu: list_menu(&session.catalog, &session.view, &session.config),
            cart: get_cart(&session.cart, &session.config),
        }
    }

    fn fmt_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.cart.totals.total_quantity;
        let button = if count > 0 {
            format!("[购物车 ({})]", count)
        } else {
            "[购物车]".to_string()
        };

        writeln!(f, "{}  {}    {}", self.config.store_name, self.config.tagline, button)?;
        writeln!(f, "{}", RULE)
    }

    fn fmt_category_bar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "菜品分类 ")?;
        for option in &self.categories {
            if option.selected {
                write!(f, " [{}]", option.label)?;
            } else {
                write!(f, "  {} ", option.label)?;
            }
        }
        writeln!(f)?;
        writeln!(f)
    }

    fn fmt_menu_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.menu.items.is_empty() {
            writeln!(f, "  （该分类暂无菜品）")?;
            return writeln!(f);
        }

        for card in &self.menu.items {
            self.fmt_menu_card(f, card)?;
        }
        Ok(())
    }

    fn fmt_menu_card(&self, f: &mut fmt::Formatter<'_>, card: &MenuCardDto) -> fmt::Result {
        writeln!(
            f,
            "  #{} {}  {}    {}  <{}>",
            card.id,
            card.name_zh,
            card.name,
            self.config.format_currency(card.price),
            card.category
        )?;
        writeln!(f, "     {}", card.description)?;
        writeln!(f, "     图片: {}", card.image)?;
        writeln!(f, "     [+ 加入购物车]  add {}", card.id)?;
        writeln!(f)
    }

    fn fmt_cart(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view.layout {
            LayoutMode::Wide => writeln!(f, "── 订单详情 {}", HALF_RULE)?,
            LayoutMode::Narrow => writeln!(f, "══ 订单详情 ══  [×] close")?,
        }

        if self.cart.items.is_empty() {
            writeln!(f, "  购物车是空的")?;
            return writeln!(f, "  快来添加美味菜品吧！");
        }

        for line in &self.cart.items {
            writeln!(
                f,
                "  {}  {}   [-] {} [+]   [×]   {}",
                line.name_zh,
                self.config.format_currency(line.unit_price),
                line.quantity,
                effective_image_or(line.image.as_deref(), &self.config.placeholder_image)
            )?;
        }

        let totals = &self.cart.totals;
        writeln!(f, "  {}", HALF_RULE)?;
        writeln!(f, "  小计    {}", self.config.format_currency(totals.subtotal))?;
        writeln!(f, "  服务费  {}", self.config.format_currency(totals.service_fee))?;
        writeln!(f, "  总计    {}", self.config.format_currency(totals.grand_total))?;
        writeln!(f, "  [结算订单]")
    }
}

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)?;
        self.fmt_category_bar(f)?;
        self.fmt_menu_grid(f)?;

        if self.view.cart_visible {
            self.fmt_cart(f)?;
        }
        Ok(())
    }
}

/// Renders the whole page for the session's current state.
pub fn render_page(session: &Session) -> String {
    PageView::capture(session).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::menu::select_category;
    use crate::commands::view::{set_viewport_width, toggle_cart_panel};
    use weidao_core::MenuItemId;

    fn session(width: u32) -> Session {
        let config = ConfigState {
            viewport_width: width,
            ..ConfigState::default()
        };
        Session::new(config)
    }

    fn add(session: &mut Session, id: u32) {
        add_to_cart(
            &session.catalog,
            &mut session.cart,
            &session.config,
            MenuItemId::new(id),
        )
        .unwrap();
    }

    #[test]
    fn test_empty_cart_has_no_badge() {
        let page = render_page(&session(1280));

        assert!(page.contains("[购物车]"));
        assert!(page.contains("购物车是空的"));
        assert!(page.contains("快来添加美味菜品吧！"));
        assert!(!page.contains("[结算订单]"));
    }

    #[test]
    fn test_badge_and_totals() {
        let mut session = session(1280);
        add(&mut session, 1);
        add(&mut session, 1);
        add(&mut session, 2);

        let page = render_page(&session);
        assert!(page.contains("[购物车 (3)]"));
        assert!(page.contains("宫保鸡丁  ¥68   [-] 2 [+]"));
        assert!(page.contains("小计    ¥184"));
        assert!(page.contains("服务费  ¥5"));
        assert!(page.contains("总计    ¥189"));
        assert!(page.contains("[结算订单]"));
    }

    #[test]
    fn test_menu_grid_follows_filter() {
        let mut session = session(1280);
        select_category(&session.catalog, &mut session.view, &session.config, "小食");

        let page = render_page(&session);
        assert!(page.contains("[小食]"));
        assert!(page.contains("春卷"));
        assert!(page.contains("水饺"));
        assert!(!page.contains("宫保鸡丁"));
    }

    #[test]
    fn test_unknown_category_renders_empty_grid() {
        let mut session = session(1280);
        select_category(&session.catalog, &mut session.view, &session.config, "甜品");

        let page = render_page(&session);
        assert!(page.contains("该分类暂无菜品"));
    }

    #[test]
    fn test_narrow_hides_cart_until_toggled() {
        let mut session = session(390);
        add(&mut session, 5);

        let page = render_page(&session);
        assert!(page.contains("[购物车 (1)]"));
        assert!(!page.contains("订单详情"));

        toggle_cart_panel(&mut session.view, &session.config);
        let page = render_page(&session);
        assert!(page.contains("══ 订单详情 ══"));
        assert!(page.contains("酸辣汤"));
    }

    #[test]
    fn test_resize_moves_cart_into_sheet() {
        let mut session = session(1440);
        add(&mut session, 2);
        assert!(render_page(&session).contains("── 订单详情"));

        set_viewport_width(&mut session.view, &session.config, 600);
        let page = render_page(&session);
        assert!(!page.contains("订单详情"));
        assert!(page.contains("[购物车 (1)]"));

        toggle_cart_panel(&mut session.view, &session.config);
        assert!(render_page(&session).contains("══ 订单详情 ══"));
    }

    #[test]
    fn test_wide_uses_inline_panel() {
        let page = render_page(&session(1440));
        assert!(page.contains(&format!("── 订单详情 {}", HALF_RULE)));
        assert!(!page.contains("[×] close"));
    }

    #[test]
    fn test_half_rule_is_half_the_rule() {
        assert_eq!(HALF_RULE.chars().count() * 2, RULE.chars().count());

        let mut session = session(1440);
        add(&mut session, 7);
        let page = render_page(&session);
        assert!(page.contains(&format!("  {}\n  小计    ¥36", HALF_RULE)));
    }

    #[test]
    fn test_cards_show_price_and_image() {
        let page = render_page(&session(1280));
        assert!(page.contains("#8 清蒸鲈鱼  Steamed Fish    ¥88  <主菜>"));
        assert!(page.contains("图片: /steamed-fish-chinese.jpg"));
    }
}
