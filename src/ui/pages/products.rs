use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row};
use ratatui::Frame;

use crate::models::Product;
use crate::query::PageIndex;
use crate::ui::app::App;
use crate::ui::format;
use crate::ui::layout::split_top;
use crate::ui::theme::{metal_color, product_status_color, stock_color, BRAND_GOLD, HEADER_TEXT, MUTED};
use crate::ui::widgets;
use crate::worker::{Resource, ResourceData};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductsView {
    pub search: String,
    pub index: PageIndex,
    pub selected: usize,
}

impl ProductsView {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            index: PageIndex::new(page_size),
            selected: 0,
        }
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.index.reset();
        self.selected = 0;
    }

    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|product| product.matches(&self.search))
            .collect()
    }

    pub fn selected_product<'a>(&self, products: &'a [Product]) -> Option<&'a Product> {
        let visible = self.visible(products);
        self.index.slice(&visible).get(self.selected).copied()
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.products_view();
    let (search_area, rest) = split_top(area, 1);
    let (table_area, pager_area) = split_top(rest, rest.height.saturating_sub(1));

    let cursor = if app.is_searching() { "█" } else { "" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Search: ", Style::default().fg(MUTED)),
            Span::styled(
                format!("{}{cursor}", view.search),
                Style::default().fg(HEADER_TEXT),
            ),
        ])),
        search_area,
    );

    let status = app.status(&Resource::Products {
        limit: app.ui_config().list_fetch_limit,
    });
    let list = status.list_view(|data| match data {
        ResourceData::Products(list) => list.products.as_slice(),
        _ => &[],
    });

    widgets::list_region(
        frame,
        table_area,
        "Products",
        list,
        "No products yet. Press n to create one.",
        |frame, area, products| {
            let visible = view.visible(products);
            let rows: Vec<Row> = view
                .index
                .slice(&visible)
                .iter()
                .map(|product| {
                    let metal = product
                        .metal_type
                        .map(|metal| widgets::badge(metal.label(), metal_color(metal)))
                        .unwrap_or_else(|| Span::raw(format::MISSING));
                    let stock = product.stock.unwrap_or(0);
                    Row::new(vec![
                        Line::from(product.name.clone()),
                        Line::from(format::text(product.sku.as_deref())),
                        Line::from(metal),
                        Line::from(format::text(product.category.as_deref())),
                        Line::from(format::grams(product.weight)),
                        Line::from(format::text(product.purity.as_deref())),
                        Line::from(Span::styled(
                            stock.to_string(),
                            Style::default().fg(stock_color(stock)),
                        )),
                        Line::from(widgets::badge(
                            product.status.label(),
                            product_status_color(&product.status),
                        )),
                    ])
                })
                .collect();
            let selected = (!rows.is_empty()).then_some(view.selected);
            widgets::table(
                frame,
                area,
                "Products",
                &[
                    "Name", "SKU", "Metal", "Category", "Weight", "Purity", "Stock", "Status",
                ],
                &[
                    Constraint::Percentage(22),
                    Constraint::Percentage(12),
                    Constraint::Percentage(9),
                    Constraint::Percentage(13),
                    Constraint::Percentage(11),
                    Constraint::Percentage(9),
                    Constraint::Percentage(8),
                    Constraint::Percentage(16),
                ],
                rows,
                selected,
            );

            let len = visible.len();
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(
                        " {len} products  ·  page {}/{}",
                        view.index.page() + 1,
                        view.index.page_count(len).max(1)
                    ),
                    Style::default().fg(BRAND_GOLD),
                ))),
                pager_area,
            );
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "category": category,
        }))
        .unwrap()
    }

    #[test]
    fn search_narrows_and_selection_follows_page() {
        let products = vec![
            product("1", "Lakshmi Coin", "coins"),
            product("2", "Ganesh Bar", "bars"),
            product("3", "Bangle", "ornaments"),
        ];
        let mut view = ProductsView::new(2);
        view.index.next(products.len());
        assert_eq!(
            view.selected_product(&products).map(|p| p.id.as_str()),
            Some("3")
        );

        view.set_search("bar".to_string());
        assert_eq!(view.visible(&products).len(), 1);
        assert_eq!(
            view.selected_product(&products).map(|p| p.id.as_str()),
            Some("2")
        );
    }
}
